use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::{storage::memory::MemoryVillaStore, villa::VillaService};

pub mod villas;

/// Shared handler state: the villa service over the in-memory store.
#[derive(Clone)]
pub struct ServerState {
    pub villas: Arc<VillaService<MemoryVillaStore>>,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, villa CRUD and Swagger UI.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let villa_routes = Router::new()
        .route("/villa", get(villas::list_villas).post(villas::create_villa))
        .route(
            "/villa/:id",
            get(villas::get_villa)
                .put(villas::update_villa)
                .patch(villas::patch_villa)
                .delete(villas::delete_villa),
        );

    Router::new()
        .route("/health", get(health))
        .merge(villa_routes)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
