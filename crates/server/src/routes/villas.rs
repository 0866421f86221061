use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::info;

use models::villa::{CreateVillaInput, UpdateVillaInput, VillaDto, VillaId, VillaPatch};

use crate::errors::ApiError;
use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/villa", tag = "villa",
    responses((status = 200, description = "All villas in insertion order", body = [crate::openapi::VillaDoc]))
)]
pub async fn list_villas(State(state): State<ServerState>) -> Json<Vec<VillaDto>> {
    let villas = state.villas.list().await;
    info!(count = villas.len(), "list villas");
    Json(villas.into_iter().map(VillaDto::from).collect())
}

#[utoipa::path(
    get, path = "/villa/{id}", tag = "villa",
    params(("id" = i32, Path, description = "Villa id")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::VillaDoc),
        (status = 400, description = "Non-positive id"),
        (status = 404, description = "No such villa")
    )
)]
pub async fn get_villa(
    State(state): State<ServerState>,
    Path(id): Path<VillaId>,
) -> Result<Json<VillaDto>, ApiError> {
    let villa = state.villas.get(id).await?;
    Ok(Json(villa.into()))
}

#[utoipa::path(
    post, path = "/villa", tag = "villa",
    request_body = crate::openapi::CreateVillaInputDoc,
    responses(
        (status = 201, description = "Created, Location header set", body = crate::openapi::VillaDoc),
        (status = 400, description = "Missing/empty or duplicate name")
    )
)]
pub async fn create_villa(
    State(state): State<ServerState>,
    Json(input): Json<CreateVillaInput>,
) -> Result<impl IntoResponse, ApiError> {
    let villa = state.villas.create(input).await?;
    let location = format!("/villa/{}", villa.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(VillaDto::from(villa)),
    ))
}

#[utoipa::path(
    put, path = "/villa/{id}", tag = "villa",
    params(("id" = i32, Path, description = "Villa id")),
    request_body = crate::openapi::UpdateVillaInputDoc,
    responses(
        (status = 204, description = "Renamed"),
        (status = 400, description = "Invalid or mismatched id, or bad name"),
        (status = 404, description = "No such villa")
    )
)]
pub async fn update_villa(
    State(state): State<ServerState>,
    Path(id): Path<VillaId>,
    Json(input): Json<UpdateVillaInput>,
) -> Result<StatusCode, ApiError> {
    state.villas.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch, path = "/villa/{id}", tag = "villa",
    params(("id" = i32, Path, description = "Villa id")),
    request_body = crate::openapi::VillaPatchDoc,
    responses(
        (status = 204, description = "Patched"),
        (status = 400, description = "Patched state is invalid"),
        (status = 404, description = "No such villa")
    )
)]
pub async fn patch_villa(
    State(state): State<ServerState>,
    Path(id): Path<VillaId>,
    Json(patch): Json<VillaPatch>,
) -> Result<StatusCode, ApiError> {
    state.villas.patch(id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/villa/{id}", tag = "villa",
    params(("id" = i32, Path, description = "Villa id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Non-positive id"),
        (status = 404, description = "No such villa")
    )
)]
pub async fn delete_villa(
    State(state): State<ServerState>,
    Path(id): Path<VillaId>,
) -> Result<StatusCode, ApiError> {
    state.villas.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
