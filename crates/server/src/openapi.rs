use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct VillaDoc {
    pub id: i32,
    pub name: String,
}

#[derive(ToSchema)]
pub struct CreateVillaInputDoc {
    pub id: Option<i32>,
    pub name: String,
}

#[derive(ToSchema)]
pub struct UpdateVillaInputDoc {
    pub id: i32,
    pub name: String,
}

#[derive(ToSchema)]
pub struct VillaPatchDoc {
    pub name: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::villas::list_villas,
        crate::routes::villas::get_villa,
        crate::routes::villas::create_villa,
        crate::routes::villas::update_villa,
        crate::routes::villas::patch_villa,
        crate::routes::villas::delete_villa,
    ),
    components(schemas(
        HealthResponse,
        VillaDoc,
        CreateVillaInputDoc,
        UpdateVillaInputDoc,
        VillaPatchDoc,
    )),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "villa", description = "Villa CRUD endpoints")
    )
)]
pub struct ApiDoc;
