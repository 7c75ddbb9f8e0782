//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers;
use vidshelf_core::models;

/// Returns the OpenAPI document served at `/api/openapi.json`.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vidshelf API",
        version = "0.1.0",
        description = "Video upload service. Upload a video as multipart field `video`, list stored videos. Errors are returned as plain text."
    ),
    paths(
        handlers::upload::upload_video,
        handlers::videos::list_videos,
        handlers::health::health_check,
    ),
    components(schemas(
        models::UploadResponse,
        models::VideoResponse,
        handlers::health::HealthCheckResponse,
    )),
    tags(
        (name = "videos", description = "Video upload and listing"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
