use crate::error::HttpAppError;
use crate::services::VideoUploadService;
use crate::state::AppState;
use crate::utils::upload::extract_video_field;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use std::sync::Arc;
use vidshelf_core::models::UploadResponse;
use vidshelf_core::AppError;

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "videos",
    request_body(content = inline(Object), content_type = "multipart/form-data",
        description = "Multipart form with the video file in the `video` field"),
    responses(
        (status = 200, description = "Video uploaded successfully", body = UploadResponse),
        (status = 400, description = "Missing file, disallowed content type, oversized file, or malformed multipart body", body = String, content_type = "text/plain"),
        (status = 500, description = "Object store or metadata store failure", body = String, content_type = "text/plain")
    )
)]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    // A request that is not multipart at all carries no file.
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!(rejection = %rejection.body_text(), "Upload without a multipart body");
        AppError::MissingFile
    })?;

    let video = extract_video_field(multipart, &state.upload_policy).await?;

    let response = VideoUploadService::new(&state).store(video).await?;

    Ok(Json(response))
}
