use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use vidshelf_core::models::VideoResponse;

#[utoipa::path(
    get,
    path = "/api/videos",
    tag = "videos",
    responses(
        (status = 200, description = "Every stored video, oldest first", body = Vec<VideoResponse>),
        (status = 500, description = "Metadata store failure", body = String, content_type = "text/plain")
    )
)]
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VideoResponse>>, HttpAppError> {
    let videos = state.videos.find_all().await?;

    tracing::debug!(count = videos.len(), "Listed videos");

    Ok(Json(videos.into_iter().map(VideoResponse::from).collect()))
}
