//! Video upload service
//!
//! Stores a validated video: object store first, then the metadata record.
//! The two writes are not atomic. If the record write fails the object stays
//! in the store and the request fails.

use std::sync::Arc;

use vidshelf_core::constants::UPLOAD_SUCCESS_MESSAGE;
use vidshelf_core::models::{NewVideoRecord, UploadResponse};
use vidshelf_core::AppError;
use vidshelf_db::VideoRepository;
use vidshelf_storage::{timestamped_key, Storage};

use crate::state::AppState;
use crate::utils::upload::ValidatedVideo;

pub struct VideoUploadService {
    storage: Arc<dyn Storage>,
    videos: Arc<dyn VideoRepository>,
}

impl VideoUploadService {
    pub fn new(state: &AppState) -> Self {
        Self {
            storage: state.storage.clone(),
            videos: state.videos.clone(),
        }
    }

    /// Write the blob, then the record pointing at it.
    pub async fn store(&self, video: ValidatedVideo) -> Result<UploadResponse, AppError> {
        let key = timestamped_key(&video.filename);
        let size = video.data.len();

        let url = self
            .storage
            .put(&key, video.data, &video.content_type)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    key = %key,
                    size_bytes = size,
                    backend = %self.storage.backend_type(),
                    "Object store write failed"
                );
                AppError::StorageWrite(e.to_string())
            })?;

        let record = self
            .videos
            .insert(NewVideoRecord::new(video.filename, url.clone()))
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    key = %key,
                    url = %url,
                    "Metadata write failed; stored object left in place"
                );
                e
            })?;

        tracing::info!(
            video_id = %record.id,
            name = %record.name,
            key = %key,
            size_bytes = size,
            "Video uploaded"
        );

        Ok(UploadResponse {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            file_path: url,
        })
    }
}
