//! Application state shared by every handler.

use std::sync::Arc;
use vidshelf_core::{Config, UploadPolicy};
use vidshelf_db::VideoRepository;
use vidshelf_storage::Storage;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Object store for video blobs
    pub storage: Arc<dyn Storage>,
    /// Metadata store for video records
    pub videos: Arc<dyn VideoRepository>,
    pub upload_policy: UploadPolicy,
}

impl AppState {
    pub fn new(
        config: Config,
        storage: Arc<dyn Storage>,
        videos: Arc<dyn VideoRepository>,
    ) -> Self {
        let upload_policy = config.upload_policy();
        Self {
            config,
            storage,
            videos,
            upload_policy,
        }
    }
}
