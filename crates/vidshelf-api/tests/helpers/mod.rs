//! Test helpers: build AppState and router for integration tests.
//!
//! The stores are in-memory fakes (see [`fakes`]) so these tests need no
//! database or object store. Run with `cargo test -p vidshelf-api`.

#![allow(dead_code)]

pub mod fakes;
pub mod fixtures;

use axum_test::TestServer;
use fakes::{InMemoryVideoRepository, MemoryStorage};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use vidshelf_api::setup::routes;
use vidshelf_api::AppState;
use vidshelf_core::Config;
use vidshelf_db::VideoRepository;
use vidshelf_storage::{LocalStorage, Storage};

/// Test application: server plus handles on the fakes behind it.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<MemoryStorage>,
    pub videos: Arc<InMemoryVideoRepository>,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Build a configuration from `overrides` on top of a local-backend baseline
/// rooted in `static_dir`.
pub fn test_config(static_dir: &Path, overrides: &[(&str, &str)]) -> Config {
    let dir = static_dir.display().to_string();
    let mut env: HashMap<String, String> = [
        ("DATABASE_URL", "postgresql://localhost/vidshelf_test"),
        ("STORAGE_BACKEND", "local"),
        ("LOCAL_STORAGE_PATH", dir.as_str()),
        ("STATIC_DIR", dir.as_str()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for (k, v) in overrides {
        env.insert(k.to_string(), v.to_string());
    }

    Config::from_lookup(|key| env.get(key).cloned()).expect("Invalid test configuration")
}

/// Build a test server around arbitrary store implementations.
pub fn build_server(
    config: &Config,
    storage: Arc<dyn Storage>,
    videos: Arc<dyn VideoRepository>,
) -> TestServer {
    let state = Arc::new(AppState::new(config.clone(), storage, videos));
    let app = routes::setup_routes(config, state).expect("Failed to build routes");
    TestServer::new(app).expect("Failed to create test server")
}

/// Setup test app with default limits and healthy fakes.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(&[], MemoryStorage::new(), InMemoryVideoRepository::new())
}

pub fn setup_test_app_with(
    overrides: &[(&str, &str)],
    storage: MemoryStorage,
    videos: InMemoryVideoRepository,
) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = test_config(temp_dir.path(), overrides);

    let storage = Arc::new(storage);
    let videos = Arc::new(videos);
    let server = build_server(&config, storage.clone(), videos.clone());

    TestApp {
        server,
        storage,
        videos,
        _temp_dir: temp_dir,
    }
}

/// Test app writing to a real [`LocalStorage`] in a temp directory that the
/// router also serves as static files.
pub async fn setup_local_storage_app() -> (TestServer, Arc<InMemoryVideoRepository>, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = test_config(temp_dir.path(), &[]);

    let storage = LocalStorage::new(
        config.local_storage_path(),
        config.local_storage_base_url().to_string(),
    )
    .await
    .expect("Failed to create local storage");
    let videos = Arc::new(InMemoryVideoRepository::new());
    let server = build_server(&config, Arc::new(storage), videos.clone());

    (server, videos, temp_dir)
}
