//! Database repositories for data access layer
//
// Video metadata repository
pub mod video;
//
// Schema migrations embedded from the workspace migrations/ directory
mod migrations;

pub use migrations::run_migrations;
pub use video::{PgVideoRepository, VideoRepository};
