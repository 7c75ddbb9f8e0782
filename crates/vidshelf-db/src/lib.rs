//! Vidshelf metadata store
//!
//! PostgreSQL persistence for video records, plus the embedded migrations.

pub mod db;

pub use db::{run_migrations, PgVideoRepository, VideoRepository};
