//! Vidshelf Core Library
//!
//! This crate provides the domain model, error types, configuration, and upload
//! validation policy shared across all Vidshelf components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::{BaseConfig, Config, ServiceConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
pub use validation::UploadPolicy;
