//! Vidshelf API Library
//!
//! This crate provides the HTTP handlers, upload service, and application setup.

// Module declarations
mod api_doc;
pub mod constants;
mod handlers;
mod utils;

// Public modules
pub mod error;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::HttpAppError;
pub use state::AppState;
