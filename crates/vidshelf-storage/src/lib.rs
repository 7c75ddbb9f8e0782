//! Vidshelf Storage Library
//!
//! Object store abstraction with S3 and local filesystem backends.
//!
//! # Storage key format
//!
//! Every upload is stored under `{millis_since_epoch}_{original_filename}`.
//! The filename is kept as the client sent it; two uploads of the same name in
//! the same millisecond share a key and the later write wins.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::{generate_storage_key, timestamped_key};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
pub use vidshelf_core::StorageBackend;
