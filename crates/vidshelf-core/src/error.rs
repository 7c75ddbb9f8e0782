//! Error types module
//!
//! All failures of the upload and listing flows are unified under [`AppError`].
//! Each variant carries a fixed client-facing reason; the HTTP layer renders
//! that reason as a plain-text body with the variant's status code.
//!
//! The metadata-store variants wrap `sqlx::Error` when the `sqlx` feature is
//! enabled and a plain message otherwise.

#[cfg(feature = "sqlx")]
use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_WRITE_FAILED")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No video file uploaded")]
    MissingFile,

    #[error("Invalid file type: {content_type}")]
    InvalidFileType { content_type: String },

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Object store write failed: {0}")]
    StorageWrite(String),

    #[cfg(feature = "sqlx")]
    #[error("Metadata write failed: {0}")]
    MetadataWrite(#[source] SqlxError),

    #[cfg(not(feature = "sqlx"))]
    #[error("Metadata write failed: {0}")]
    MetadataWrite(String),

    #[cfg(feature = "sqlx")]
    #[error("Metadata read failed: {0}")]
    MetadataRead(#[source] SqlxError),

    #[cfg(not(feature = "sqlx"))]
    #[error("Metadata read failed: {0}")]
    MetadataRead(String),
}

/// Static metadata for each variant: (http_status, error_code, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::MissingFile => (400, "MISSING_FILE", LogLevel::Debug),
        AppError::InvalidFileType { .. } => (400, "INVALID_FILE_TYPE", LogLevel::Debug),
        AppError::FileTooLarge { .. } => (400, "FILE_TOO_LARGE", LogLevel::Debug),
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", LogLevel::Debug),
        AppError::StorageWrite(_) => (500, "STORAGE_WRITE_FAILED", LogLevel::Error),
        AppError::MetadataWrite(_) => (500, "METADATA_WRITE_FAILED", LogLevel::Error),
        AppError::MetadataRead(_) => (500, "METADATA_READ_FAILED", LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for log fields
    pub fn error_type(&self) -> &str {
        match self {
            AppError::MissingFile => "MissingFile",
            AppError::InvalidFileType { .. } => "InvalidFileType",
            AppError::FileTooLarge { .. } => "FileTooLarge",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::StorageWrite(_) => "StorageWrite",
            AppError::MetadataWrite(_) => "MetadataWrite",
            AppError::MetadataRead(_) => "MetadataRead",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MissingFile => "No video file uploaded.".to_string(),
            AppError::InvalidFileType { .. } => {
                "Invalid file type. Only MP4, MKV, and AVI are allowed.".to_string()
            }
            AppError::FileTooLarge { max, .. } => {
                format!("File size exceeds {}MB limit.", max / 1024 / 1024)
            }
            AppError::InvalidInput(_) => "Invalid multipart request.".to_string(),
            AppError::StorageWrite(_) => "Error uploading video to S3.".to_string(),
            AppError::MetadataWrite(_) => "Failed to save video metadata.".to_string(),
            AppError::MetadataRead(_) => "Error fetching videos.".to_string(),
        }
    }
}
