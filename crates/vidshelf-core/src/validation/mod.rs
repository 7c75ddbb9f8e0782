//! Upload validation policy
//!
//! Checks run in a fixed order before any store is touched: file present,
//! declared content type allowed, size within the ceiling. The declared content
//! type is trusted as sent; the bytes are never sniffed.

use crate::constants::{DEFAULT_ALLOWED_CONTENT_TYPES, DEFAULT_MAX_UPLOAD_SIZE_MB};
use crate::AppError;

/// Allow-list and size ceiling applied to every upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    allowed_content_types: Vec<String>,
    max_file_size: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_ALLOWED_CONTENT_TYPES
                .iter()
                .map(|ct| ct.to_string())
                .collect(),
            DEFAULT_MAX_UPLOAD_SIZE_MB * 1024 * 1024,
        )
    }
}

impl UploadPolicy {
    pub fn new(allowed_content_types: Vec<String>, max_file_size: usize) -> Self {
        Self {
            allowed_content_types: allowed_content_types
                .into_iter()
                .map(|ct| ct.trim().to_lowercase())
                .filter(|ct| !ct.is_empty())
                .collect(),
            max_file_size,
        }
    }

    pub fn allowed_content_types(&self) -> &[String] {
        &self.allowed_content_types
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Reject a declared content type outside the allow-list.
    ///
    /// Comparison is on the MIME essence only, so `video/mp4; codecs=avc1`
    /// matches `video/mp4`.
    pub fn check_content_type(&self, content_type: Option<&str>) -> Result<(), AppError> {
        let declared = content_type.unwrap_or_default();
        let essence = normalize_mime_type(declared).to_lowercase();
        if self.allowed_content_types.iter().any(|ct| *ct == essence) {
            Ok(())
        } else {
            Err(AppError::InvalidFileType {
                content_type: declared.to_string(),
            })
        }
    }

    /// Reject a payload larger than the ceiling. Exactly `max_file_size` bytes is accepted.
    pub fn check_size(&self, size: usize) -> Result<(), AppError> {
        if size > self.max_file_size {
            return Err(AppError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }
        Ok(())
    }
}

/// Normalize MIME type by stripping parameters (e.g. "video/mp4; codecs=avc1" -> "video/mp4").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}
