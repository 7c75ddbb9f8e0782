//! Multipart extraction for the upload handler

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::{Bytes, BytesMut};
use vidshelf_core::constants::VIDEO_FIELD_NAME;
use vidshelf_core::{AppError, UploadPolicy};

/// A video file that passed the upload policy and is fully buffered.
#[derive(Debug, Clone)]
pub struct ValidatedVideo {
    /// Filename exactly as the client sent it
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

/// Map a multipart read failure to a rejection.
///
/// Hitting the request body limit is a size rejection. The limit trips on the
/// raw stream, so the exact file size is unknown; it is reported as one byte
/// over the ceiling.
fn multipart_error(err: MultipartError, policy: &UploadPolicy) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::FileTooLarge {
            size: policy.max_file_size().saturating_add(1),
            max: policy.max_file_size(),
        };
    }
    AppError::InvalidInput(err.body_text())
}

/// Find the `video` file field and validate it against `policy`.
///
/// The declared content type is checked from the part headers before any of
/// the body is read. The body is then buffered chunk by chunk and reading stops
/// as soon as it exceeds the size ceiling or the request body limit. Fields
/// with another name, or a `video` field without a filename, are skipped.
pub async fn extract_video_field(
    mut multipart: Multipart,
    policy: &UploadPolicy,
) -> Result<ValidatedVideo, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, policy))?
    {
        if field.name() != Some(VIDEO_FIELD_NAME) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let content_type = field.content_type().map(str::to_string);
        policy.check_content_type(content_type.as_deref())?;

        let data = read_limited(field, policy).await?;

        tracing::debug!(
            filename = %filename,
            content_type = ?content_type,
            size_bytes = data.len(),
            "Video field accepted"
        );

        return Ok(ValidatedVideo {
            filename,
            content_type: content_type.unwrap_or_default(),
            data,
        });
    }

    Err(AppError::MissingFile)
}

async fn read_limited(mut field: Field<'_>, policy: &UploadPolicy) -> Result<Bytes, AppError> {
    let mut buffer = BytesMut::new();
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| multipart_error(e, policy))?
    {
        let size = buffer.len() + chunk.len();
        policy.check_size(size)?;
        buffer.extend_from_slice(&chunk);
    }
    Ok(buffer.freeze())
}
