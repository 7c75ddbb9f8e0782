//! Request payloads for upload tests.

use axum_test::multipart::{MultipartForm, Part};
use bytes::Bytes;

pub const MIB: usize = 1024 * 1024;

/// Bytes standing in for a video; content is never inspected.
pub fn fake_video(size: usize) -> Bytes {
    Bytes::from(vec![0x42u8; size])
}

/// A form carrying one file in the `video` field.
pub fn video_form(file_name: &str, mime_type: &str, data: Bytes) -> MultipartForm {
    video_form_with_field("video", file_name, mime_type, data)
}

pub fn video_form_with_field(
    field: &str,
    file_name: &str,
    mime_type: &str,
    data: Bytes,
) -> MultipartForm {
    let part = Part::bytes(data)
        .file_name(file_name.to_string())
        .mime_type(mime_type.to_string());
    MultipartForm::new().add_part(field.to_string(), part)
}
