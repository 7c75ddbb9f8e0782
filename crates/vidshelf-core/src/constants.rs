//! Constants shared across crates.

/// Multipart field that carries the uploaded video.
pub const VIDEO_FIELD_NAME: &str = "video";

/// Default size ceiling for a single upload, in MiB.
pub const DEFAULT_MAX_UPLOAD_SIZE_MB: usize = 50;

/// Content types accepted by default: MP4, MKV and AVI containers.
pub const DEFAULT_ALLOWED_CONTENT_TYPES: [&str; 3] = ["video/mp4", "video/mkv", "video/avi"];

/// Message returned with a successful upload.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "Video uploaded successfully!";

/// Default port, matching what existing frontends point at.
pub const DEFAULT_PORT: u16 = 5000;

/// URL prefix under which locally retained uploads are served.
pub const DEFAULT_STATIC_ROUTE: &str = "/uploads";

/// Directory served under [`DEFAULT_STATIC_ROUTE`].
pub const DEFAULT_STATIC_DIR: &str = "./uploads";
