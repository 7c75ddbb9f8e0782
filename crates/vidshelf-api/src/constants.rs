//! API route paths

pub const UPLOAD_PATH: &str = "/api/upload";
pub const VIDEOS_PATH: &str = "/api/videos";
pub const HEALTH_PATH: &str = "/health";
pub const OPENAPI_PATH: &str = "/api/openapi.json";
pub const DOCS_PATH: &str = "/docs";
