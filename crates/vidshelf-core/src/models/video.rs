use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored video: the name the client supplied, where the blob lives, and
/// when the record was created. Records are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct VideoRecord {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Fields supplied by the upload flow; `id` and `uploaded_at` are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideoRecord {
    pub name: String,
    pub url: String,
}

impl NewVideoRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Listing representation of a [`VideoRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub name: String,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

impl From<VideoRecord> for VideoResponse {
    fn from(record: VideoRecord) -> Self {
        VideoResponse {
            name: record.name,
            url: record.url,
            uploaded_at: record.uploaded_at,
        }
    }
}

/// Body returned by a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    pub file_path: String,
}
