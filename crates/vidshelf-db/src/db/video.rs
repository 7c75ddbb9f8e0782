use async_trait::async_trait;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;
use vidshelf_core::models::{NewVideoRecord, VideoRecord};
use vidshelf_core::AppError;

/// Metadata store for uploaded videos.
///
/// Records are append-only: there is no update or delete.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Persist one record. `uploaded_at` is assigned by the store.
    async fn insert(&self, record: NewVideoRecord) -> Result<VideoRecord, AppError>;

    /// Every record, oldest first.
    async fn find_all(&self) -> Result<Vec<VideoRecord>, AppError>;

    /// Cheap round trip used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Repository for the `videos` table
#[derive(Clone)]
pub struct PgVideoRepository {
    pool: PgPool,
}

impl PgVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoRepository for PgVideoRepository {
    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "insert"))]
    async fn insert(&self, record: NewVideoRecord) -> Result<VideoRecord, AppError> {
        let video = sqlx::query_as::<Postgres, VideoRecord>(
            r#"
            INSERT INTO videos (id, name, url)
            VALUES ($1, $2, $3)
            RETURNING id, name, url, uploaded_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&record.name)
        .bind(&record.url)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::MetadataWrite)?;

        tracing::debug!(video_id = %video.id, "Video record inserted");

        Ok(video)
    }

    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "select"))]
    async fn find_all(&self) -> Result<Vec<VideoRecord>, AppError> {
        let videos = sqlx::query_as::<Postgres, VideoRecord>(
            "SELECT id, name, url, uploaded_at FROM videos ORDER BY uploaded_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::MetadataRead)?;

        Ok(videos)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<Postgres, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::MetadataRead)?;
        Ok(())
    }
}
