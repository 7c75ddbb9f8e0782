//! In-memory stand-ins for the object store and the metadata store that count
//! calls and can be told to fail.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;
use vidshelf_core::models::{NewVideoRecord, VideoRecord};
use vidshelf_core::{AppError, StorageBackend};
use vidshelf_db::VideoRepository;
use vidshelf_storage::{Storage, StorageError, StorageResult};

pub const FAKE_BUCKET_URL: &str = "https://test-bucket.s3.us-east-1.amazonaws.com";

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub data: Bytes,
    pub content_type: String,
}

#[derive(Default)]
pub struct MemoryStorage {
    objects: Mutex<HashMap<String, StoredObject>>,
    put_calls: AtomicUsize,
    fail_puts: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `put` fails as if the object store were unreachable.
    pub fn failing() -> Self {
        Self {
            fail_puts: true,
            ..Self::default()
        }
    }

    pub fn put_calls(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }

    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    pub fn url_for(key: &str) -> String {
        format!("{}/{}", FAKE_BUCKET_URL, key)
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> StorageResult<String> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_puts {
            return Err(StorageError::UploadFailed("simulated outage".to_string()));
        }
        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                data,
                content_type: content_type.to_string(),
            },
        );
        Ok(Self::url_for(key))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

#[derive(Default)]
pub struct InMemoryVideoRepository {
    records: Mutex<Vec<VideoRecord>>,
    insert_calls: AtomicUsize,
    fail_writes: bool,
    fail_reads: bool,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts fail; reads still work.
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Reads and pings fail; inserts still work.
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn records(&self) -> Vec<VideoRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn insert(&self, record: NewVideoRecord) -> Result<VideoRecord, AppError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(AppError::MetadataWrite(sqlx::Error::PoolTimedOut));
        }
        let stored = VideoRecord {
            id: Uuid::new_v4(),
            name: record.name,
            url: record.url,
            uploaded_at: Utc::now(),
        };
        self.records.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<VideoRecord>, AppError> {
        if self.fail_reads {
            return Err(AppError::MetadataRead(sqlx::Error::PoolClosed));
        }
        Ok(self.records())
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.fail_reads {
            return Err(AppError::MetadataRead(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}
