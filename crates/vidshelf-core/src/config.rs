//! Configuration module
//!
//! Configuration is read once at process start and passed by reference into
//! every component. Nothing reads the environment after [`Config::from_env`].

use std::env;

use crate::constants::{
    DEFAULT_ALLOWED_CONTENT_TYPES, DEFAULT_MAX_UPLOAD_SIZE_MB, DEFAULT_PORT, DEFAULT_STATIC_DIR,
    DEFAULT_STATIC_ROUTE,
};
use crate::storage_types::StorageBackend;
use crate::validation::UploadPolicy;

// Common constants
const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const REQUEST_BODY_MULTIPLIER: usize = 4;

/// Server-level settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub environment: String,
}

/// Full service configuration
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub base: BaseConfig,
    pub database_url: String,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, etc.)
    pub aws_region: Option<String>,
    pub aws_access_key_id: Option<String>,
    pub aws_secret_access_key: Option<String>,
    pub local_storage_path: String,
    pub local_storage_base_url: String,
    // Static file serving
    pub static_dir: String,
    pub static_route: String,
    // Upload policy
    pub max_upload_size_bytes: usize,
    pub allowed_content_types: Vec<String>,
    pub max_request_body_bytes: usize,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<ServiceConfig>);

impl Config {
    fn inner(&self) -> &ServiceConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        is_production_env(&self.inner().base.environment)
    }

    /// Load `.env` (if present) and build the configuration from the process environment.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ServiceConfig::from_lookup(lookup)?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.inner().validate()
    }

    /// Upload allow-list and size ceiling.
    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy::new(
            self.inner().allowed_content_types.clone(),
            self.inner().max_upload_size_bytes,
        )
    }

    pub fn server_port(&self) -> u16 {
        self.inner().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.inner().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.inner().base.environment
    }

    pub fn db_max_connections(&self) -> u32 {
        self.inner().base.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.inner().base.db_timeout_seconds
    }

    pub fn database_url(&self) -> &str {
        &self.inner().database_url
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.inner().storage_backend
    }

    pub fn s3_bucket(&self) -> Option<&str> {
        self.inner().s3_bucket.as_deref()
    }

    pub fn s3_region(&self) -> Option<&str> {
        self.inner().s3_region.as_deref()
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.inner().s3_endpoint.as_deref()
    }

    pub fn aws_region(&self) -> Option<&str> {
        self.inner().aws_region.as_deref()
    }

    /// Explicit credentials, only when both halves are configured.
    pub fn aws_credentials(&self) -> Option<(&str, &str)> {
        match (
            self.inner().aws_access_key_id.as_deref(),
            self.inner().aws_secret_access_key.as_deref(),
        ) {
            (Some(id), Some(secret)) => Some((id, secret)),
            _ => None,
        }
    }

    pub fn local_storage_path(&self) -> &str {
        &self.inner().local_storage_path
    }

    pub fn local_storage_base_url(&self) -> &str {
        &self.inner().local_storage_base_url
    }

    pub fn static_dir(&self) -> &str {
        &self.inner().static_dir
    }

    pub fn static_route(&self) -> &str {
        &self.inner().static_route
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.inner().max_upload_size_bytes
    }

    pub fn allowed_content_types(&self) -> &[String] {
        &self.inner().allowed_content_types
    }

    pub fn max_request_body_bytes(&self) -> usize {
        self.inner().max_request_body_bytes
    }
}

fn is_production_env(environment: &str) -> bool {
    let env = environment.to_lowercase();
    env == "production" || env == "prod"
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn mib_to_bytes(mb: usize, name: &str) -> Result<usize, anyhow::Error> {
    mb.checked_mul(1024 * 1024)
        .ok_or_else(|| anyhow::anyhow!("{} is too large", name))
}

impl ServiceConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = var("ENVIRONMENT")
            .or_else(|| var("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins_str = var("CORS_ORIGINS").unwrap_or_else(|| "*".to_string());
        if is_production_env(&environment) && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let server_port: u16 = match var("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => DEFAULT_PORT,
        };

        let base = BaseConfig {
            server_port,
            cors_origins: split_list(&cors_origins_str),
            db_max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: var("DB_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            environment,
        };

        let storage_backend = match var("STORAGE_BACKEND") {
            Some(s) => s.parse::<StorageBackend>()?,
            None => StorageBackend::S3,
        };

        let max_upload_size_mb = var("MAX_UPLOAD_SIZE_MB")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE_MB);

        let max_upload_size_bytes = mib_to_bytes(max_upload_size_mb, "MAX_UPLOAD_SIZE_MB")?;

        let max_request_body_bytes = match var("MAX_REQUEST_BODY_MB")
            .and_then(|s| s.parse::<usize>().ok())
        {
            Some(mb) => mib_to_bytes(mb, "MAX_REQUEST_BODY_MB")?,
            None => max_upload_size_bytes
                .checked_mul(REQUEST_BODY_MULTIPLIER)
                .ok_or_else(|| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB is too large"))?,
        };

        let allowed_content_types = var("ALLOWED_CONTENT_TYPES")
            .map(|s| {
                split_list(&s)
                    .into_iter()
                    .map(|ct| ct.to_lowercase())
                    .collect()
            })
            .unwrap_or_else(|| {
                DEFAULT_ALLOWED_CONTENT_TYPES
                    .iter()
                    .map(|ct| ct.to_string())
                    .collect()
            });

        let local_storage_base_url = var("LOCAL_STORAGE_BASE_URL").unwrap_or_else(|| {
            format!("http://localhost:{}{}", server_port, DEFAULT_STATIC_ROUTE)
        });

        let config = ServiceConfig {
            base,
            database_url: var("DATABASE_URL")
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?,
            storage_backend,
            s3_bucket: var("S3_BUCKET").or_else(|| var("AWS_BUCKET_NAME")),
            s3_region: var("S3_REGION"),
            s3_endpoint: var("S3_ENDPOINT"),
            aws_region: var("AWS_REGION"),
            aws_access_key_id: var("AWS_ACCESS_KEY_ID"),
            aws_secret_access_key: var("AWS_SECRET_ACCESS_KEY"),
            local_storage_path: var("LOCAL_STORAGE_PATH")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            local_storage_base_url,
            static_dir: var("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            static_route: var("STATIC_ROUTE").unwrap_or_else(|| DEFAULT_STATIC_ROUTE.to_string()),
            max_upload_size_bytes,
            allowed_content_types,
            max_request_body_bytes,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !(self.database_url.starts_with("postgresql://")
            || self.database_url.starts_with("postgres://"))
        {
            return Err(anyhow::anyhow!(
                "DATABASE_URL must be a valid PostgreSQL connection string"
            ));
        }

        if self.allowed_content_types.is_empty() {
            return Err(anyhow::anyhow!(
                "ALLOWED_CONTENT_TYPES must list at least one content type"
            ));
        }

        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be greater than 0"));
        }

        if self.max_request_body_bytes < self.max_upload_size_bytes {
            return Err(anyhow::anyhow!(
                "MAX_REQUEST_BODY_MB must not be smaller than MAX_UPLOAD_SIZE_MB"
            ));
        }

        if !self.static_route.starts_with('/') || self.static_route.trim_matches('/').is_empty() {
            return Err(anyhow::anyhow!(
                "STATIC_ROUTE must start with '/' and name a sub-path"
            ));
        }

        match self.storage_backend {
            StorageBackend::S3 => {
                if self.s3_bucket.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_BUCKET (or AWS_BUCKET_NAME) must be set when using S3 storage backend"
                    ));
                }
                if self.s3_region.is_none() && self.aws_region.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_REGION or AWS_REGION must be set when using S3 storage backend"
                    ));
                }
            }
            StorageBackend::Local => {}
        }

        Ok(())
    }
}
