//! Shared key generation for storage backends.

use chrono::Utc;

/// Build the storage key for an upload received at `millis` since the epoch.
pub fn generate_storage_key(millis: i64, filename: &str) -> String {
    format!("{}_{}", millis, filename)
}

/// Storage key for an upload received now.
pub fn timestamped_key(filename: &str) -> String {
    generate_storage_key(Utc::now().timestamp_millis(), filename)
}

/// Percent-encode each path segment of a key for use in a URL.
pub(crate) fn encode_key_for_url(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
