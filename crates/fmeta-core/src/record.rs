//! The metadata record handed back to the embedding runtime.

use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Generic binary content type used when a provider reports no MIME type.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Prefix for synthesized display names.
pub const FALLBACK_NAME_PREFIX: &str = "file_";

/// Resolved metadata for a single resource reference.
///
/// Built fresh per call and owned by the caller; both fields are guaranteed
/// non-empty (see [`fallback_name`] and [`FALLBACK_MIME`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaRecord {
    /// Human-readable display name of the resource.
    pub name: String,
    /// Content type of the resource.
    pub mime: String,
}

/// Synthesizes a display name from the current time: `file_<epoch_ms>`.
///
/// Uniqueness is best effort only: two calls within the same millisecond
/// yield the same name.
pub fn fallback_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    format!("{}{}", FALLBACK_NAME_PREFIX, millis)
}
