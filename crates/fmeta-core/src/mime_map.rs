//! Extension → MIME lookup, the local stand-in for the host's type map.
//!
//! Covers the media and document types the bridge is asked about in
//! practice; `[mime] extra` config entries override the built-in table.
//! Unknown extensions return `None` and the resolver falls back to the
//! generic binary type.

use std::collections::HashMap;

const BUILTIN: &[(&str, &str)] = &[
    // Audio
    ("mp3", "audio/mpeg"),
    ("wav", "audio/x-wav"),
    ("ogg", "audio/ogg"),
    ("m4a", "audio/mp4"),
    ("flac", "audio/flac"),
    ("aac", "audio/aac"),
    ("wma", "audio/x-ms-wma"),
    // Video
    ("mp4", "video/mp4"),
    ("mkv", "video/x-matroska"),
    ("webm", "video/webm"),
    ("avi", "video/x-msvideo"),
    ("mov", "video/quicktime"),
    // Documents & data
    ("pdf", "application/pdf"),
    ("txt", "text/plain"),
    ("csv", "text/csv"),
    ("json", "application/json"),
    ("xml", "application/xml"),
    ("html", "text/html"),
    // Images
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("svg", "image/svg+xml"),
    // Archives & packages
    ("zip", "application/zip"),
    ("gz", "application/gzip"),
    ("tar", "application/x-tar"),
    ("deb", "application/vnd.debian.binary-package"),
    ("iso", "application/x-iso9660-image"),
];

/// Case-insensitive extension → MIME table with config overrides.
#[derive(Debug, Clone, Default)]
pub struct MimeMap {
    extra: HashMap<String, String>,
}

impl MimeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with extra entries layered over the built-ins. Keys are
    /// extensions without the leading dot; lookups are case-insensitive.
    pub fn with_extra(extra: HashMap<String, String>) -> Self {
        let extra = extra
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        Self { extra }
    }

    /// MIME type for a bare extension, if known.
    pub fn lookup(&self, extension: &str) -> Option<String> {
        let key = extension.to_ascii_lowercase();
        if let Some(mime) = self.extra.get(&key) {
            return Some(mime.clone());
        }
        BUILTIN
            .iter()
            .find(|(ext, _)| *ext == key)
            .map(|(_, mime)| (*mime).to_string())
    }

    /// MIME type for a file name, keyed on its extension.
    pub fn for_name(&self, name: &str) -> Option<String> {
        let (stem, extension) = name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        self.lookup(extension)
    }
}
