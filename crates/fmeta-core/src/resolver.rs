//! Metadata resolution over scheme-routed content providers.
//!
//! `resolve` is synchronous, stateless, and reentrant: parse the reference,
//! look up the content type, query for a display name, apply fallbacks, and
//! return the record or the single `META_ERROR` kind. The query cursor is
//! released on every exit path.

use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

use crate::config::FmetaConfig;
use crate::cursor::DISPLAY_NAME;
use crate::error::{MetaError, MetaFailure};
use crate::mime_map::MimeMap;
use crate::provider::{ContentProvider, FileProvider, HttpProvider};
use crate::record::{self, MetaRecord, FALLBACK_MIME};

pub struct MetaResolver {
    providers: HashMap<String, Arc<dyn ContentProvider>>,
}

impl MetaResolver {
    /// Resolver with no providers; register them with
    /// [`register_provider`](Self::register_provider).
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Resolver serving `file`, `http`, and `https` references.
    pub fn with_defaults(cfg: &FmetaConfig) -> Self {
        let mut resolver = Self::new();
        let mime = MimeMap::with_extra(cfg.mime.extra.clone());
        resolver.register_provider("file", Arc::new(FileProvider::new(mime)));

        let http: Arc<dyn ContentProvider> = Arc::new(HttpProvider::new(&cfg.http));
        resolver.register_provider("http", Arc::clone(&http));
        resolver.register_provider("https", http);
        resolver
    }

    pub fn register_provider(&mut self, scheme: &str, provider: Arc<dyn ContentProvider>) {
        self.providers.insert(scheme.to_string(), provider);
    }

    /// Registered schemes, sorted.
    pub fn schemes(&self) -> Vec<String> {
        let mut schemes: Vec<String> = self.providers.keys().cloned().collect();
        schemes.sort();
        schemes
    }

    /// Resolves a reference string to its metadata record.
    pub fn resolve(&self, resource: &str) -> Result<MetaRecord, MetaError> {
        let uri = Url::parse(resource)
            .map_err(|e| MetaError::with_source(MetaFailure::InvalidUri, e.into()))?;

        let provider = self
            .providers
            .get(uri.scheme())
            .ok_or_else(|| MetaError::new(MetaFailure::UnsupportedScheme))?;

        let mime = provider
            .content_type(&uri)
            .map_err(|e| MetaError::with_source(MetaFailure::Query, e))?;

        let name = query_display_name(provider.as_ref(), &uri)
            .map_err(|e| MetaError::with_source(MetaFailure::Query, e))?;

        let name = name.unwrap_or_else(record::fallback_name);
        let mime = mime
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| FALLBACK_MIME.to_string());

        tracing::debug!(uri = %uri, name = %name, mime = %mime, "resolved metadata");
        Ok(MetaRecord { name, mime })
    }
}

impl Default for MetaResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// First-row display name from the provider's metadata query, if any.
///
/// The cursor is released before returning; the drop guard covers the error
/// path as well.
fn query_display_name(provider: &dyn ContentProvider, uri: &Url) -> anyhow::Result<Option<String>> {
    let Some(mut cursor) = provider.query(uri)? else {
        return Ok(None);
    };

    let mut name = None;
    if let Some(index) = cursor.column_index(DISPLAY_NAME) {
        if cursor.move_to_first() {
            name = cursor.string_value(index);
        }
    }
    cursor.release();

    Ok(name.filter(|n| !n.is_empty()))
}
