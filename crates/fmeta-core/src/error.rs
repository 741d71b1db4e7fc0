//! Bridge error type: one caller-visible kind with an enumerated reason.
//!
//! Every failure mode (bad reference syntax, unsupported scheme, provider
//! failure, dispatch failure) surfaces to the embedding runtime as the same
//! `META_ERROR` kind with a fixed message. The reason and the underlying
//! cause are kept for diagnostics and logging only.

use std::fmt;

/// Stable error code surfaced to the embedding runtime.
pub const META_ERROR_CODE: &str = "META_ERROR";

/// Fixed caller-facing message.
const META_ERROR_MESSAGE: &str = "Failed to get file metadata";

/// Why a resolution or dispatch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaFailure {
    /// The reference string did not parse as a URI.
    InvalidUri,
    /// No provider is registered for the URI scheme.
    UnsupportedScheme,
    /// The provider's content-type lookup or metadata query failed.
    Query,
    /// The bridge could not run or join the blocking call.
    Dispatch,
    /// No module is registered under the requested capability name.
    UnknownCapability,
    /// The module does not expose the requested operation.
    UnknownOperation,
}

impl MetaFailure {
    /// Short label for logs.
    pub fn label(self) -> &'static str {
        match self {
            MetaFailure::InvalidUri => "invalid-uri",
            MetaFailure::UnsupportedScheme => "unsupported-scheme",
            MetaFailure::Query => "query",
            MetaFailure::Dispatch => "dispatch",
            MetaFailure::UnknownCapability => "unknown-capability",
            MetaFailure::UnknownOperation => "unknown-operation",
        }
    }
}

/// The single error kind returned by the resolver and the bridge.
#[derive(Debug)]
pub struct MetaError {
    reason: MetaFailure,
    source: Option<anyhow::Error>,
}

impl MetaError {
    pub fn new(reason: MetaFailure) -> Self {
        Self {
            reason,
            source: None,
        }
    }

    pub fn with_source(reason: MetaFailure, source: anyhow::Error) -> Self {
        Self {
            reason,
            source: Some(source),
        }
    }

    /// Stable code for the embedding runtime (`META_ERROR`).
    pub fn code(&self) -> &'static str {
        META_ERROR_CODE
    }

    /// Diagnostic reason; not part of the caller-facing contract.
    pub fn reason(&self) -> MetaFailure {
        self.reason
    }
}

impl fmt::Display for MetaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", META_ERROR_MESSAGE)
    }
}

impl std::error::Error for MetaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| -> &(dyn std::error::Error + 'static) { e.as_ref() })
    }
}
