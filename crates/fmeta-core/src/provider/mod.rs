//! Provider seam over the host's content-resolution services.
//!
//! The resolver depends only on this trait; each URI scheme is served by
//! its own provider. Both calls are read-only against the host.

mod file;
mod http;

pub use file::FileProvider;
pub use http::HttpProvider;

use anyhow::Result;
use url::Url;

use crate::cursor::Cursor;

/// One scheme's view of the host content-resolution service.
pub trait ContentProvider: Send + Sync {
    /// Content type of the reference, if the host knows one.
    fn content_type(&self, uri: &Url) -> Result<Option<String>>;

    /// Metadata query scoped to the single reference: all available
    /// columns, no filter, no sort. `None` means the host returned no
    /// result set for the reference.
    fn query(&self, uri: &Url) -> Result<Option<Cursor>>;
}
