//! Local-path provider: `file://` references resolved via filesystem
//! metadata, read-only.

use anyhow::{Context, Result};
use std::path::PathBuf;
use url::Url;

use crate::cursor::{Cursor, DISPLAY_NAME, SIZE};
use crate::display_name;
use crate::mime_map::MimeMap;

use super::ContentProvider;

pub struct FileProvider {
    mime: MimeMap,
}

impl FileProvider {
    pub fn new(mime: MimeMap) -> Self {
        Self { mime }
    }

    fn local_path(uri: &Url) -> Result<PathBuf> {
        uri.to_file_path()
            .map_err(|_| anyhow::anyhow!("not a local file reference: {}", uri))
    }
}

impl ContentProvider for FileProvider {
    fn content_type(&self, uri: &Url) -> Result<Option<String>> {
        let path = Self::local_path(uri)?;
        let mime = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.mime.lookup(ext));
        Ok(mime)
    }

    fn query(&self, uri: &Url) -> Result<Option<Cursor>> {
        let path = Self::local_path(uri)?;
        let metadata =
            std::fs::metadata(&path).with_context(|| format!("stat {}", path.display()))?;

        // The display-name cell stays null for paths without a usable final
        // segment (e.g. `file:///`); the resolver synthesizes a name then.
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .and_then(|n| display_name::sanitize(&n));

        let cursor = Cursor::new(
            vec![DISPLAY_NAME, SIZE],
            vec![vec![name, Some(metadata.len().to_string())]],
        );
        Ok(Some(cursor))
    }
}
