//! `fmeta mime <name>` – extension → MIME lookup for a file name.

use fmeta_core::config::FmetaConfig;
use fmeta_core::mime_map::MimeMap;
use fmeta_core::record::FALLBACK_MIME;

pub fn run_mime(cfg: &FmetaConfig, name: &str) {
    let map = MimeMap::with_extra(cfg.mime.extra.clone());
    let mime = map
        .for_name(name)
        .unwrap_or_else(|| FALLBACK_MIME.to_string());
    println!("{mime}");
}
