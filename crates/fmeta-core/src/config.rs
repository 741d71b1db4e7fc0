use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// HTTP probe parameters (optional `[http]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout for metadata probes, in seconds.
    pub connect_timeout_secs: u64,
    /// Total probe timeout, in seconds.
    pub timeout_secs: u64,
    /// Follow redirects when probing.
    pub follow_redirects: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            follow_redirects: true,
        }
    }
}

/// MIME table overrides (optional `[mime]` section in config.toml).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MimeConfig {
    /// Extra extension → MIME entries; these override the built-in table.
    #[serde(default)]
    pub extra: HashMap<String, String>,
}

/// Global configuration loaded from `~/.config/fmeta/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FmetaConfig {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub mime: MimeConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fmeta")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FmetaConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FmetaConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FmetaConfig = toml::from_str(&data)?;
    Ok(cfg)
}
