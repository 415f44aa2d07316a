//! Normalization options, loadable from `~/.config/urlnorm/config.toml`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::filter::ParamAllowlist;

/// Options for [`crate::url_normalize`]. Doubles as the on-disk config
/// record; CLI flags override whatever was loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Scheme attached to scheme-less input.
    pub default_scheme: String,
    /// Charset for percent-decoded text. Only `utf-8` is honored; decoded
    /// bytes outside valid UTF-8 become U+FFFD either way.
    pub charset: String,
    /// Sort query pairs lexicographically (default true).
    pub sort_query_params: bool,
    /// Drop query parameters not present in the allowlist.
    pub filter_params: bool,
    /// Allowlist for filtering; `None` falls back to the built-in table of
    /// well-known hosts.
    pub param_allowlist: Option<ParamAllowlist>,
    /// Domain attached to host-less absolute paths (`/path`).
    pub default_domain: Option<String>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            default_scheme: "https".to_string(),
            charset: "utf-8".to_string(),
            sort_query_params: true,
            filter_params: false,
            param_allowlist: None,
            default_domain: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlnorm")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load options from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NormalizeOptions> {
    let path = config_path()?;
    if !path.exists() {
        let defaults = NormalizeOptions::default();
        let toml = toml::to_string_pretty(&defaults)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(defaults);
    }

    let data = fs::read_to_string(&path)?;
    let options: NormalizeOptions = toml::from_str(&data)?;
    Ok(options)
}
