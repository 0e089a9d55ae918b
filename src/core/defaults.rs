use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::fingerprint::DEFAULT_SEED;
use crate::utils::io;

pub const CONFIG_FILE_NAME: &str = "iconforge.json";

/// Root configuration structure for iconforge.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconforgeConfig {
    /// Directory holding `<icon>.svg` and `<icon>.json` pairs.
    #[serde(default = "default_icons_dir")]
    pub icons_dir: String,

    /// Print progress and next-step hints to stderr.
    #[serde(default = "default_log_info")]
    pub log_info: bool,

    #[serde(default = "default_hash_seed")]
    pub hash_seed: u32,
}

impl Default for IconforgeConfig {
    fn default() -> Self {
        Self {
            icons_dir: default_icons_dir(),
            log_info: default_log_info(),
            hash_seed: default_hash_seed(),
        }
    }
}

impl IconforgeConfig {
    /// `icons_dir` with `~` and `$VARS` expanded, relative to `base`.
    pub fn resolve_icons_dir(&self, base: &Path) -> PathBuf {
        resolve_dir(&self.icons_dir, base)
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_icons_dir() -> String {
    "icons".to_string()
}

fn default_log_info() -> bool {
    true
}

fn default_hash_seed() -> u32 {
    DEFAULT_SEED
}

/// Expand `~`/env vars in `raw` and anchor relative paths at `base`.
pub fn resolve_dir(raw: &str, base: &Path) -> PathBuf {
    let expanded = shellexpand::full(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    let path = PathBuf::from(expanded);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Load iconforge.json from `dir`. Missing file yields defaults; malformed
/// JSON is an error.
pub fn load_config_from(dir: &Path) -> crate::Result<IconforgeConfig> {
    let path = dir.join(CONFIG_FILE_NAME);

    if !path.exists() {
        return Ok(IconforgeConfig::default());
    }

    let content = io::read_file(&path, &format!("read {}", path.display()))?;

    serde_json::from_str(&content).map_err(|e| {
        crate::Error::validation_invalid_json(e, Some(format!("parse {}", CONFIG_FILE_NAME)))
    })
}
