//! User configuration, stored as `.lineage/config.json`.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Title shown for addresses that do not own any asset themselves.
pub const DEFAULT_PLACEHOLDER_TITLE: &str = "Inherited Secret";

/// Directory holding per-project configuration.
pub const CONFIG_DIR: &str = ".lineage";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineageConfig {
    pub version: String,

    /// Default subject address for statistics.
    pub subject: Option<String>,

    /// Display title for nodes that own no asset.
    pub placeholder_title: String,
}

impl Default for LineageConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            subject: None,
            placeholder_title: DEFAULT_PLACEHOLDER_TITLE.to_string(),
        }
    }
}

impl LineageConfig {
    /// Loads a config file. Missing keys take their defaults.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Loads `<root>/.lineage/config.json` if present, otherwise defaults.
    pub fn discover<P: AsRef<Path>>(root: P) -> Result<Self> {
        let path = root.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);
        if path.exists() {
            Self::from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Writes the config as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path.as_ref(), serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
