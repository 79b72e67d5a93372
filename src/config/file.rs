//! Roster configuration file (config.yaml) data structures

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::DuplicatePolicy;
use crate::error::{
    Result, RosterError,
    config::{not_found, parse_failed, read_failed},
};

/// File name looked up under the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Roster configuration (config.yaml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterConfig {
    /// Course to manage; skips the startup prompt when set
    #[serde(default)]
    pub course_name: Option<String>,

    /// Handling of student ids that are already enrolled
    #[serde(default)]
    pub duplicate_ids: Option<DuplicatePolicy>,
}

impl RosterConfig {
    /// Parse roster configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Read and parse the configuration file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;

        Self::from_yaml(&content).map_err(|e| match e {
            RosterError::ConfigParseFailed { reason, .. } => {
                parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }
}

/// Default configuration path, e.g. `~/.config/roster/config.yaml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("roster").join(CONFIG_FILE_NAME))
}
