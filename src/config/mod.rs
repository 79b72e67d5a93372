//! Configuration handling for Roster
//!
//! Settings come from three layers, highest precedence first:
//! - command-line flags and their environment variables (`ROSTER_*`)
//! - the YAML configuration file ([`RosterConfig`])
//! - built-in defaults

pub mod file;

pub use file::RosterConfig;

use std::path::{Path, PathBuf};

use crate::domain::DuplicatePolicy;
use crate::error::Result;

/// Effective settings for one session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Course name; `None` means ask at startup
    pub course_name: Option<String>,
    pub duplicate_policy: DuplicatePolicy,
}

/// Values given on the command line, already merged with their env vars by clap
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub course_name: Option<String>,
    pub duplicate_policy: Option<DuplicatePolicy>,
    pub config_path: Option<PathBuf>,
}

impl Settings {
    /// Resolve settings from overrides, the configuration file and defaults
    ///
    /// An explicitly named configuration file must exist. The default file
    /// under the platform config directory is used only when present.
    pub fn resolve(overrides: Overrides) -> Result<Self> {
        let config = match overrides.config_path.as_deref() {
            Some(path) => load_from(path)?,
            None => match file::default_path().filter(|p| p.is_file()) {
                Some(path) => load_from(&path)?,
                None => {
                    tracing::debug!("no configuration file found, using defaults");
                    RosterConfig::default()
                }
            },
        };

        Ok(Self::merge(overrides, config))
    }

    fn merge(overrides: Overrides, config: RosterConfig) -> Self {
        Self {
            course_name: overrides
                .course_name
                .or(config.course_name)
                .filter(|name| !name.trim().is_empty()),
            duplicate_policy: overrides
                .duplicate_policy
                .or(config.duplicate_ids)
                .unwrap_or_default(),
        }
    }
}

fn load_from(path: &Path) -> Result<RosterConfig> {
    tracing::debug!(path = %path.display(), "loading configuration");
    RosterConfig::load(path)
}
