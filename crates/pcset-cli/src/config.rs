//! User configuration.
//!
//! Settings come from a JSON file; command-line flags override them. The file
//! is optional: when `--config` is not given and no file exists at the
//! default location, the defaults are used.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pcset_core::Spelling;
use serde::{Deserialize, Serialize};

/// File name looked up under the platform config directory.
pub const CONFIG_FILE: &str = "config.json";

/// Persistent preferences for the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PcsetConfig {
    /// How black keys are spelled in output ("sharps" or "flats")
    pub spelling: Spelling,
    /// Whether combination reports list every subset before the results
    pub show_subsets: bool,
}

impl PcsetConfig {
    /// Parse a config from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Default config location: `<config dir>/pcset/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pcset").join(CONFIG_FILE))
    }

    /// Load the config from `explicit` if given, otherwise from the default
    /// location if a file exists there, otherwise return the defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(Path::new(path));
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, flats: bool, show_subsets: bool) -> Self {
        if flats {
            self.spelling = Spelling::Flats;
        }
        if show_subsets {
            self.show_subsets = true;
        }
        self
    }
}
