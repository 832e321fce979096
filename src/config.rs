use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};
use crate::operations::{Footprint, DEFAULT_SHRINK_FACTOR};

/// Tunables for a planning run.
///
/// Loadable from TOML; missing keys fall back to [`PlannerConfig::default`].
///
/// ```toml
/// shrink_factor = 0.01
///
/// [footprint]
/// kind = "circular"
/// segments = 16
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Robot shape used for obstacle inflation.
    pub footprint: Footprint,
    /// Fraction by which obstacles are shrunk before visibility tests.
    pub shrink_factor: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            footprint: Footprint::Rhombus,
            shrink_factor: DEFAULT_SHRINK_FACTOR,
        }
    }
}

impl PlannerConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Config` if the text is not a valid configuration.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| InputError::Config(e.to_string()).into())
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileAccess` if the file cannot be read, or
    /// `InputError::Config` if its contents are invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| InputError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
