/// Engine configuration loaded from an optional TOML file.
///
/// Every field has a default, so an empty file (or no file at all) yields
/// the stock behaviour. Frontends may override individual values after
/// loading, e.g. from command-line flags.
use crate::error::{EngineError, Result};
use crate::platform::VolumeCandidate;
use serde::Deserialize;
use std::path::Path;

/// Default accumulation depth bound.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Default number of children the directory scanner collects before ranking.
pub const DEFAULT_WORKING_CAPACITY: usize = 128;

/// Default number of ranked rows a listing query asks for.
pub const DEFAULT_MAX_ITEMS: usize = 128;

/// Default breadcrumb depth bound.
pub const DEFAULT_NAV_DEPTH: usize = 16;

/// Default settle delay before a deferred rescan runs.
pub const DEFAULT_REFRESH_DELAY_MS: u64 = 300;

/// Default height of the frontend's scrolling window.
pub const DEFAULT_VISIBLE_ROWS: usize = 12;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Directories nested deeper than this contribute zero bytes.
    pub max_depth: usize,
    /// Children collected per directory listing before sorting.
    pub working_capacity: usize,
    /// Rows requested per listing.
    pub max_items: usize,
    /// Maximum breadcrumb depth, root included.
    pub nav_depth: usize,
    /// Milliseconds to wait after navigation before rescanning.
    pub refresh_delay_ms: u64,
    /// Rows shown at once by the text frontend.
    pub visible_rows: usize,
    /// Replaces the built-in mount candidates when present.
    pub volumes: Option<Vec<VolumeCandidate>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            working_capacity: DEFAULT_WORKING_CAPACITY,
            max_items: DEFAULT_MAX_ITEMS,
            nav_depth: DEFAULT_NAV_DEPTH,
            refresh_delay_ms: DEFAULT_REFRESH_DELAY_MS,
            visible_rows: DEFAULT_VISIBLE_ROWS,
            volumes: None,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| EngineError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&text).map_err(|e| EngineError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Mount candidates to probe: the configured list, or the built-in one.
    pub fn candidates(&self) -> Vec<VolumeCandidate> {
        match &self.volumes {
            Some(list) => list.clone(),
            None => crate::platform::default_candidates(),
        }
    }
}
