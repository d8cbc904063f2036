//! Configuration management for the fixture tooling
//!
//! This module provides runtime configuration loading from JSON files so the
//! catalog location and output style can change without recompilation.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default lookup path for [`FixtureConfig::load`], bundled with the crate sources.
pub const DEFAULT_CONFIG_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fixture_config.json");

/// Complete fixture tooling configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the service catalog comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file on disk (defaults to the bundled `fixtures/services.json`)
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Use the compiled-in catalog when the default file does not exist;
    /// an explicit `path` never falls back
    #[serde(default = "default_allow_embedded_fallback")]
    pub allow_embedded_fallback: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            allow_embedded_fallback: default_allow_embedded_fallback(),
        }
    }
}

/// CLI output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_allow_embedded_fallback() -> bool {
    true
}

fn default_pretty() -> bool {
    true
}

impl FixtureConfig {
    /// Load configuration from JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// The loaded configuration, or the defaults when the file is missing or
    /// its JSON is invalid.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }

    pub fn load() -> Self {
        Self::load_from_file(DEFAULT_CONFIG_PATH)
    }
}
