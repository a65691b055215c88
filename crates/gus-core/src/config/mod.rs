//! Configuration file management.
//!
//! A `gus.yml` file only seeds default thresholds for the command line; the
//! pipeline itself always receives explicit parameters.

mod defaults;

#[cfg(test)]
mod tests;

pub use defaults::{default_config_yaml, QuantifyDefaults};

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Candidate config file names, in lookup order.
pub const CONFIG_FILENAMES: &[&str] = &["gus.yml", "gus.yaml"];

/// Environment variable pointing at a config file
pub const CONFIG_ENV_VAR: &str = "GUS_CONFIG";

/// Loaded configuration together with where it came from and any warnings.
#[derive(Debug, Clone)]
pub struct ConfigHandle {
    pub config: GusConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl ConfigHandle {
    fn with_config(config: GusConfig, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GusConfig {
    pub defaults: QuantifyDefaults,
}

impl GusConfig {
    fn sanitize(mut self, warnings: &mut Vec<String>) -> Self {
        self.defaults.sanitize(warnings);
        self
    }
}

/// Load configuration from disk, optionally forcing a specific path.
///
/// Never fails: unreadable or malformed files are reported as warnings and
/// the next candidate is tried, ending with built-in defaults.
pub fn load_config(custom_path: Option<&Path>) -> ConfigHandle {
    load_from_candidates(config_candidates(custom_path))
}

fn load_from_candidates(candidates: Vec<PathBuf>) -> ConfigHandle {
    let mut warnings = Vec::new();

    for candidate in candidates {
        if !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match parse_config(&contents) {
                Ok(config) => {
                    let config = config.sanitize(&mut warnings);
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return ConfigHandle::with_config(config, Some(source), warnings);
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    log::debug!("No config file found; using built-in defaults");
    ConfigHandle::with_config(GusConfig::default(), None, warnings)
}

/// Parse YAML config text. An empty document yields the defaults.
pub fn parse_config(contents: &str) -> Result<GusConfig, String> {
    if contents.trim().is_empty() {
        return Ok(GusConfig::default());
    }
    serde_yaml::from_str(contents).map_err(|e| e.to_string())
}

/// Config file candidates to try, most specific first
fn config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(home_dir.join("gus").join(name));
        }
    }

    candidates
}
