//! Configuration file support.
//!
//! An optional `stepviz.toml` sets playback and input defaults. CLI flags
//! override whatever the file says.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [playback]
//! speed_ms = 1000        # Delay between steps, 200-2000 in steps of 200
//!
//! [input]
//! size = 10              # Length of randomized arrays (1-16)
//! seed = 42              # Seed for randomized inputs
//!
//! [defaults]
//! algorithm = "bubble"   # Algorithm shown at startup
//! # target = 22          # Search target / pair sum
//! # window = 3           # Sliding window size
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::algorithm::Algorithm;
use crate::input::random::DEFAULT_SEED;
use crate::input::MAX_LEN;
use crate::replay::Speed;
use crate::session::DEFAULT_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "stepviz.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub input: InputConfig,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackConfig {
    pub speed_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed_ms: Speed::DEFAULT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub size: usize,
    pub seed: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    pub algorithm: Algorithm,
    pub target: Option<i64>,
    pub window: Option<usize>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Bubble,
            target: None,
            window: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let speed = self.playback.speed_ms;
        if !(Speed::MIN_MS..=Speed::MAX_MS).contains(&speed) || speed % Speed::STEP_MS != 0 {
            return Err(ConfigError::Validation(format!(
                "playback.speed_ms must be a multiple of {} between {} and {}",
                Speed::STEP_MS,
                Speed::MIN_MS,
                Speed::MAX_MS
            )));
        }
        if self.input.size == 0 || self.input.size > MAX_LEN {
            return Err(ConfigError::Validation(format!(
                "input.size must be 1-{}",
                MAX_LEN
            )));
        }
        if self.defaults.window == Some(0) {
            return Err(ConfigError::Validation(
                "defaults.window must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn speed(&self) -> Speed {
        Speed::from_millis(self.playback.speed_ms)
    }
}

/// Parse and validate a config file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Resolve the config to use: an explicit path must exist, otherwise
/// `stepviz.toml` in `dir` is used when present, otherwise defaults.
pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<(Config, Option<PathBuf>), ConfigError> {
    if let Some(path) = explicit {
        return Ok((load_config(path)?, Some(path.to_path_buf())));
    }
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    if candidate.is_file() {
        let config = load_config(&candidate)?;
        return Ok((config, Some(candidate)));
    }
    Ok((Config::default(), None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.speed(), Speed::default());
        assert_eq!(config.input.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("stepviz.toml");
        fs::write(
            &path,
            r#"
[defaults]
algorithm = "two-pointer"
target = 12
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.defaults.algorithm, Algorithm::TwoPointer);
        assert_eq!(config.defaults.target, Some(12));
        assert_eq!(config.playback.speed_ms, 1000);
        assert_eq!(config.input.size, DEFAULT_SIZE);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("stepviz.toml");
        fs::write(&path, "[playback]\nspeed = 400\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_speed_out_of_range_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("stepviz.toml");
        fs::write(&path, "[playback]\nspeed_ms = 150\n").unwrap();
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_discover_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let (config, path) = discover(None, tmp.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.is_none());
    }

    #[test]
    fn test_discover_picks_up_working_directory_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(DEFAULT_CONFIG_FILE), "[input]\nseed = 7\n").unwrap();
        let (config, path) = discover(None, tmp.path()).unwrap();
        assert_eq!(config.input.seed, 7);
        assert!(path.is_some());
    }

    #[test]
    fn test_discover_explicit_missing_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.toml");
        assert!(matches!(
            discover(Some(&missing), tmp.path()),
            Err(ConfigError::Io(_))
        ));
    }
}
