// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Loading applies three tiers in order:
//! 1. TOML file (base values; defaults when no file exists)
//! 2. Environment variables (`COHORT_*` runtime overrides)
//! 3. CLI arguments (explicit user overrides, applied by the CLI itself)

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{CohortConfig, ConfigError, ConfigResult};

const CONFIG_FILE_NAMES: [&str; 2] = ["cohort.toml", ".cohort.toml"];

/// Find the cohort configuration file.
///
/// Search order:
/// 1. `COHORT_CONFIG_PATH` environment variable
/// 2. Current working directory: `./cohort.toml`, `./.cohort.toml`
///
/// Returns `Ok(None)` when no file exists anywhere - running without a
/// configuration file is supported, all values then come from defaults and
/// environment overrides.
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` when `COHORT_CONFIG_PATH` points at
/// a path that does not exist.
pub fn find_config_file() -> ConfigResult<Option<PathBuf>> {
    if let Ok(env_path) = env::var("COHORT_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        return if path.exists() {
            Ok(Some(path))
        } else {
            Err(ConfigError::FileNotFound(format!(
                "config file specified by COHORT_CONFIG_PATH not found: {}",
                path.display()
            )))
        };
    }

    if let Ok(cwd) = env::current_dir() {
        for name in CONFIG_FILE_NAMES {
            let path = cwd.join(name);
            if path.exists() {
                return Ok(Some(path));
            }
        }
    }

    Ok(None)
}

/// Load configuration from a TOML file, then apply environment overrides.
///
/// # Arguments
///
/// * `config_path` - Optional explicit path. If `None`, searches via
///   [`find_config_file`]; when nothing is found the defaults are used.
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` when an explicit path does not
/// exist, `ConfigError::ParseError` for invalid TOML.
pub fn load_config(config_path: Option<&Path>) -> ConfigResult<CohortConfig> {
    let config_file = match config_path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.display().to_string()));
            }
            Some(path.to_path_buf())
        }
        None => find_config_file()?,
    };

    let mut config = match config_file {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content)?
        }
        None => CohortConfig::default(),
    };

    apply_environment_overrides(&mut config);

    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `COHORT_DEVIATION` -> `division.deviation`
/// - `COHORT_SEED` -> `random.seed`
/// - `COHORT_LOG_LEVEL` -> `logging.level`
///
/// Values that do not parse as the target type are ignored.
pub fn apply_environment_overrides(config: &mut CohortConfig) {
    if let Ok(value) = env::var("COHORT_DEVIATION") {
        if let Ok(deviation) = value.parse() {
            config.division.deviation = deviation;
        }
    }

    if let Ok(value) = env::var("COHORT_SEED") {
        if let Ok(seed) = value.parse() {
            config.random.seed = Some(seed);
        }
    }

    if let Ok(value) = env::var("COHORT_LOG_LEVEL") {
        config.logging.level = value;
    }
}
