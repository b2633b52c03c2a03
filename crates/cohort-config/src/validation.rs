// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Checks that loaded configuration values are usable before any work
//! starts, so a typo in `cohort.toml` fails fast instead of surfacing
//! halfway through a run.

use crate::{CohortConfig, ConfigError, ConfigResult};

/// Log levels the logging setup understands
pub const KNOWN_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate the complete configuration.
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every invalid value.
pub fn validate_config(config: &CohortConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    let level = config.logging.level.to_lowercase();
    if !KNOWN_LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level '{}' is not one of {}",
            config.logging.level,
            KNOWN_LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        Err(ConfigError::ValidationError(format!(
            "configuration validation failed:\n{}",
            error_messages
        )))
    }
}
