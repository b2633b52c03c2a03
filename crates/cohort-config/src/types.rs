// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines the configuration structs that map to sections in
//! `cohort.toml`.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CohortConfig {
    pub division: DivisionConfig,
    pub random: RandomConfig,
    pub logging: LoggingConfig,
}

/// Defaults for the division parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DivisionConfig {
    /// Permitted difference between a group's size and the target group
    /// size, used when the CLI does not specify one
    pub deviation: usize,
}

impl Default for DivisionConfig {
    fn default() -> Self {
        Self { deviation: 1 }
    }
}

/// Random source configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed seed for the random source; omitted = seed from entropy.
    /// A fixed seed makes group composition and listing order
    /// reproducible across runs.
    pub seed: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn or error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
