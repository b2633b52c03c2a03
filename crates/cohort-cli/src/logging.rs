// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Console logging initialization.
//!
//! Logs go to stderr so stdout stays reserved for the group listing.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Initialize console logging at the given level.
///
/// The level string accepts anything `EnvFilter` understands, so both
/// plain levels ("debug") and per-crate directives
/// ("info,cohort_division=trace") work.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .with_context(|| format!("invalid log level '{}'", level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
