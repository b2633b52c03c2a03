// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Support library for the `cohort` binary: logging setup and the group
listing renderer. Kept as a library so the output format is testable
without spawning the binary.
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod logging;
pub mod output;

pub use logging::init_logging;
pub use output::{display_name, render_division};
