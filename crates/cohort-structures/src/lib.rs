// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
The core crate for cohort. Defines the basic data structures used throughout:
students with identifier-based equality and the `Group` membership container
that the partition engine operates on.

All randomness is injected: operations that need a random source take
`&mut impl rand::Rng`, so callers decide between entropy seeding and a fixed
seed (`StdRng::seed_from_u64`) for reproducible runs.
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod error;
mod group;
mod student;

pub use error::GroupError;
pub use group::{Group, Shuffled};
pub use student::Student;
