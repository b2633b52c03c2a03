// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Cohort - divide a class of students into groups
//!
//! Cohort partitions a roster of uniquely identified students into disjoint
//! groups that approximate a target size within a permitted deviation.
//! This umbrella crate re-exports the component crates; each component is
//! also published individually for selective use.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! cohort = "0.6"
//! ```
//!
//! ```rust
//! use cohort::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let class: Group<Student> = (0..12)
//!     .map(|i| Student::new(format!("First{i}"), format!("Last{i}"), format!("{i:07}")))
//!     .collect();
//!
//! // Seeded random source: the same seed reproduces the same grouping.
//! let mut rng = StdRng::seed_from_u64(42);
//! let division = divide(&class, 4, 1, &mut rng).unwrap();
//!
//! assert_eq!(division.groups.len(), 3);
//! ```
//!
//! ## Feature Flags
//!
//! - **`roster-io`** (default): CSV roster reading and writing
//! - **`config`** (default): TOML configuration loader
//!
//! ## Components
//!
//! - [`cohort_structures`]: `Student` and the `Group` membership container
//! - [`cohort_division`]: feasibility checking and group construction
//! - `cohort-roster-io`: CSV roster adapter
//! - `cohort-config`: configuration loader

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cohort_division as division;
pub use cohort_structures as structures;

#[cfg(feature = "config")]
pub use cohort_config as config;
#[cfg(feature = "roster-io")]
pub use cohort_roster_io as roster_io;

/// The common imports for dividing a class into groups.
pub mod prelude {
    pub use cohort_division::{check_feasibility, divide, Division, DivisionError};
    pub use cohort_structures::{Group, GroupError, Student};

    #[cfg(feature = "roster-io")]
    pub use cohort_roster_io::{parse_roster, read_roster, write_roster};
}
