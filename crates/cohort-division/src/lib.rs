// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# cohort-division

Partition engine for student rosters. Given a class (a
[`Group`](cohort_structures::Group) of [`Student`](cohort_structures::Student)s),
a target group size and a permitted deviation, this crate:

1. validates feasibility (group size, deviation, then the feasibility
   conditions over group count and overflow),
2. fills equal-size groups from one random draw of the class,
3. resolves the overflow by spreading it over the equal groups or by
   extracting a standalone group topped up with members pulled back out of
   the existing groups,
4. indexes which first names are unique in the class, for display
   decoration downstream.

All randomness comes from a caller-provided `rand::Rng`; with a fixed seed
the whole division is reproducible.
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod divide;
mod plan;
mod types;

pub use divide::{check_feasibility, divide, Division};
pub use plan::DivisionPlan;
pub use types::{DivisionError, DivisionResult, UniqueFirstNames};
