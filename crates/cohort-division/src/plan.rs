// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Division plan: derived quantities and feasibility checking.

For a class of `class_size` students, a target `group_size` and a permitted
`deviation`, the plan fixes `group_count = class_size / group_size` equal
groups and `overflow = class_size % group_size` students left over. The
overflow is resolved later either by spreading it over the equal groups or
by extracting a standalone group; the feasibility conditions below decide
whether any resolution exists at all.

The three conditions are kept exactly as inherited from the long-standing
grouping rules, including the asymmetric band of
[`DivisionPlan::accumulated_overflow_within_band`]. They are centralized
here so that validation and branch selection evaluate the same formulas.
*/

use crate::types::{DivisionError, DivisionResult};

/// Validated parameters and derived quantities for one division run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionPlan {
    /// Number of students in the class
    pub class_size: usize,
    /// Target group size
    pub group_size: usize,
    /// Permitted difference between a group's size and the target size
    pub deviation: usize,
    /// Number of equal-size groups formed initially
    pub group_count: usize,
    /// Students left over after forming the equal-size groups
    pub overflow: usize,
}

impl DivisionPlan {
    /// Validate the parameters and derive the plan.
    ///
    /// Validation order: group size, then deviation, then feasibility.
    ///
    /// # Errors
    ///
    /// * [`DivisionError::InvalidGroupSize`] when `group_size` is zero.
    /// * [`DivisionError::InvalidDeviation`] when `deviation >= group_size`,
    ///   or when `deviation` is zero while the class does not divide evenly
    ///   (zero tolerance cannot absorb a nonzero overflow).
    /// * [`DivisionError::Infeasible`] when none of the feasibility
    ///   conditions holds.
    pub fn new(
        class_size: usize,
        group_size: usize,
        deviation: usize,
    ) -> DivisionResult<Self> {
        if group_size == 0 {
            return Err(DivisionError::InvalidGroupSize { group_size });
        }

        if deviation >= group_size {
            return Err(DivisionError::InvalidDeviation {
                deviation,
                group_size,
            });
        }

        let plan = Self {
            class_size,
            group_size,
            deviation,
            group_count: class_size / group_size,
            overflow: class_size % group_size,
        };

        if deviation == 0 {
            // The feasibility conditions divide by the deviation; with zero
            // tolerance the only dividable class is one that divides evenly.
            return if plan.overflow == 0 {
                Ok(plan)
            } else {
                Err(DivisionError::InvalidDeviation {
                    deviation,
                    group_size,
                })
            };
        }

        if plan.is_feasible() {
            Ok(plan)
        } else {
            Err(DivisionError::Infeasible {
                class_size,
                group_size,
                deviation,
            })
        }
    }

    /// There are enough equal groups to absorb the overflow by appending at
    /// most one extra member per group per round, within `deviation`
    /// rounds.
    ///
    /// Uses integer division; also selects the overflow-resolution branch
    /// during construction.
    pub fn overflow_fits_existing(&self) -> bool {
        self.deviation > 0 && self.group_count / self.deviation > self.overflow
    }

    /// The overflow alone already falls inside the tolerated group-size
    /// band `[group_size - deviation, group_size + deviation]`.
    pub fn overflow_within_band(&self) -> bool {
        self.group_size - self.deviation <= self.overflow
            && self.overflow <= self.group_size + self.deviation
    }

    /// The worst-case accumulated overflow after `deviation` redistribution
    /// rounds still lands inside the tolerated band.
    pub fn accumulated_overflow_within_band(&self) -> bool {
        let accumulated = self.overflow + self.group_count * self.deviation;
        self.group_size - self.deviation <= accumulated
            && accumulated <= self.group_size + self.deviation
    }

    /// A division within tolerance exists when at least one condition
    /// holds.
    pub fn is_feasible(&self) -> bool {
        self.overflow_fits_existing()
            || self.overflow_within_band()
            || self.accumulated_overflow_within_band()
    }

    /// Branch selection: spread the overflow over the equal groups, or
    /// extract a standalone group. An even division (no overflow) always
    /// spreads, which then has nothing to do.
    pub(crate) fn spreads_overflow(&self) -> bool {
        self.deviation == 0 || self.overflow_fits_existing()
    }
}
