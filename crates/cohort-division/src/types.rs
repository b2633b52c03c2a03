// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Core types for division operations.
*/

/// First name -> "occurs exactly once in the class" flag.
///
/// Built by a single scan over the full class during [`divide`]; display
/// layers use it to decide which first names need disambiguation.
///
/// [`divide`]: crate::divide
pub type UniqueFirstNames = ahash::AHashMap<String, bool>;

/// Result type for division operations
pub type DivisionResult<T> = Result<T, DivisionError>;

/// Errors that can occur while validating or performing a division
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DivisionError {
    /// The target group size is zero
    #[error("group size must be a positive integer number, got {group_size}")]
    InvalidGroupSize { group_size: usize },

    /// The deviation does not leave the group construction a valid
    /// tolerance band: it equals or exceeds the group size, or it is zero
    /// while the class does not divide evenly
    #[error("deviation must be a positive number smaller than the group size ({group_size}), got {deviation}")]
    InvalidDeviation {
        deviation: usize,
        group_size: usize,
    },

    /// No feasibility condition holds for the given class and parameters
    #[error("unable to divide a class of {class_size} students into groups of {group_size}+/-{deviation} students")]
    Infeasible {
        class_size: usize,
        group_size: usize,
        deviation: usize,
    },
}
