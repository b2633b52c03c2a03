// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur during group container operations
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GroupError {
    /// Random selection requires at least one member
    #[error("cannot pick a member from an empty group")]
    EmptyGroup,
}
