// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Student data structure.

Pure data definition - no grouping logic. Partition operations live in
cohort-division.
*/

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A student: first name, last name, and a unique identifier.
///
/// Two students are considered the same student exactly when their
/// identifiers are equal; names carry no identity. Names are modeled from a
/// Dutch perspective (see [`Student::sort_name`]) and deliberately ignore
/// the usual falsehoods-programmers-believe-about-names caveats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Student's first name
    pub first_name: String,
    /// Student's last name, possibly starting with lowercase particles
    /// ("de", "van der", ...)
    pub last_name: String,
    /// Unique student identifier; sole carrier of equality
    pub id: String,
}

impl Student {
    /// Create a new student.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            id: id.into(),
        }
    }

    /// Return the sort name, Dutch style.
    ///
    /// Dutch name sorting starts with the last name, then the first name,
    /// and then optional "tussenvoegsels" like "de" or "van der":
    ///
    /// - Beer, Huub de
    /// - Jansens, Jan
    /// - Borne, Lisa van der
    ///
    /// The split point is the first uppercase character of the last name.
    /// When the last name has no uppercase character at all, the whole last
    /// name is treated as particle and the core last name is empty.
    pub fn sort_name(&self) -> String {
        let split = self
            .last_name
            .char_indices()
            .find(|(_, c)| c.is_uppercase())
            .map(|(i, _)| i)
            .unwrap_or(self.last_name.len());

        let prefix = self.last_name[..split].trim();
        let last = &self.last_name[split..];

        if prefix.is_empty() {
            format!("{}, {}", last, self.first_name)
        } else {
            format!("{}, {} {}", last, self.first_name, prefix)
        }
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
