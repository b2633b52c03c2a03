// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Group listing renderer.

Prints every group with its members in a fresh random order. Students
whose first name occurs more than once in the class get the first letter
of their sort name appended, so "Jan Jansens" and "Jan de Vries" list as
"Jan J" and "Jan V".
*/

use std::io;
use std::io::Write;

use rand::Rng;

use cohort_division::Division;
use cohort_structures::Student;

/// Render the group listing to `out`.
///
/// Listing order within each group comes from `rng`; a seeded source
/// reproduces the same listing.
pub fn render_division<W: Write, R: Rng>(
    out: &mut W,
    division: &Division,
    rng: &mut R,
) -> io::Result<()> {
    for (number, group) in division.groups.iter().enumerate() {
        writeln!(out, "Group {}:", number + 1)?;

        for student in group.shuffled(rng) {
            writeln!(out, "- {}", display_name(student, division))?;
        }

        writeln!(out)?;
    }

    Ok(())
}

/// The name a student is listed under: the first name, disambiguated with
/// the first letter of the sort name when the first name is not unique in
/// the class.
pub fn display_name(student: &Student, division: &Division) -> String {
    let mut name = student.first_name.clone();

    if !division.is_unique_first_name(&student.first_name) {
        if let Some(initial) = student.sort_name().chars().next() {
            name.push(' ');
            name.push(initial);
        }
    }

    name
}
