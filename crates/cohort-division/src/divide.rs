// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Group construction.

`divide` draws one random permutation of the class up front and consumes it
across the construction phases; the cursor into that permutation is the
single boundary between "already placed" and "still to place". The input
class is never mutated - a failed validation returns before any group
exists, and construction works on clones of the drawn students.
*/

use rand::Rng;
use tracing::{debug, trace};

use cohort_structures::{Group, Student};

use crate::plan::DivisionPlan;
use crate::types::{DivisionResult, UniqueFirstNames};

/// The outcome of dividing a class: the groups in construction order plus
/// the first-name uniqueness index for display decoration.
#[derive(Debug, Clone)]
pub struct Division {
    /// Disjoint groups covering the whole class
    pub groups: Vec<Group<Student>>,
    /// First name -> "occurs exactly once in the class"
    pub unique_first_names: UniqueFirstNames,
}

impl Division {
    /// Whether the given first name occurs at most once in the class.
    ///
    /// Names that were not part of the divided class count as unique - they
    /// need no disambiguation.
    pub fn is_unique_first_name(&self, first_name: &str) -> bool {
        self.unique_first_names
            .get(first_name)
            .copied()
            .unwrap_or(true)
    }
}

/// Check whether a class of `class_size` students can be divided into
/// groups of `group_size` within `deviation`, without performing the
/// division.
///
/// # Errors
///
/// The same errors as [`divide`], in the same validation order.
pub fn check_feasibility(
    class_size: usize,
    group_size: usize,
    deviation: usize,
) -> DivisionResult<()> {
    DivisionPlan::new(class_size, group_size, deviation).map(|_| ())
}

/// Divide a class into groups of `group_size` students, permitting sizes
/// within `deviation` of the target.
///
/// The class itself is left untouched; the returned groups hold clones of
/// its students. All random decisions (draw order, transfer picks) come
/// from `rng`, so a seeded `StdRng` reproduces the exact same division.
///
/// # Errors
///
/// * [`DivisionError::InvalidGroupSize`](crate::DivisionError::InvalidGroupSize)
///   when `group_size` is zero.
/// * [`DivisionError::InvalidDeviation`](crate::DivisionError::InvalidDeviation)
///   when `deviation >= group_size`, or when `deviation` is zero while the
///   class does not divide evenly.
/// * [`DivisionError::Infeasible`](crate::DivisionError::Infeasible) when
///   no feasibility condition holds.
pub fn divide<R: Rng>(
    class: &Group<Student>,
    group_size: usize,
    deviation: usize,
    rng: &mut R,
) -> DivisionResult<Division> {
    let plan = DivisionPlan::new(class.len(), group_size, deviation)?;

    debug!(
        class_size = plan.class_size,
        group_size = plan.group_size,
        deviation = plan.deviation,
        group_count = plan.group_count,
        overflow = plan.overflow,
        spreads = plan.spreads_overflow(),
        "division plan validated"
    );

    // One shared draw order for all phases.
    let order: Vec<Student> = class.shuffled(rng).cloned().collect();
    let placed = plan.group_count * plan.group_size;

    // Phase 1: fill `group_count` groups with exactly `group_size` students
    // each, in draw order.
    let mut groups: Vec<Group<Student>> = order[..placed]
        .chunks(plan.group_size)
        .map(|chunk| chunk.iter().cloned().collect())
        .collect();

    // Phase 2: resolve the overflow - the students the draw has not placed
    // yet.
    let leftover = &order[placed..];
    if plan.spreads_overflow() {
        spread_over_groups(&plan, &mut groups, leftover);
    } else {
        let standalone = extract_standalone_group(&plan, &mut groups, leftover, rng);
        groups.push(standalone);
    }

    // Phase 3: index first-name uniqueness over the whole class.
    let mut unique_first_names = UniqueFirstNames::default();
    for student in class.iter() {
        unique_first_names
            .entry(student.first_name.clone())
            .and_modify(|unique| *unique = false)
            .or_insert(true);
    }

    Ok(Division {
        groups,
        unique_first_names,
    })
}

/// Append the leftover students to the equal groups in construction order,
/// one student per group per round, for at most `deviation` rounds.
fn spread_over_groups(
    plan: &DivisionPlan,
    groups: &mut [Group<Student>],
    leftover: &[Student],
) {
    let mut drawn = leftover.iter();

    'rounds: for _ in 0..plan.deviation {
        for group in groups.iter_mut() {
            let Some(student) = drawn.next() else {
                break 'rounds;
            };
            group.add(student.clone());
        }
    }
}

/// Form a standalone group from the leftover students, then top it up to
/// the lower tolerance bound by pulling random members back out of the
/// existing groups, walking from the last-constructed group backward.
fn extract_standalone_group<R: Rng>(
    plan: &DivisionPlan,
    groups: &mut [Group<Student>],
    leftover: &[Student],
    rng: &mut R,
) -> Group<Student> {
    let mut standalone: Group<Student> = leftover.iter().cloned().collect();
    let lower_bound = plan.group_size - plan.deviation;

    for _ in 0..plan.deviation {
        if standalone.len() >= lower_bound {
            break;
        }
        for group in groups.iter_mut().rev() {
            // Keep pulling from this group until the standalone group
            // reaches the bound or the group runs dry.
            while standalone.len() < lower_bound {
                let member = match group.pick(rng) {
                    Ok(member) => member.clone(),
                    Err(_) => break,
                };
                group.remove(&member);
                trace!(student = %member, "transferred to standalone group");
                standalone.add(member);
            }
            if standalone.len() >= lower_bound {
                break;
            }
        }
    }

    standalone
}
