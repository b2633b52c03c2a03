// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
`Group` membership container.

A `Group` is a set: no member occurs twice. Insertion order is kept
internally for stable `Display` output, but carries no meaning - two groups
are equal when they contain the same members in any order.

Random selection (`pick`) and random traversal (`shuffled`) take the random
source as an argument instead of holding global state, so a single seeded
`StdRng` threaded through all calls makes every random decision
reproducible.
*/

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GroupError;

/// A group of unique members.
#[derive(Debug, Clone)]
pub struct Group<T> {
    members: Vec<T>,
}

impl<T> Default for Group<T> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<T: PartialEq> Group<T> {
    /// Create a new empty group.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// This group's size.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Determine if this group is empty or not.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Add a member to this group.
    ///
    /// Returns true when the member wasn't already in this group, false
    /// otherwise.
    pub fn add(&mut self, member: T) -> bool {
        if self.members.contains(&member) {
            false
        } else {
            self.members.push(member);
            true
        }
    }

    /// Remove a member from this group.
    ///
    /// Returns true if the removed member was in this group, false
    /// otherwise.
    pub fn remove(&mut self, member: &T) -> bool {
        match self.members.iter().position(|m| m == member) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    /// Determine if a member is in this group.
    pub fn contains(&self, member: &T) -> bool {
        self.members.contains(member)
    }

    /// Determine if all given members are in this group.
    pub fn contains_all(&self, members: &[T]) -> bool {
        members.iter().all(|m| self.contains(m))
    }

    /// Clear this group.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Pick a member from this group at random, without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::EmptyGroup`] when the group has no members.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Result<&T, GroupError> {
        if self.is_empty() {
            return Err(GroupError::EmptyGroup);
        }
        Ok(&self.members[rng.gen_range(0..self.len())])
    }

    /// Iterate over the members of this group in a fresh uniformly random
    /// order.
    ///
    /// Every call draws an independent permutation from `rng`; iterating
    /// twice with the same seeded source yields the same order, iterating
    /// twice with one source advances it and yields independent orders.
    pub fn shuffled<'a, R: Rng>(&'a self, rng: &mut R) -> Shuffled<'a, T> {
        let mut order: Vec<&'a T> = self.members.iter().collect();
        order.shuffle(rng);
        Shuffled {
            order: order.into_iter(),
        }
    }

    /// Iterate over the members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }
}

/// Iterator over a group's members in one drawn random permutation.
///
/// The permutation is fixed at creation; the cursor over it is this
/// iterator's only state.
#[derive(Debug)]
pub struct Shuffled<'a, T> {
    order: std::vec::IntoIter<&'a T>,
}

impl<'a, T> Iterator for Shuffled<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.order.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> ExactSizeIterator for Shuffled<'_, T> {}

impl<T: PartialEq> Extend<T> for Group<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for member in iter {
            self.add(member);
        }
    }
}

impl<T: PartialEq> FromIterator<T> for Group<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut group = Group::new();
        group.extend(iter);
        group
    }
}

/// Two groups are equal when they contain exactly the same members,
/// independent of internal order.
impl<T: PartialEq> PartialEq for Group<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() // For efficiency
            && self.members.iter().all(|m| other.contains(m))
            && other.members.iter().all(|m| self.contains(m))
    }
}

impl<T: Eq> Eq for Group<T> {}

impl<T: std::fmt::Display> std::fmt::Display for Group<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for member in &self.members {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", member)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn size_tracks_adds_and_removes() {
        let mut group = Group::new();
        assert_eq!(group.len(), 0);

        group.add(0);
        assert_eq!(group.len(), 1);

        group.add(1);
        assert_eq!(group.len(), 2);

        group.remove(&0);
        assert_eq!(group.len(), 1);

        group.remove(&1);
        assert_eq!(group.len(), 0);
    }

    #[test]
    fn is_empty() {
        let mut group = Group::new();
        assert!(group.is_empty());
        group.add(0);
        assert!(!group.is_empty());
    }

    #[test]
    fn add_rejects_duplicates() {
        let mut group = Group::new();
        assert!(group.add(0));
        assert!(!group.add(0));
        assert_eq!(group.len(), 1);
        assert!(group.contains(&0));
    }

    #[test]
    fn remove_reports_presence() {
        let mut group = Group::new();
        group.add(0);

        assert!(group.remove(&0));
        assert!(!group.remove(&0));
        assert!(!group.contains(&0));
    }

    #[test]
    fn contains_all() {
        let mut group = Group::new();
        assert!(!group.contains_all(&[0, 1, 2]));

        group.add(0);
        assert!(!group.contains_all(&[0, 1, 2]));

        group.add(1);
        group.add(2);
        assert!(group.contains_all(&[0, 1, 2]));
    }

    #[test]
    fn extend_skips_duplicates() {
        let mut group = Group::new();
        group.extend([0, 1, 1, 2]);
        assert_eq!(group.len(), 3);
        assert!(group.contains_all(&[0, 1, 2]));
    }

    #[test]
    fn clear_empties_the_group() {
        let mut group = Group::new();
        group.add(0);
        assert!(!group.is_empty());
        group.clear();
        assert!(group.is_empty());
    }

    #[test]
    fn pick_fails_on_empty_group() {
        let group: Group<i32> = Group::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(group.pick(&mut rng), Err(GroupError::EmptyGroup));
    }

    #[test]
    fn pick_on_singleton_always_picks_that_member() {
        let mut group = Group::new();
        group.add(0);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..10 {
            assert_eq!(group.pick(&mut rng), Ok(&0));
        }
    }

    #[test]
    fn pick_is_reproducible_under_a_fixed_seed() {
        let group: Group<i32> = (0..10).collect();

        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(group.pick(&mut rng1), group.pick(&mut rng2));
        }
    }

    #[test]
    fn shuffled_visits_every_member_exactly_once() {
        let group: Group<i32> = (0..8).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let mut seen: Vec<i32> = group.shuffled(&mut rng).copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn shuffled_on_empty_group_yields_nothing() {
        let group: Group<i32> = Group::new();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(group.shuffled(&mut rng).next(), None);
    }

    #[test]
    fn same_seed_gives_same_traversal_order() {
        let group: Group<i32> = (0..8).collect();

        let mut rng1 = StdRng::seed_from_u64(5);
        let mut rng2 = StdRng::seed_from_u64(5);
        let order1: Vec<i32> = group.shuffled(&mut rng1).copied().collect();
        let order2: Vec<i32> = group.shuffled(&mut rng2).copied().collect();

        assert_eq!(order1, order2);
    }

    #[test]
    fn different_seeds_give_different_traversal_orders() {
        // With 8 members there are 40320 permutations; two fixed seeds
        // agreeing by chance would be a broken shuffle.
        let group: Group<i32> = (0..8).collect();

        let mut rng1 = StdRng::seed_from_u64(3);
        let mut rng2 = StdRng::seed_from_u64(2235);
        let order1: Vec<i32> = group.shuffled(&mut rng1).copied().collect();
        let order2: Vec<i32> = group.shuffled(&mut rng2).copied().collect();

        assert_ne!(order1, order2);
    }

    #[test]
    fn equality_ignores_order() {
        let a: Group<i32> = [1, 2, 3].into_iter().collect();
        let b: Group<i32> = [3, 1, 2].into_iter().collect();
        let c: Group<i32> = [1, 2].into_iter().collect();
        let d: Group<i32> = [1, 2, 4].into_iter().collect();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn display_joins_members() {
        let mut group = Group::new();
        assert_eq!(group.to_string(), "");

        group.add(0);
        assert_eq!(group.to_string(), "0");

        group.add(1);
        group.add(2);
        assert_eq!(group.to_string(), "0; 1; 2");
    }
}
