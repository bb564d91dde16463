use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::pedigree::individual::PersonId;

/// A subset of the population, stored as a bitmask over `PersonId` indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Members(u32);

impl Members {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Set containing the first `n` individuals.
    /// # Panics
    /// - if `n` exceeds the width of the underlying bitmask.
    #[must_use]
    pub fn full(n: usize) -> Self {
        assert!(n <= u32::BITS as usize, "Cannot represent a population of {n} individuals");
        Self(((1u64 << n) - 1) as u32)
    }

    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline(always)]
    #[must_use]
    pub fn contains(self, id: PersonId) -> bool {
        self.0 & (1 << id.index()) != 0
    }

    #[inline]
    pub fn insert(&mut self, id: PersonId) {
        self.0 |= 1 << id.index();
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn is_subset(self, other: Members) -> bool {
        self.0 & !other.0 == 0
    }

    #[must_use]
    pub fn is_disjoint(self, other: Members) -> bool {
        self.0 & other.0 == 0
    }

    #[inline(always)]
    #[must_use]
    pub fn intersection(self, other: Members) -> Members {
        Self(self.0 & other.0)
    }

    #[must_use]
    pub fn union(self, other: Members) -> Members {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub fn difference(self, other: Members) -> Members {
        Self(self.0 & !other.0)
    }

    /// Iterate over every subset of this set, itself and the empty set included.
    #[must_use]
    pub fn subsets(self) -> Subsets {
        Subsets { mask: self.0, next: Some(self.0) }
    }

    /// Iterate over the members of this set, in ascending identifier order.
    pub fn iter(self) -> impl Iterator<Item = PersonId> {
        (0..u32::BITS as usize).filter(move |i| self.0 & (1 << i) != 0).map(PersonId)
    }
}

impl FromIterator<PersonId> for Members {
    fn from_iter<I: IntoIterator<Item = PersonId>>(iter: I) -> Self {
        let mut members = Members::empty();
        iter.into_iter().for_each(|id| members.insert(id));
        members
    }
}

impl Display for Members {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().join(", "))
    }
}

/// Iterator over all the subsets of a bitmask, from the full mask down to the empty set.
#[derive(Debug, Clone)]
pub struct Subsets {
    mask: u32,
    next: Option<u32>,
}

impl Iterator for Subsets {
    type Item = Members;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = match current {
            0 => None,
            _ => Some((current - 1) & self.mask),
        };
        Some(Members(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None    => (0, Some(0)),
            Some(_) => (1, Some(1usize << self.mask.count_ones())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;

    fn ids(indices: &[usize]) -> Members {
        indices.iter().map(|&i| PersonId(i)).collect()
    }

    #[test]
    fn full() {
        assert_eq!(Members::full(0).bits(), 0);
        assert_eq!(Members::full(3).bits(), 0b111);
        assert_eq!(Members::full(32).bits(), u32::MAX);
        assert_eq!(Members::full(20).len(), 20);
    }

    #[test]
    fn set_operations() {
        let a = ids(&[0, 1, 2]);
        let b = ids(&[2, 3]);
        assert_eq!(a.intersection(b), ids(&[2]));
        assert_eq!(a.union(b), ids(&[0, 1, 2, 3]));
        assert_eq!(a.difference(b), ids(&[0, 1]));
        assert!(ids(&[1, 2]).is_subset(a));
        assert!(!b.is_subset(a));
        assert!(ids(&[0]).is_disjoint(b));
        assert!(Members::empty().is_subset(b));
    }

    #[test]
    fn contains_and_iter() {
        let set = ids(&[4, 1, 7]);
        assert!(set.contains(PersonId(4)));
        assert!(!set.contains(PersonId(2)));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![PersonId(1), PersonId(4), PersonId(7)]);
        assert_eq!(set.to_string(), "{#1, #4, #7}");
    }

    #[test]
    fn subsets_are_exhaustive_and_unique() {
        for n in 0..8 {
            let population = Members::full(n);
            let subsets: Vec<Members> = population.subsets().collect();
            assert_eq!(subsets.len(), 1 << n);
            let unique: AHashSet<u32> = subsets.iter().map(|s| s.bits()).collect();
            assert_eq!(unique.len(), 1 << n);
            assert!(subsets.iter().all(|s| s.is_subset(population)));
        }
    }

    #[test]
    fn subsets_of_sparse_mask() {
        let mask = ids(&[1, 3]);
        let subsets: Vec<Members> = mask.subsets().collect();
        assert_eq!(subsets, vec![ids(&[1, 3]), ids(&[3]), ids(&[1]), Members::empty()]);
    }

    #[test]
    fn subsets_of_empty_set() {
        let subsets: Vec<Members> = Members::empty().subsets().collect();
        assert_eq!(subsets, vec![Members::empty()]);
    }
}
