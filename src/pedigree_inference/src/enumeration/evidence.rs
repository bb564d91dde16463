use super::Members;

/// Observed trait statuses, as a pair of population sets.
/// # Fields:
/// - `observed` : individuals whose trait status is known.
/// - `expressed`: individuals known to express the trait. Expected to be a subset of `observed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evidence {
    observed : Members,
    expressed: Members,
}

impl Evidence {
    #[must_use]
    pub fn new(observed: Members, expressed: Members) -> Self {
        Self { observed, expressed }
    }

    #[must_use]
    pub fn observed(&self) -> Members {
        self.observed
    }

    #[must_use]
    pub fn expressed(&self) -> Members {
        self.expressed
    }

    /// Check whether a candidate "has-trait" set agrees with every observation: observed
    /// individuals expressing the trait must be in the set, the other observed individuals must not.
    #[inline]
    #[must_use]
    pub fn admits(&self, has_trait: Members) -> bool {
        has_trait.intersection(self.observed) == self.expressed
    }

    /// `false` if some individual is marked as expressing the trait without being observed.
    /// Such evidence admits no candidate at all.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.expressed.is_subset(self.observed)
    }
}
