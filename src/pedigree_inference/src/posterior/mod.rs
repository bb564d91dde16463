use std::collections::BTreeMap;

use crate::model::GeneCount;

mod compensated;
pub use compensated::CompensatedSum;

mod distribution;
pub use distribution::{DistributionKind, GeneDistribution, TraitDistribution};

mod accumulator;
pub use accumulator::Accumulator;

/// Normalized posterior distributions of a single individual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Posterior {
    genes : GeneDistribution,
    traits: TraitDistribution,
}

impl Posterior {
    #[must_use]
    pub fn new(genes: GeneDistribution, traits: TraitDistribution) -> Self {
        Self { genes, traits }
    }

    /// Posterior probability of carrying `genes` copies.
    #[must_use]
    pub fn gene(&self, genes: GeneCount) -> f64 {
        self.genes.get(genes)
    }

    /// Posterior probability that the trait is (`true`) or is not (`false`) expressed.
    #[must_use]
    pub fn trait_prob(&self, has_trait: bool) -> f64 {
        self.traits.get(has_trait)
    }

    #[must_use]
    pub fn genes(&self) -> &GeneDistribution {
        &self.genes
    }

    #[must_use]
    pub fn traits(&self) -> &TraitDistribution {
        &self.traits
    }
}

/// Final, read-only inference result: individual name -> posterior distributions.
/// Iterates in name order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PosteriorTable(BTreeMap<String, Posterior>);

impl PosteriorTable {
    pub(crate) fn new(posteriors: BTreeMap<String, Posterior>) -> Self {
        Self(posteriors)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Posterior> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Posterior)> {
        self.0.iter().map(|(name, posterior)| (name.as_str(), posterior))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
