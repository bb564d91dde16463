use std::fmt::{self, Display, Formatter};

use crate::model::GeneCount;

/// Which of the two per-individual distributions a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionKind {
    Gene,
    Trait,
}

impl Display for DistributionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Gene  => "gene",
            Self::Trait => "trait",
        })
    }
}

/// Probability distribution over the number of gene copies. Indexed by `GeneCount::index()`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeneDistribution([f64; 3]);

impl GeneDistribution {
    #[must_use]
    pub fn new(probs: [f64; 3]) -> Self {
        Self(probs)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, genes: GeneCount) -> f64 {
        self.0[genes.index()]
    }

    /// Iterate over `(gene count, probability)` pairs, from zero to two copies.
    pub fn iter(&self) -> impl Iterator<Item = (GeneCount, f64)> + '_ {
        GeneCount::ALL.into_iter().map(|genes| (genes, self.get(genes)))
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Bernoulli distribution of trait expression. Stored as `[P(false), P(true)]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TraitDistribution([f64; 2]);

impl TraitDistribution {
    #[must_use]
    pub fn new(p_false: f64, p_true: f64) -> Self {
        Self([p_false, p_true])
    }

    #[inline]
    #[must_use]
    pub fn get(&self, has_trait: bool) -> f64 {
        self.0[usize::from(has_trait)]
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gene_distribution() {
        let dist = GeneDistribution::new([0.5, 0.3, 0.2]);
        assert_eq!(dist.get(GeneCount::Zero), 0.5);
        assert_eq!(dist.get(GeneCount::Two), 0.2);
        let pairs: Vec<(GeneCount, f64)> = dist.iter().collect();
        assert_eq!(pairs[1], (GeneCount::One, 0.3));
    }

    #[test]
    fn trait_distribution() {
        let dist = TraitDistribution::new(0.75, 0.25);
        assert_eq!(dist.get(true), 0.25);
        assert_eq!(dist.get(false), 0.75);
        assert_eq!(dist.total(), 1.0);
    }

    #[test]
    fn kind_display() {
        assert_eq!(DistributionKind::Gene.to_string(), "gene");
        assert_eq!(DistributionKind::Trait.to_string(), "trait");
    }
}
