//! Fixed probability tables of the hereditary model.

use std::fmt::{self, Display, Formatter};

mod inheritance;
pub use inheritance::InheritanceTable;

/// Unconditional probability of a founder carrying 0, 1 or 2 copies of the gene.
pub const FOUNDER_GENE_PRIOR: [f64; 3] = [0.96, 0.03, 0.01];

/// Probability of expressing the trait, given 0, 1 or 2 copies of the gene.
pub const TRAIT_GIVEN_GENES: [f64; 3] = [0.01, 0.56, 0.65];

/// Probability that a transmitted gene copy flips (mutates) during transmission.
pub const MUTATION_RATE: f64 = 0.01;

/// Number of copies of the gene carried by an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeneCount {
    Zero,
    One,
    Two,
}

impl GeneCount {
    pub const ALL: [GeneCount; 3] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    /// Position of this gene count within probability tables.
    #[inline(always)]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    #[must_use]
    pub fn copies(self) -> u8 {
        self as u8
    }
}

impl Display for GeneCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.copies())
    }
}

/// Unconditional probability for a founder to carry `genes` copies.
#[inline]
#[must_use]
pub fn founder_prior(genes: GeneCount) -> f64 {
    FOUNDER_GENE_PRIOR[genes.index()]
}

/// Probability of `has_trait` (expressed or not), given `genes` copies.
#[inline]
#[must_use]
pub fn trait_likelihood(genes: GeneCount, has_trait: bool) -> f64 {
    let p = TRAIT_GIVEN_GENES[genes.index()];
    match has_trait {
        true  => p,
        false => 1.0 - p,
    }
}

/// Probability that a parent carrying `genes` copies passes a copy to its child,
/// mutation included.
#[inline]
#[must_use]
pub fn transmission_prob(genes: GeneCount) -> f64 {
    match genes {
        GeneCount::Zero => MUTATION_RATE,
        GeneCount::One  => 0.5,
        GeneCount::Two  => 1.0 - MUTATION_RATE,
    }
}

/// Probability for a child to carry `child` copies, given the copy numbers of its parents.
/// One copy is drawn independently from each parent.
#[must_use]
pub fn child_gene_prob(father: GeneCount, mother: GeneCount, child: GeneCount) -> f64 {
    let (pf, pm) = (transmission_prob(father), transmission_prob(mother));
    match child {
        GeneCount::Zero => (1.0 - pf) * (1.0 - pm),
        GeneCount::One  => pf * (1.0 - pm) + pm * (1.0 - pf),
        GeneCount::Two  => pf * pm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn tables_are_distributions() {
        assert!(approx_eq!(f64, FOUNDER_GENE_PRIOR.iter().sum::<f64>(), 1.0, ulps = 2));
        for genes in GeneCount::ALL {
            let total = trait_likelihood(genes, true) + trait_likelihood(genes, false);
            assert!(approx_eq!(f64, total, 1.0, ulps = 2));
        }
    }

    #[test]
    fn transmission() {
        assert!(approx_eq!(f64, transmission_prob(GeneCount::Zero), 0.01));
        assert!(approx_eq!(f64, transmission_prob(GeneCount::One),  0.5));
        assert!(approx_eq!(f64, transmission_prob(GeneCount::Two),  0.99));
    }

    #[test]
    fn child_probs_sum_to_one() {
        for father in GeneCount::ALL {
            for mother in GeneCount::ALL {
                let total: f64 = GeneCount::ALL.iter().map(|&c| child_gene_prob(father, mother, c)).sum();
                assert!(approx_eq!(f64, total, 1.0, epsilon = 1e-12), "{father} x {mother} -> {total}");
            }
        }
    }

    #[test]
    fn child_of_two_carriers() {
        let (two, zero) = (GeneCount::Two, GeneCount::Zero);
        assert!(approx_eq!(f64, child_gene_prob(two, two, GeneCount::Two),  0.9801, epsilon = 1e-12));
        assert!(approx_eq!(f64, child_gene_prob(two, zero, GeneCount::One), 0.9802, epsilon = 1e-12));
    }

    #[test]
    fn display() {
        let displayed: Vec<String> = GeneCount::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(displayed, vec!["0", "1", "2"]);
        assert_eq!(GeneCount::Two.index(), 2);
    }
}
