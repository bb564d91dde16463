use std::fmt::{self, Display, Formatter};

use super::Members;
use crate::{model::GeneCount, pedigree::individual::PersonId};

/// One complete assignment of gene counts and trait status across the population.
/// Individuals absent from both `one_gene` and `two_genes` carry zero copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    one_gene : Members,
    two_genes: Members,
    has_trait: Members,
}

impl Partition {
    /// # Panics
    /// - (debug builds) if `one_gene` and `two_genes` overlap.
    #[must_use]
    pub fn new(one_gene: Members, two_genes: Members, has_trait: Members) -> Self {
        debug_assert!(one_gene.is_disjoint(two_genes), "Gene sets must be disjoint: {one_gene} & {two_genes}");
        Self { one_gene, two_genes, has_trait }
    }

    #[inline]
    #[must_use]
    pub fn gene_count(&self, id: PersonId) -> GeneCount {
        if self.two_genes.contains(id) {
            GeneCount::Two
        } else if self.one_gene.contains(id) {
            GeneCount::One
        } else {
            GeneCount::Zero
        }
    }

    #[inline]
    #[must_use]
    pub fn has_trait(&self, id: PersonId) -> bool {
        self.has_trait.contains(id)
    }

    #[must_use]
    pub fn one_gene(&self) -> Members {
        self.one_gene
    }

    #[must_use]
    pub fn two_genes(&self) -> Members {
        self.two_genes
    }

    #[must_use]
    pub fn trait_set(&self) -> Members {
        self.has_trait
    }
}

impl Display for Partition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "one: {} - two: {} - trait: {}", self.one_gene, self.two_genes, self.has_trait)
    }
}
