use super::{child_gene_prob, GeneCount};

/// Precomputed `P(child | father, mother)` for every combination of gene counts.
/// Indexed as `[father][mother][child]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InheritanceTable([[[f64; 3]; 3]; 3]);

impl InheritanceTable {
    #[must_use]
    pub fn new() -> Self {
        let mut table = [[[0.0; 3]; 3]; 3];
        for father in GeneCount::ALL {
            for mother in GeneCount::ALL {
                for child in GeneCount::ALL {
                    table[father.index()][mother.index()][child.index()] = child_gene_prob(father, mother, child);
                }
            }
        }
        Self(table)
    }

    #[inline(always)]
    #[must_use]
    pub fn prob(&self, father: GeneCount, mother: GeneCount, child: GeneCount) -> f64 {
        self.0[father.index()][mother.index()][child.index()]
    }
}

impl Default for InheritanceTable {
    fn default() -> Self {
        Self::new()
    }
}
