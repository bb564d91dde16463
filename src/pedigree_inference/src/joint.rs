use crate::{
    enumeration::Partition,
    model::{founder_prior, trait_likelihood, InheritanceTable},
    pedigree::Pedigree,
};

/// Scores complete partitions against the Bayesian network of a pedigree.
/// # Fields:
/// - `pedigree`   : family tree providing the founder/offspring structure.
/// - `inheritance`: memoized `P(child | father, mother)` lookups.
#[derive(Debug, Clone)]
pub struct JointProbability<'a> {
    pedigree   : &'a Pedigree,
    inheritance: InheritanceTable,
}

impl<'a> JointProbability<'a> {
    #[must_use]
    pub fn new(pedigree: &'a Pedigree) -> Self {
        Self { pedigree, inheritance: InheritanceTable::new() }
    }

    #[must_use]
    pub fn pedigree(&self) -> &'a Pedigree {
        self.pedigree
    }

    /// Joint probability that every individual's gene count and trait status match `partition`.
    ///
    /// Each individual contributes its gene-count probability (founder prior, or inheritance from
    /// both parents' counts within the same partition), times the likelihood of its trait status.
    /// The product starts at `1.0`: a zero factor is a valid probability and stays zero.
    #[must_use]
    pub fn evaluate(&self, partition: &Partition) -> f64 {
        let mut joint = 1.0;
        for (id, individual) in self.pedigree.iter() {
            let genes = partition.gene_count(id);

            // ---- Gene count probability.
            joint *= match individual.parents() {
                None          => founder_prior(genes),
                Some(parents) => {
                    let father = partition.gene_count(parents.father());
                    let mother = partition.gene_count(parents.mother());
                    self.inheritance.prob(father, mother, genes)
                },
            };

            // ---- Trait probability, given the gene count.
            joint *= trait_likelihood(genes, partition.has_trait(id));
        }
        joint
    }
}
