use std::collections::BTreeMap;

use log::trace;

use super::{
    compensated::CompensatedSum,
    DistributionKind,
    GeneDistribution,
    Posterior,
    PosteriorTable,
    TraitDistribution,
};
use crate::{
    enumeration::Partition,
    error::InferenceError,
    pedigree::{individual::PersonId, Pedigree},
};

/// Unnormalized marginal masses, indexed by `PersonId`.
/// # Fields:
/// - `genes`     : per-individual mass of each gene count bucket.
/// - `traits`    : per-individual mass of `[no trait, trait]`.
/// - `partitions`: number of partitions folded into this accumulator.
#[derive(Debug, Clone)]
pub struct Accumulator {
    genes     : Vec<[CompensatedSum; 3]>,
    traits    : Vec<[CompensatedSum; 2]>,
    partitions: u64,
}

impl Accumulator {
    /// Zero-initialized masses for a population of `size` individuals.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            genes     : vec![[CompensatedSum::default(); 3]; size],
            traits    : vec![[CompensatedSum::default(); 2]; size],
            partitions: 0,
        }
    }

    /// Add the joint probability `p` of `partition` into the matching gene and trait bucket
    /// of every individual.
    pub fn add(&mut self, partition: &Partition, p: f64) {
        for (i, (genes, traits)) in self.genes.iter_mut().zip(self.traits.iter_mut()).enumerate() {
            let id = PersonId(i);
            genes[partition.gene_count(id).index()].add(p);
            traits[usize::from(partition.has_trait(id))].add(p);
        }
        self.partitions += 1;
    }

    /// Combine two partial accumulators over the same population. Commutative and associative,
    /// up to floating point rounding.
    #[must_use]
    pub fn merge(mut self, other: Accumulator) -> Self {
        debug_assert_eq!(self.genes.len(), other.genes.len());
        for (mine, theirs) in self.genes.iter_mut().zip(other.genes) {
            for (a, b) in mine.iter_mut().zip(theirs) {
                *a = a.merge(b);
            }
        }
        for (mine, theirs) in self.traits.iter_mut().zip(other.traits) {
            for (a, b) in mine.iter_mut().zip(theirs) {
                *a = a.merge(b);
            }
        }
        self.partitions += other.partitions;
        self
    }

    /// Number of partitions added so far.
    #[must_use]
    pub fn partitions(&self) -> u64 {
        self.partitions
    }

    /// Rescale every distribution so that it sums to one, and label them with the pedigree's names.
    /// # Errors
    /// - `InconsistentEvidence` if any distribution carries zero total mass: no partition
    ///   with nonzero probability agrees with the observed evidence.
    pub fn normalize(self, pedigree: &Pedigree) -> Result<PosteriorTable, InferenceError> {
        let mut table = BTreeMap::new();
        for ((id, individual), (genes, traits)) in pedigree.iter().zip(self.genes.into_iter().zip(self.traits)) {
            let label = individual.label();
            let inconsistent = |distribution| InferenceError::InconsistentEvidence {
                individual: label.to_string(),
                distribution
            };

            let genes = genes.map(|sum| sum.value());
            let gene_mass: f64 = genes.iter().sum();
            if !(gene_mass > 0.0 && gene_mass.is_finite()) {
                return Err(inconsistent(DistributionKind::Gene))
            }

            let traits = traits.map(|sum| sum.value());
            let trait_mass: f64 = traits.iter().sum();
            if !(trait_mass > 0.0 && trait_mass.is_finite()) {
                return Err(inconsistent(DistributionKind::Trait))
            }
            trace!("{id} {label}: gene mass = {gene_mass:e} - trait mass = {trait_mass:e}");

            let posterior = Posterior::new(
                GeneDistribution::new(genes.map(|p| p / gene_mass)),
                TraitDistribution::new(traits[0] / trait_mass, traits[1] / trait_mass),
            );
            table.insert(label.to_string(), posterior);
        }
        Ok(PosteriorTable::new(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{enumeration::Members, model::GeneCount, pedigree::tests::common};
    use float_cmp::approx_eq;

    fn partition(one: u32, two: u32, has_trait: u32) -> Partition {
        Partition::new(Members::from_bits(one), Members::from_bits(two), Members::from_bits(has_trait))
    }

    #[test]
    fn add_and_normalize() {
        let pedigree = common::mock_founders(2);
        let mut acc = Accumulator::new(2);
        acc.add(&partition(0b01, 0b10, 0b01), 0.3);
        acc.add(&partition(0b00, 0b00, 0b00), 0.1);
        assert_eq!(acc.partitions(), 2);

        let table = acc.normalize(&pedigree).expect("Failed to normalize");
        let first = table.get("founder-0").expect("Missing founder-0");
        assert!(approx_eq!(f64, first.gene(GeneCount::One), 0.75));
        assert!(approx_eq!(f64, first.gene(GeneCount::Zero), 0.25));
        assert!(approx_eq!(f64, first.gene(GeneCount::Two), 0.0));
        assert!(approx_eq!(f64, first.trait_prob(true), 0.75));

        let second = table.get("founder-1").expect("Missing founder-1");
        assert!(approx_eq!(f64, second.gene(GeneCount::Two), 0.75));
        assert!(approx_eq!(f64, second.trait_prob(false), 1.0));
    }

    #[test]
    fn empty_accumulator_is_inconsistent() {
        let pedigree = common::mock_founders(1);
        match Accumulator::new(1).normalize(&pedigree) {
            Err(InferenceError::InconsistentEvidence { individual, distribution }) => {
                assert_eq!(individual, "founder-0");
                assert_eq!(distribution, DistributionKind::Gene);
            },
            other => panic!("Expected an InconsistentEvidence error. Got {other:?}"),
        }
    }

    #[test]
    fn zero_mass_is_inconsistent() {
        let pedigree = common::mock_founders(1);
        let mut acc = Accumulator::new(1);
        acc.add(&partition(0, 0, 0), 0.0);
        assert!(matches!(acc.normalize(&pedigree), Err(InferenceError::InconsistentEvidence { .. })));
    }

    #[test]
    fn merge_equals_sequential() {
        let partitions = [
            (partition(0b001, 0b010, 0b100), 0.125),
            (partition(0b100, 0b001, 0b011), 0.25),
            (partition(0b000, 0b111, 0b111), 0.0625),
            (partition(0b110, 0b000, 0b000), 0.5),
        ];

        let mut sequential = Accumulator::new(3);
        partitions.iter().for_each(|(part, p)| sequential.add(part, *p));

        let mut left  = Accumulator::new(3);
        let mut right = Accumulator::new(3);
        partitions[..1].iter().for_each(|(part, p)| left.add(part, *p));
        partitions[1..].iter().for_each(|(part, p)| right.add(part, *p));
        let merged = right.merge(left);
        assert_eq!(merged.partitions(), sequential.partitions());

        let pedigree = common::mock_founders(3);
        let a = sequential.normalize(&pedigree).expect("Failed to normalize");
        let b = merged.normalize(&pedigree).expect("Failed to normalize");
        for ((_, x), (_, y)) in a.iter().zip(b.iter()) {
            for genes in GeneCount::ALL {
                assert!(approx_eq!(f64, x.gene(genes), y.gene(genes), epsilon = 1e-15));
            }
            assert!(approx_eq!(f64, x.trait_prob(true), y.trait_prob(true), epsilon = 1e-15));
        }
    }
}
