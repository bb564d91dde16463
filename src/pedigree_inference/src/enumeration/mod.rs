//! Exhaustive, evidence-pruned enumeration of gene and trait partitions.
//!
//! Trait candidates are the subsets of the population that agree with the observed evidence.
//! Gene assignments are all ordered pairs of disjoint subsets `(one_gene, two_genes)`; the
//! remainder carries zero copies. Each admissible partition is one element of their cross product.

mod members;
pub use members::{Members, Subsets};

mod evidence;
pub use evidence::Evidence;

mod partition;
pub use partition::Partition;

/// Every subset of `population` that agrees with `evidence`.
pub fn trait_candidates(population: Members, evidence: Evidence) -> impl Iterator<Item = Members> + Clone {
    population.subsets().filter(move |&has_trait| evidence.admits(has_trait))
}

/// Every pair of disjoint subsets `(one_gene, two_genes)` of `population`. Yields `3^n` pairs.
pub fn gene_assignments(population: Members) -> impl Iterator<Item = (Members, Members)> + Clone {
    population.subsets().flat_map(move |one_gene| {
        population.difference(one_gene).subsets().map(move |two_genes| (one_gene, two_genes))
    })
}

/// Every gene assignment, paired with a fixed trait set.
pub fn partitions_with_trait(population: Members, has_trait: Members) -> impl Iterator<Item = Partition> + Clone {
    gene_assignments(population).map(move |(one_gene, two_genes)| Partition::new(one_gene, two_genes, has_trait))
}

/// Lazy sequence of every partition consistent with `evidence`.
pub fn partitions(population: Members, evidence: Evidence) -> impl Iterator<Item = Partition> + Clone {
    trait_candidates(population, evidence).flat_map(move |has_trait| partitions_with_trait(population, has_trait))
}

/// Number of trait candidates admitted by `evidence`: `2^(n - observed)`, or zero if the evidence is inconsistent.
#[must_use]
pub fn trait_candidate_count(population: Members, evidence: Evidence) -> u64 {
    let observed = evidence.observed().intersection(population);
    match evidence.is_consistent() && evidence.expressed().is_subset(population) {
        true  => 1u64 << (population.len() - observed.len()),
        false => 0,
    }
}

/// Number of gene assignments over `population`: `3^n`.
#[must_use]
pub fn gene_assignment_count(population: Members) -> u64 {
    3u64.pow(population.len() as u32)
}
