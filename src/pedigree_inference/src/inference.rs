use indicatif::ProgressBar;
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::{
    enumeration::{self, Evidence, Members},
    error::InferenceError,
    joint::JointProbability,
    pedigree::Pedigree,
    posterior::{Accumulator, PosteriorTable},
};

/// Runtime parameters of an inference run.
/// # Fields:
/// - `threads`: number of worker threads. `1` (or `0`) runs the enumeration sequentially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InferenceConfig {
    pub threads: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self { threads: 1 }
    }
}

impl InferenceConfig {
    #[must_use]
    pub fn with_threads(threads: usize) -> Self {
        Self { threads }
    }
}

/// Compute the exact gene and trait posteriors of every individual of `pedigree`, given
/// its observed trait evidence. Sequential, without progress reporting.
/// # Errors
/// - `InconsistentEvidence` if no partition with nonzero probability agrees with the evidence.
pub fn infer(pedigree: &Pedigree) -> Result<PosteriorTable, InferenceError> {
    infer_with(pedigree, &InferenceConfig::default(), &ProgressBar::hidden())
}

/// Compute the exact gene and trait posteriors of every individual of `pedigree`.
/// # Arguments:
/// - `pedigree`: validated family tree, carrying the observed trait evidence.
/// - `config`  : runtime parameters (thread count).
/// - `progress`: progress bar ticked once per admissible trait candidate. Its length is set here.
///
/// # Errors
/// - `InconsistentEvidence` if no partition with nonzero probability agrees with the evidence.
/// - `BuildThreadPool` if the rayon thread pool cannot be instantiated.
pub fn infer_with(pedigree: &Pedigree, config: &InferenceConfig, progress: &ProgressBar) -> Result<PosteriorTable, InferenceError> {
    enumerate(pedigree, pedigree.evidence(), config, progress)
}

/// Enumerate, score and accumulate every partition admitted by `evidence`, then normalize.
pub(crate) fn enumerate(pedigree: &Pedigree, evidence: Evidence, config: &InferenceConfig, progress: &ProgressBar) -> Result<PosteriorTable, InferenceError> {
    let population = pedigree.population();
    let founders   = pedigree.founders().count();
    info!("Running exact inference on {} individuals ({} founders, {} offspring)", pedigree.len(), founders, pedigree.len() - founders);

    // ---- Size the search space.
    let candidates  = enumeration::trait_candidate_count(population, evidence);
    let assignments = enumeration::gene_assignment_count(population);
    debug!("{candidates} admissible trait candidates x {assignments} gene assignments = {} partitions", candidates.saturating_mul(assignments));
    if candidates == 0 {
        warn!("The observed evidence admits no trait assignment");
    }
    progress.set_length(candidates);

    let joint = JointProbability::new(pedigree);
    let accumulator = match config.threads {
        0 | 1   => sequential(&joint, population, evidence, progress),
        threads => parallel(&joint, population, evidence, threads, progress)?,
    };
    progress.finish_and_clear();
    debug!("Accumulated {} partitions", accumulator.partitions());

    accumulator.normalize(pedigree)
}

fn sequential(joint: &JointProbability, population: Members, evidence: Evidence, progress: &ProgressBar) -> Accumulator {
    info!("Enumerating partitions sequentially");
    let mut accumulator = Accumulator::new(joint.pedigree().len());
    for has_trait in enumeration::trait_candidates(population, evidence) {
        for partition in enumeration::partitions_with_trait(population, has_trait) {
            accumulator.add(&partition, joint.evaluate(&partition));
        }
        progress.inc(1);
    }
    accumulator
}

/// Each worker folds whole trait candidates into its own accumulator. Partial accumulators
/// are then summed.
fn parallel(joint: &JointProbability, population: Members, evidence: Evidence, threads: usize, progress: &ProgressBar) -> Result<Accumulator, InferenceError> {
    info!("Enumerating partitions on {threads} threads");
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(InferenceError::BuildThreadPool)?;

    let size = joint.pedigree().len();
    let candidates: Vec<Members> = enumeration::trait_candidates(population, evidence).collect();
    let accumulator = pool.install(|| {
        candidates.par_iter()
            .fold(|| Accumulator::new(size), |mut accumulator, &has_trait| {
                for partition in enumeration::partitions_with_trait(population, has_trait) {
                    accumulator.add(&partition, joint.evaluate(&partition));
                }
                progress.inc(1);
                accumulator
            })
            .reduce(|| Accumulator::new(size), Accumulator::merge)
    });
    Ok(accumulator)
}
