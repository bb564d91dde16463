//! Exact inference of gene copy-number and trait expression across a pedigree.
//!
//! Every assignment of {0, 1, 2} gene copies and {trait, no trait} to each individual is
//! enumerated, pruned against the observed trait evidence, scored with the joint probability
//! of the pedigree's Bayesian network, and folded into per-individual marginals which are
//! finally normalized into a [`PosteriorTable`].

pub mod pedigree;
pub use pedigree::{Pedigree, PedigreeBuilder, PedigreeError, MAX_POPULATION_SIZE};
pub use pedigree::individual::{Individual, Parents, PersonId, TraitObservation};

pub mod model;
pub use model::{GeneCount, InheritanceTable};

pub mod enumeration;
pub use enumeration::{Evidence, Members, Partition};

pub mod joint;
pub use joint::JointProbability;

pub mod posterior;
pub use posterior::{Accumulator, DistributionKind, GeneDistribution, Posterior, PosteriorTable, TraitDistribution};

mod inference;
pub use inference::{infer, infer_with, InferenceConfig};

mod error;
pub use error::InferenceError;
