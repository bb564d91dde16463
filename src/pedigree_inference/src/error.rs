use thiserror::Error;

use crate::posterior::DistributionKind;

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("No assignment is consistent with the observed evidence: the {distribution} distribution of '{individual}' carries a total mass of zero")]
    InconsistentEvidence { individual: String, distribution: DistributionKind },

    #[error("Failed to instantiate threadpool")]
    BuildThreadPool(#[source] rayon::ThreadPoolBuildError),
}
