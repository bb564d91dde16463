use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PedigreeError {
    #[error("Individual '{0}' is defined more than once")]
    DuplicateIndividual(String),

    #[error("Individual '{individual}' references an unknown parent: '{parent}'")]
    UnknownParent { individual: String, parent: String },

    #[error("Individual '{0}' only has a single parent defined. Either both parents must be provided, or none")]
    MissingParent(String),

    #[error("Individual '{0}' cannot be its own parent")]
    SelfParent(String),

    #[error("Individual '{0}' references the same individual as mother and father")]
    IdenticalParents(String),

    #[error("Individual '{0}' is part of an ancestry cycle")]
    AncestryCycle(String),

    #[error("Exhaustive enumeration supports at most {max} individuals. Got {size}")]
    PopulationTooLarge { size: usize, max: usize },

    #[error("Invalid trait value '{0}'. Expected '1' (expressed), '0' (not expressed) or an empty field (unobserved)")]
    InvalidTrait(String),
}
