use std::{fmt::{self, Display, Formatter}, str::FromStr};

use crate::pedigree::PedigreeError;

/// Observed trait status of an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraitObservation {
    #[default]
    Unobserved,
    Expressed,
    NotExpressed,
}

impl TraitObservation {
    /// Check whether assigning `has_trait` to this individual agrees with what was observed.
    /// Unobserved individuals admit both values.
    #[must_use]
    pub fn admits(&self, has_trait: bool) -> bool {
        match self {
            Self::Unobserved   => true,
            Self::Expressed    => has_trait,
            Self::NotExpressed => !has_trait,
        }
    }

    #[must_use]
    pub fn is_observed(&self) -> bool {
        !matches!(self, Self::Unobserved)
    }
}

impl FromStr for TraitObservation {
    type Err = PedigreeError;

    /// `"1"` -> expressed, `"0"` -> not expressed, blank -> unobserved.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Expressed),
            "0" => Ok(Self::NotExpressed),
            ""  => Ok(Self::Unobserved),
            other => Err(PedigreeError::InvalidTrait(other.to_string())),
        }
    }
}

impl Display for TraitObservation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Self::Unobserved   => "unobserved",
            Self::Expressed    => "true",
            Self::NotExpressed => "false",
        })
    }
}
