use std::fmt::{self, Display, Formatter};

mod parents;
pub use parents::Parents;

mod observation;
pub use observation::TraitObservation;

/// Space padding lengths used for `std::fmt::Display` of Individual
const LABEL_DISPLAY_LEN  : usize = 10; // Space padding of `self.label`
const PARENTS_DISPLAY_LEN: usize = 12; // Space padding of `self.parents`

/// Stable identifier of an individual: its zero-based insertion index within the owning `Pedigree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(pub(crate) usize);

impl PersonId {
    #[inline(always)]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for PersonId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pedigree Individual. Immutable once its `Pedigree` is built.
/// # Fields:
/// - `label`      : User-defined name of the individual (e.g. 'Harry', 'Lily', 'James')
/// - `parents`    : Optional pair of parent identifiers.
///                    - `None`          if the individual is a founder.
///                    - `Some(parents)` if both parents are known.
/// - `observation`: Observed trait status (expressed, not expressed, or unobserved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    label      : String,
    parents    : Option<Parents>,
    observation: TraitObservation,
}

impl Display for Individual {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let parents = match &self.parents {
            None          => "None".to_string(),
            Some(parents) => format!("{parents}"),
        };
        write!(f, "label: {: <LABEL_DISPLAY_LEN$} - parents: {: <PARENTS_DISPLAY_LEN$} - trait: {}", self.label, parents, self.observation)
    }
}

impl Individual {
    pub(crate) fn new(label: &str, parents: Option<Parents>, observation: TraitObservation) -> Individual {
        Individual { label: label.to_string(), parents, observation }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn parents(&self) -> Option<&Parents> {
        self.parents.as_ref()
    }

    pub fn observation(&self) -> TraitObservation {
        self.observation
    }

    /// Check whether or not this individual is a founder individual. Returns `true` if `self.parents == None`
    #[inline(always)]
    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }
}
