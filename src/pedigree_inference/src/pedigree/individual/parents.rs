use std::ops::Deref;

use super::PersonId;

/// Index of the mother within `Parents`
const MOTHER: usize = 0;
/// Index of the father within `Parents`
const FATHER: usize = 1;

/// Both parents of an offspring, as identifiers of the owning `Pedigree`. `[mother, father]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parents([PersonId; 2]);

impl Parents {
    pub fn new(mother: PersonId, father: PersonId) -> Parents {
        Parents([mother, father])
    }

    #[inline]
    pub fn mother(&self) -> PersonId {
        self.0[MOTHER]
    }

    #[inline]
    pub fn father(&self) -> PersonId {
        self.0[FATHER]
    }
}

impl Deref for Parents {
    type Target = [PersonId; 2];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Parents {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} <-> {}", self.mother(), self.father())
    }
}
