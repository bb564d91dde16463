use std::{fmt::{self, Display, Formatter}, ops::Index};

use ahash::AHashMap;
use log::{debug, trace};

use crate::enumeration::{Evidence, Members};

pub mod individual;
use individual::{Individual, Parents, PersonId, TraitObservation};

mod error;
pub use error::PedigreeError;


/// Upper bound on the number of individuals an exhaustive enumeration can handle.
/// The search space grows as 6^n, and population sets are stored as `u32` bitmasks.
pub const MAX_POPULATION_SIZE: usize = 20;

/// A validated, immutable family tree.
/// # Fields:
/// - `individuals`: members of the pedigree (founders and offspring), in insertion order.
///                  The position of an individual within this vector is its `PersonId`.
/// - `index`      : label -> `PersonId` lookup table.
#[derive(Debug, Clone)]
pub struct Pedigree {
    individuals: Vec<Individual>,
    index      : AHashMap<String, PersonId>,
}

impl Pedigree {
    /// Number of individuals within this pedigree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Iterate over all individuals, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonId, &Individual)> {
        self.individuals.iter().enumerate().map(|(i, ind)| (PersonId(i), ind))
    }

    /// Iterate over all identifiers, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = PersonId> + Clone {
        (0..self.individuals.len()).map(PersonId)
    }

    #[must_use]
    pub fn get(&self, id: PersonId) -> Option<&Individual> {
        self.individuals.get(id.0)
    }

    /// Retrieve the identifier of an individual from its label.
    #[must_use]
    pub fn id_of(&self, label: &str) -> Option<PersonId> {
        self.index.get(label).copied()
    }

    /// Label of the individual carrying `id`.
    /// # Panics
    /// - if `id` does not belong to this pedigree.
    #[must_use]
    pub fn label(&self, id: PersonId) -> &str {
        self[id].label()
    }

    /// Parents of the individual carrying `id`. `None` if this individual is a founder.
    #[must_use]
    pub fn parents(&self, id: PersonId) -> Option<&Parents> {
        self[id].parents()
    }

    #[must_use]
    pub fn has_parents(&self, id: PersonId) -> bool {
        !self[id].is_founder()
    }

    /// Obtain an iterator over the founder individuals of this pedigree.
    pub fn founders(&self) -> impl Iterator<Item = (PersonId, &Individual)> {
        self.iter().filter(|(_, ind)| ind.is_founder())
    }

    /// Obtain an iterator over the offspring of this pedigree.
    pub fn offspring(&self) -> impl Iterator<Item = (PersonId, &Individual)> {
        self.iter().filter(|(_, ind)| !ind.is_founder())
    }

    /// Set containing every individual of this pedigree.
    #[must_use]
    pub fn population(&self) -> Members {
        Members::full(self.len())
    }

    /// Extract the trait observations of this pedigree as a pair of population sets.
    #[must_use]
    pub fn evidence(&self) -> Evidence {
        let mut observed  = Members::empty();
        let mut expressed = Members::empty();
        for (id, ind) in self.iter().filter(|(_, ind)| ind.observation().is_observed()) {
            observed.insert(id);
            if ind.observation().admits(true) {
                expressed.insert(id);
            }
        }
        Evidence::new(observed, expressed)
    }
}

impl Index<PersonId> for Pedigree {
    type Output = Individual;

    fn index(&self, id: PersonId) -> &Self::Output {
        &self.individuals[id.0]
    }
}

impl Display for Pedigree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|(id, ind)| writeln!(f, "{id: <4} {ind}"))
    }
}

/// Raw, unresolved pedigree entry.
#[derive(Debug, Clone)]
struct PendingIndividual {
    label      : String,
    mother     : Option<String>,
    father     : Option<String>,
    observation: TraitObservation,
}

/// Accumulates individuals in any order, and validates the whole family tree at once.
/// Children may thus be declared before their parents.
#[derive(Debug, Clone, Default)]
pub struct PedigreeBuilder {
    pending: Vec<PendingIndividual>,
}

impl PedigreeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new individual.
    /// # Arguments:
    /// - `label`      : name of the individual (e.g. "Harry")
    /// - `mother`     : Optional label of the mother. `None` (or an empty string) if unknown.
    /// - `father`     : Optional label of the father. `None` (or an empty string) if unknown.
    /// - `observation`: observed trait status of this individual.
    pub fn add_individual(&mut self, label: &str, mother: Option<&str>, father: Option<&str>, observation: TraitObservation) -> &mut Self {
        let parent = |p: Option<&str>| p.map(str::trim).filter(|p| !p.is_empty()).map(str::to_string);
        self.pending.push(PendingIndividual {
            label : label.trim().to_string(),
            mother: parent(mother),
            father: parent(father),
            observation
        });
        self
    }

    /// Number of individuals registered so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Validate all registered individuals, and freeze them into a `Pedigree`.
    /// # Errors
    /// - `PopulationTooLarge` if more than `MAX_POPULATION_SIZE` individuals were registered.
    /// - `DuplicateIndividual` if two individuals share the same label.
    /// - `UnknownParent` if a parent label does not match any registered individual.
    /// - `MissingParent` if an individual only has a single known parent.
    /// - `SelfParent` or `IdenticalParents` for degenerate parent pairs.
    /// - `AncestryCycle` if an individual turns out to be its own ancestor.
    pub fn build(&self) -> Result<Pedigree, PedigreeError> {
        use PedigreeError::*;
        let size = self.pending.len();
        if size > MAX_POPULATION_SIZE {
            return Err(PopulationTooLarge { size, max: MAX_POPULATION_SIZE })
        }

        // ---- Index labels, and reject duplicates.
        let mut index = AHashMap::with_capacity(size);
        for (i, pending) in self.pending.iter().enumerate() {
            if index.insert(pending.label.clone(), PersonId(i)).is_some() {
                return Err(DuplicateIndividual(pending.label.clone()))
            }
        }

        // ---- Resolve parent labels.
        let resolve = |individual: &str, parent: &str| {
            index.get(parent).copied().ok_or_else(|| UnknownParent {
                individual: individual.to_string(),
                parent    : parent.to_string()
            })
        };

        let mut individuals = Vec::with_capacity(size);
        for (i, pending) in self.pending.iter().enumerate() {
            let label   = &pending.label;
            let parents = match (&pending.mother, &pending.father) {
                (None, None)                 => None,
                (Some(mother), Some(father)) => {
                    let parents = Parents::new(resolve(label, mother)?, resolve(label, father)?);
                    if parents.contains(&PersonId(i)) {
                        return Err(SelfParent(label.clone()))
                    }
                    if parents.mother() == parents.father() {
                        return Err(IdenticalParents(label.clone()))
                    }
                    Some(parents)
                },
                _ => return Err(MissingParent(label.clone())),
            };
            trace!("Resolved {label}: {parents:?}");
            individuals.push(Individual::new(label, parents, pending.observation));
        }

        detect_cycles(&individuals)?;

        debug!("Built pedigree of {} individuals ({} founders)", size, individuals.iter().filter(|ind| ind.is_founder()).count());
        Ok(Pedigree { individuals, index })
    }
}

/// Depth-first traversal of the ancestry graph. Returns the label of the first individual
/// found to be its own ancestor.
fn detect_cycles(individuals: &[Individual]) -> Result<(), PedigreeError> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark { Unvisited, InProgress, Done }

    fn visit(i: usize, individuals: &[Individual], marks: &mut [Mark]) -> Result<(), PedigreeError> {
        match marks[i] {
            Mark::Done       => return Ok(()),
            Mark::InProgress => return Err(PedigreeError::AncestryCycle(individuals[i].label().to_string())),
            Mark::Unvisited  => marks[i] = Mark::InProgress,
        }
        if let Some(parents) = individuals[i].parents() {
            for parent in parents.iter() {
                visit(parent.index(), individuals, marks)?;
            }
        }
        marks[i] = Mark::Done;
        Ok(())
    }

    let mut marks = vec![Mark::Unvisited; individuals.len()];
    (0..individuals.len()).try_for_each(|i| visit(i, individuals, &mut marks))
}
