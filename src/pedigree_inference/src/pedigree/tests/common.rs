use crate::pedigree::{
    Pedigree,
    PedigreeBuilder,
    individual::{Individual, Parents, PersonId, TraitObservation},
};

/// Mock a founder individual with no parents, and no trait observation.
/// # Arguments:
///  - `label`: raw string slice defining the individual's name (e.g. "father", "mother", etc.)
pub fn mock_founder(label: &str) -> Individual {
    Individual::new(label, None, TraitObservation::Unobserved)
}

/// Mock an offspring individual whose parents are `PersonId(0)` (mother) and `PersonId(1)` (father).
/// # Arguments:
///  - `label` : raw string slice defining the individual's name (e.g. "child")
pub fn mock_offspring(label: &str) -> Individual {
    Individual::new(label, Some(Parents::new(PersonId(0), PersonId(1))), TraitObservation::Unobserved)
}

/// Mock a mother - father - child trio. Trait observations are given in that order.
pub fn mock_trio(observations: [TraitObservation; 3]) -> Pedigree {
    let [mother, father, child] = observations;
    PedigreeBuilder::new()
        .add_individual("mother", None, None, mother)
        .add_individual("father", None, None, father)
        .add_individual("child", Some("mother"), Some("father"), child)
        .build()
        .expect("Failed to build mock trio")
}

/// Mock a pedigree of `n` unrelated, unobserved founders.
pub fn mock_founders(n: usize) -> Pedigree {
    let mut builder = PedigreeBuilder::new();
    for i in 0..n {
        builder.add_individual(&format!("founder-{i}"), None, None, TraitObservation::Unobserved);
    }
    builder.build().expect("Failed to build mock founders")
}
