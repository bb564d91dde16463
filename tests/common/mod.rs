mod fixture;
pub use fixture::Fixture;

mod posteriors;
pub use posteriors::{read_posteriors, PosteriorLine};
