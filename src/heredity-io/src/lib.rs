//! Loader and presenter collaborators of the inference engine: comma-separated pedigree
//! definitions in, tab-separated posterior tables and console reports out.

pub mod read;
pub mod write;
