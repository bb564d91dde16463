mod pedigree_reader;
pub use pedigree_reader::{PedigreeField, PedigreeReader, PedigreeReaderError, PedigreeRecord};
