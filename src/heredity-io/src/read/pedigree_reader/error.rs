use thiserror::Error;

use pedigree_inference::PedigreeError;

use super::PedigreeField;

#[derive(Debug, Error)]
pub enum PedigreeReaderError {
    #[error("Failed to open pedigree definition file: {0}")]
    OpenFile(#[source] std::io::Error),

    #[error("Encountered IO error when reading line n°{lineno} of the pedigree definition file: {source}")]
    IoError { source: std::io::Error, lineno: usize },

    #[error("Missing header within the provided pedigree definition file. The file appears to be empty")]
    MissingHeader,

    #[error("Invalid header within the provided pedigree definition file: missing '{0}' column")]
    MissingColumn(PedigreeField),

    #[error("Invalid number of fields on line n°{lineno} of the pedigree definition file. Expected {expected}, got {got}")]
    InvalidFieldNumber { lineno: usize, expected: usize, got: usize },

    #[error("Empty 'name' field on line n°{0} of the pedigree definition file")]
    EmptyName(usize),

    #[error("Invalid 'name' field on line n°{lineno} of the pedigree definition file: '{name}' contains a column separator (tab, or a hyphen surrounded by spaces)")]
    InvalidName { lineno: usize, name: String },

    #[error("Invalid 'trait' field on line n°{lineno} of the pedigree definition file")]
    InvalidTrait { lineno: usize, #[source] source: PedigreeError },
}
