use std::path::PathBuf;

use thiserror::Error;
use crate::FileEntity;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("{0} {1} does not exist")]
    MissingFileEntity(FileEntity, String),

    #[error("{1} is not a {0}")]
    InvalidFileEntity(FileEntity, String),

    #[error("--threads must be a positive integer. Got '{0}'")]
    InvalidThreadCount(String),

    #[error("Failed to generate an output file prefix. Note that file prefixes are generated from the input pedigree filestem")]
    ParseOutputPrefix,

    #[error("{0} already exists. Use --overwrite to force.")]
    CannotOverwrite(String),

    #[error("Failed to serialize command line arguments")]
    SerializeArgs(#[source] serde_yaml::Error),

    #[error("Unable to write serialized arguments into {path:?}")]
    WriteArgs { path: PathBuf, #[source] source: std::io::Error },

    #[error("Unable to deserialize arguments from {path:?}")]
    DeserializeArgs { path: PathBuf, #[source] source: serde_yaml::Error },

    #[error("{0:?} points to another from-yaml run. Nested from-yaml runs are not supported")]
    NestedFromYaml(PathBuf),

    #[error("Unable to open {path:?}")]
    OpenYaml { path: PathBuf, #[source] source: std::io::Error },
}
