use std::{
    fs::File,
    path::{Path, PathBuf},
    fmt::{self, Display, Formatter},
    ffi::OsStr,
};

use located_error::*;

use clap::{Parser, Subcommand, Args};
use serde::{Serialize, Deserialize};
use log::debug;
use anyhow::{anyhow, Result};

mod error;
pub use error::ParserError;

/// Extension of the posterior probability tables written by `infer`.
pub const POSTERIORS_EXT: &str = "posteriors";

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(name="heredity-rs", author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// heredity-rs: exact gene and trait posteriors across a pedigree
pub struct Cli {
    ///Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use The --quiet/-q to disable them
    #[clap(short='v', long, parse(from_occurrences), global=true)]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emitted and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long, global=true)]
    pub quiet: bool,

    #[clap(subcommand)]
    pub commands: Commands,
}

impl Cli {
    /// Logger verbosity implied by `--verbose` and `--quiet`: warnings are displayed by default.
    #[must_use]
    pub fn verbosity(&self) -> u8 {
        if self.quiet { 0 } else { self.verbose.saturating_add(1) }
    }

    /// Serialize command line arguments within a `.yaml` file, and return its path.
    ///
    /// # Behavior
    /// - File naming follows the convention '{current time}-{module name}.yaml'. current time follows the format
    ///   `YYYY`-`MM`-`DD`T`hhmmss`
    /// - File is written at the root of the user-provided `--output-dir` folder.
    /// - Nothing is written (and `None` is returned) when running `from-yaml`.
    ///
    /// # Errors
    /// - if `serde_yaml` fails to parse `Self` to a string.
    /// - if the serialized arguments cannot be written within `--output-dir`
    pub fn serialize(&self) -> Result<Option<PathBuf>> {
        // ---- Parse arguments to yaml and print to console.
        let serialized = serde_yaml::to_string(&self)
            .map_err(ParserError::SerializeArgs)
            .loc("While serializing command line arguments")?;

        debug!("\n---- Command line args ----\n{}\n---", serialized);

        // ---- Fetch the appropriate output-directory and parse the name of the output file.
        let current_time = chrono::offset::Local::now().format("%Y-%m-%dT%H%M%S").to_string();
        let output_file = match &self.commands {
            Commands::Infer { infer } => infer.output_dir.join(format!("{current_time}-infer.yaml")),
            Commands::FromYaml { yaml: _ } => return Ok(None),
        };

        // ---- Write arguments
        std::fs::write(&output_file, serialized)
            .map_err(|source| ParserError::WriteArgs { path: output_file.clone(), source })
            .loc("While serializing command line arguments")?;
        Ok(Some(output_file))
    }

    /// Deserialize a `.yaml` file into Command line arguments.
    ///
    /// # Errors
    /// - if the provided `.yaml` does not exist, or does not carry read permissions
    /// - if `serde_yaml` fails to parse the provided file to `Self`.
    pub fn deserialize(yaml: &Path) -> Result<Self> {
        let path = yaml.to_path_buf();
        let file = File::open(yaml)
            .map_err(|source| ParserError::OpenYaml { path: path.clone(), source })
            .loc("While deserializing command line arguments")?;
        serde_yaml::from_reader(file)
            .map_err(|source| ParserError::DeserializeArgs { path, source })
            .loc("While deserializing command line arguments")
    }
}

#[derive(Subcommand, Debug, Serialize, Deserialize)]
pub enum Commands {
    /// Compute the posterior gene and trait distributions of every individual within a pedigree.
    Infer {
        #[clap(flatten)]
        infer: Infer,
    },

    /// Run heredity-rs using a previously generated .yaml configuration file.
    ///
    /// This allows users to easily re-apply a heredity-rs command using the exact same parameters
    /// and arguments.
    FromYaml {
        yaml: PathBuf,
    },
}

/// Exact inference of gene copy-number and trait expression.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct Infer {
    /// Input pedigree definition file.
    ///
    /// Comma-separated file, with a header naming the columns 'name', 'mother', 'father' and 'trait'.{n}
    /// Parent fields may be left empty for founder individuals.{n}
    /// Trait values: '1' (expressed), '0' (not expressed), empty (unobserved).
    #[clap(short, long, parse(try_from_os_str=valid_input_file))]
    pub data: PathBuf,

    /// Output directory where results will be written.
    ///
    /// The directory is created if it does not exist (parent directories must exist).
    #[clap(short, long, default_value("heredity-output"), parse(try_from_os_str=valid_output_dir))]
    pub output_dir: PathBuf,

    /// Overwrite existing output files.
    #[clap(short='w', long)]
    pub overwrite: bool,

    /// Number of parallel CPU threads used to enumerate partitions.
    ///
    /// Parallelization is dispatched according to the number of admissible trait assignments.
    #[clap(short='@', long, default_value("1"), parse(try_from_str=valid_thread_count))]
    pub threads: usize,

    /// Number of decimals printed for each probability.
    #[clap(short, long, default_value("4"))]
    pub precision: usize,

    /// Do not print the posterior distributions to the console.
    #[clap(long)]
    pub no_print: bool,
}

impl Infer {
    /// Path of the `.posteriors` output table: `{output_dir}/{data file stem}.posteriors`
    ///
    /// # Errors
    /// - if a file prefix cannot be generated from the input pedigree filestem.
    pub fn output_file(&self) -> Result<PathBuf> {
        let file_stem = self.data.file_stem()
            .ok_or_else(|| anyhow!(ParserError::ParseOutputPrefix))
            .loc("While parsing command line arguments")?;
        Ok(self.output_dir.join(file_stem).with_extension(POSTERIORS_EXT))
    }

    /// Ensure `--output-dir` exists, creating it if needed. Deserialized arguments skip the
    /// parse-time validation.
    ///
    /// # Errors
    /// - if `--output-dir` cannot be created, or is not a directory.
    pub fn check_output_dir(&self) -> Result<()> {
        valid_output_dir(self.output_dir.as_os_str()).map(|_| ())
    }

    /// Check if a given file already exists ; raise an error if such is the case, and the user did not explicitly
    /// allow file overwriting.
    ///
    /// # Errors
    /// - If the provided `path` already exists and the user did not specifically allow for file
    ///   overwrite using the `--overwrite` argument
    pub fn can_write_file(&self, path: &Path) -> Result<bool> {
        if ! self.overwrite && path.exists() {   // Check if this file already exists and/or if overwrite is allowed.
            return Err(ParserError::CannotOverwrite(path.display().to_string()))
                .loc( "While parsing command line arguments" )
        }
        Ok(true)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEntity {File, Directory}

impl Display for FileEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::File      => write!(f, "File"),
            Self::Directory => write!(f, "Directory"),
        }
    }
}

impl FileEntity {
    fn validate(self, path: &Path) -> Result<(), ParserError> {
        use ParserError::InvalidFileEntity;
        let valid = match self {
            Self::File      => path.is_file(),
            Self::Directory => path.is_dir()
        };

        if valid {
            Ok(())
        } else {
            Err(InvalidFileEntity(self, path.display().to_string()))
        }
    }
}

fn assert_filesystem_entity_is_valid(s: &OsStr, entity: FileEntity) -> Result<()> {
    use ParserError::MissingFileEntity;
    let path = Path::new(s);
    if ! path.exists() {
        return Err(MissingFileEntity(entity, path.display().to_string()))
            .loc("While parsing arguments.")
    }

    entity.validate(path).loc("While parsing arguments.")
}

fn valid_input_file(s: &OsStr) -> Result<PathBuf> {
    assert_filesystem_entity_is_valid(s, FileEntity::File)
        .loc("While checking for file validity")?;
    Ok(PathBuf::from(s))
}

fn valid_output_dir(s: &OsStr) -> Result<PathBuf> {
    if ! Path::new(s).exists() {
        std::fs::create_dir(s).with_loc(|| format!("While creating output directory {}", Path::new(s).display()))?;
    }
    assert_filesystem_entity_is_valid(s, FileEntity::Directory)
        .loc("While checking for directory validity")?;
    Ok(PathBuf::from(s))
}

fn valid_thread_count(s: &str) -> Result<usize> {
    match s.parse::<usize>() {
        Ok(threads) if threads > 0 => Ok(threads),
        _ => Err(ParserError::InvalidThreadCount(s.to_string())).loc("While parsing --threads"),
    }
}
