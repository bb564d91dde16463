use std::{
    fmt::{self, Display, Formatter},
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::Result;
use log::{debug, trace};

use located_error::LocatedError;
use pedigree_inference::{Pedigree, PedigreeBuilder, TraitObservation};

use crate::write::splits_columns;

mod error;
pub use error::PedigreeReaderError;

/// Field separator of pedigree definition files.
const FIELD_SEPARATOR: char = ',';

/// Required columns of a pedigree definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PedigreeField {
    Name,
    Mother,
    Father,
    Trait,
}

impl PedigreeField {
    pub const ALL: [PedigreeField; 4] = [Self::Name, Self::Mother, Self::Father, Self::Trait];

    /// Expected column name within the header.
    #[must_use]
    pub fn column(&self) -> &'static str {
        match self {
            Self::Name   => "name",
            Self::Mother => "mother",
            Self::Father => "father",
            Self::Trait  => "trait",
        }
    }
}

impl Display for PedigreeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// Position of each required column within a row. Indexed by `PedigreeField as usize`.
#[derive(Debug, Clone, Copy)]
struct Columns {
    indices: [usize; 4],
    width  : usize,
}

impl Columns {
    /// Locate every required column within the header. Column names are case-insensitive,
    /// may appear in any order, and extra columns are ignored.
    fn from_header(header: &str) -> Result<Self, PedigreeReaderError> {
        let names: Vec<String> = header.split(FIELD_SEPARATOR).map(|s| s.trim().to_lowercase()).collect();
        let mut indices = [0; 4];
        for field in PedigreeField::ALL {
            indices[field as usize] = names.iter()
                .position(|name| name == field.column())
                .ok_or(PedigreeReaderError::MissingColumn(field))?;
        }
        Ok(Self { indices, width: names.len() })
    }

    fn get<'a>(&self, fields: &[&'a str], field: PedigreeField) -> &'a str {
        fields[self.indices[field as usize]]
    }
}

/// A single, unresolved row of a pedigree definition file.
/// # Fields:
/// - `name`       : label of the individual.
/// - `mother`     : label of the mother, if any.
/// - `father`     : label of the father, if any.
/// - `observation`: observed trait status.
/// - `lineno`     : line number of this record within the source file (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PedigreeRecord {
    pub name       : String,
    pub mother     : Option<String>,
    pub father     : Option<String>,
    pub observation: TraitObservation,
    pub lineno     : usize,
}

/// Comma-separated pedigree definition file reader.
/// ### File characteristics:
/// - Header line naming the columns `name`, `mother`, `father`, `trait` (any order).
/// - Empty `mother`/`father` fields denote an unknown parent.
/// - `trait`: `1` (expressed), `0` (not expressed), or empty (unobserved).
/// - Blank lines are skipped. Children may be declared before their parents.
/// - Fields are split on every `,`: quoted fields (`"Potter, Harry"`) are not supported.
/// - Names may not contain a tab, or a hyphen surrounded by spaces (`.posteriors` column separators).
#[derive(Debug, Clone)]
pub struct PedigreeReader {
    source_file: Option<PathBuf>,
    records    : Vec<PedigreeRecord>,
}

impl PedigreeReader {
    /// Read and parse a pedigree definition file.
    /// # Errors
    /// - if `path` cannot be opened, or if any of its lines is malformed.
    pub fn new(path: &Path) -> Result<Self> {
        let loc_msg = || format!("While attempting to parse {}", path.display());
        let file    = File::open(path).map_err(PedigreeReaderError::OpenFile).with_loc(loc_msg)?;
        let records = Self::parse(BufReader::new(file)).with_loc(loc_msg)?;
        debug!("Parsed {} records from {}", records.len(), path.display());
        Ok(Self { source_file: Some(path.to_path_buf()), records })
    }

    /// Parse a pedigree definition from any buffered source.
    /// # Errors
    /// - if any of the lines of `source` is malformed.
    pub fn from_reader<R: BufRead>(source: R) -> Result<Self> {
        let records = Self::parse(source).loc("While parsing pedigree definition")?;
        Ok(Self { source_file: None, records })
    }

    fn parse<R: BufRead>(source: R) -> Result<Vec<PedigreeRecord>, PedigreeReaderError> {
        use PedigreeReaderError::{EmptyName, InvalidFieldNumber, InvalidName, InvalidTrait, IoError, MissingHeader};
        let mut columns = None;
        let mut records = Vec::new();
        for (i, line) in source.lines().enumerate() {
            let lineno = i + 1;
            let line = line.map_err(|source| IoError { source, lineno })?;
            if line.trim().is_empty() {
                continue
            }

            // ---- First non-blank line is the header.
            let Some(columns) = columns else {
                columns = Some(Columns::from_header(&line)?);
                continue
            };

            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
            if fields.len() != columns.width {
                return Err(InvalidFieldNumber { lineno, expected: columns.width, got: fields.len() })
            }

            let name = columns.get(&fields, PedigreeField::Name);
            if name.is_empty() {
                return Err(EmptyName(lineno))
            }
            if splits_columns(name) {
                return Err(InvalidName { lineno, name: name.to_string() })
            }
            let parent = |field| Some(columns.get(&fields, field)).filter(|p| !p.is_empty()).map(str::to_string);
            let observation = columns.get(&fields, PedigreeField::Trait)
                .parse::<TraitObservation>()
                .map_err(|source| InvalidTrait { lineno, source })?;

            let record = PedigreeRecord {
                name  : name.to_string(),
                mother: parent(PedigreeField::Mother),
                father: parent(PedigreeField::Father),
                observation,
                lineno
            };
            trace!("{record:?}");
            records.push(record);
        }

        match columns {
            Some(_) => Ok(records),
            None    => Err(MissingHeader),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[PedigreeRecord] {
        &self.records
    }

    #[must_use]
    pub fn source_file(&self) -> Option<&Path> {
        self.source_file.as_deref()
    }

    /// Resolve parent references, validate the family tree and freeze it into a `Pedigree`.
    /// # Errors
    /// - any `PedigreeError` raised by `PedigreeBuilder::build()` (unknown parent, cycle, etc.)
    pub fn to_pedigree(&self) -> Result<Pedigree> {
        let mut builder = PedigreeBuilder::new();
        for record in &self.records {
            builder.add_individual(&record.name, record.mother.as_deref(), record.father.as_deref(), record.observation);
        }
        let source = self.source_file.as_ref().map_or_else(|| String::from("<input>"), |path| path.display().to_string());
        builder.build().with_loc(|| format!("While building the pedigree defined in {source}"))
    }
}
