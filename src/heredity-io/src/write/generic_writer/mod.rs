use std::{fs::File, io::{Write, BufWriter}, path::Path};
use anyhow::Result;
use regex::Regex;
use lazy_static::lazy_static;

use located_error::LocatedError;

pub mod error;
pub use error::WriterError;

/// THE field separator used for this generic writer.
pub const WRITER_SEPARATOR: &str = "\t";

lazy_static! {
    /// Pretty-print separator, replaced by `WRITER_SEPARATOR` upon writing.
    static ref PRETTY_SEPARATOR: Regex = Regex::new(r"[ ]+-[ ]+").expect("Failed to parse regex.");
}

/// Check whether `field` would be split across several columns once written.
#[must_use]
pub fn splits_columns(field: &str) -> bool {
    field.contains(WRITER_SEPARATOR) || PRETTY_SEPARATOR.is_match(field)
}

/// A generic line writer.
/// - source: Boxed `BufWriter` (can either handle file-writing, or stdout).
pub struct GenericWriter<'a> {
    source: BufWriter<Box<dyn Write + 'a>>
}

impl<'a> GenericWriter<'a> {
    /// Instantiate a new `GenericWriter`, linked to a file, or to stdout if `path` is `None`.
    ///
    /// # Errors
    /// if `path` is either an invalid file, or the user does not have the proper
    /// UNIX permissions to write at this location.
    pub fn new(path: Option<impl AsRef<Path>>) -> Result<GenericWriter<'a>> {
        Ok(GenericWriter{ source: match path {
            Some(path) => {
                let path = path.as_ref();
                let file = File::create(path)
                    .map_err(WriterError::CreateFile)
                    .with_loc(|| format!("While creating {}", path.display()))?;
                BufWriter::new(Box::new(file))
            },
            None => BufWriter::new(Box::new(std::io::stdout())),
        }})
    }

    /// Wrap any `Write` implementor (e.g. an in-memory buffer).
    pub fn from_writer(writer: impl Write + 'a) -> GenericWriter<'a> {
        GenericWriter { source: BufWriter::new(Box::new(writer)) }
    }

    /// Write the contents of a generic iterator. One iteration step = one line.
    ///
    /// # Behavior
    /// For each item of the iterator, `write_iter` searches for the regular expression
    /// `[ ]+-[ ]+` and replaces matches with `\t`. This effectively removes "Pretty-print"
    /// from the output.
    ///
    /// # Errors
    /// - If any of the Items within `iter` fails to get written.
    ///
    /// # Panics
    /// - if parsing the regex required to delete pretty-print characters fails.
    pub fn write_iter<T, I>(&mut self, iter: T) -> Result<()>
    where   T: IntoIterator<Item = I>,
            I: std::fmt::Display,
    {
        for obj in iter {
            self.source.write_all(PRETTY_SEPARATOR.replace_all(&format!("{obj}\n"), WRITER_SEPARATOR).as_bytes())
                .map_err(WriterError::IOError)
                .loc("While writing contents into file")?;
        }
        self.source.flush().map_err(WriterError::IOError).loc("While flushing buffer contents of Writer")
    }
}
