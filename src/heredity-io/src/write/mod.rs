pub mod generic_writer;
pub use generic_writer::{splits_columns, GenericWriter, WriterError};

mod report;
pub use report::{posterior_header, posterior_rows, ConsoleReport, PosteriorRow, POSTERIOR_HEADER};
