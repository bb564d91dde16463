use std::path::PathBuf;

use anyhow::Result;
use log::info;

use heredity_io::{read::PedigreeReader, write::{posterior_header, posterior_rows, ConsoleReport, GenericWriter}};
use located_error::LocatedError;
use logger::Logger;
use parser::{Cli, Commands::{FromYaml, Infer}, ParserError};
use pedigree_inference::{infer_with, InferenceConfig, PosteriorTable};

/// Unpack `cli` and run the requested module.
/// # Errors
/// - if the pedigree definition cannot be loaded or validated.
/// - if the observed evidence is inconsistent with the model.
/// - if the output table cannot be written.
pub fn run(cli: Cli) -> Result<()> {
    match cli.commands {
        Infer { infer } => {
            // ----------------------------- Ensure the output directory exists (skipped by deserialization).
            infer.check_output_dir()?;

            // ----------------------------- Parse and validate the pedigree.
            info!("Parsing pedigree definition file {}", infer.data.display());
            let pedigree = PedigreeReader::new(&infer.data)?
                .to_pedigree()
                .with_loc(|| format!("While validating the pedigree defined in {}", infer.data.display()))?;
            info!("Loaded {} individuals:\n{pedigree}", pedigree.len());

            // ----------------------------- Refuse to clobber existing results before running.
            let output_file = infer.output_file()?;
            infer.can_write_file(&output_file)?;

            // ----------------------------- Run inference.
            let progress  = Logger::progress_bar(0, "Enumerating partitions");
            let config    = InferenceConfig::with_threads(infer.threads);
            let posterior = infer_with(&pedigree, &config, &progress)
                .loc("While running exact inference")?;

            // ----------------------------- Print and write results.
            if ! infer.no_print {
                print!("{}", ConsoleReport::new(&posterior, infer.precision));
            }
            write_posteriors(&posterior, output_file, infer.precision)?;
        },

        FromYaml { yaml } => {
            info!("Re-running arguments serialized within {}", yaml.display());
            let cli = Cli::deserialize(&yaml)?;
            if matches!(cli.commands, FromYaml { .. }) {
                return Err(ParserError::NestedFromYaml(yaml))
                    .loc("While deserializing command line arguments")
            }
            self::run(cli)?;
        },
    };
    Ok(())
}

/// Write a `.posteriors` table (tab-separated, one line per individual, in name order).
fn write_posteriors(posterior: &PosteriorTable, path: PathBuf, precision: usize) -> Result<()> {
    info!("Writing posterior distributions to {}", path.display());
    let mut writer = GenericWriter::new(Some(&path))?;
    writer.write_iter(std::iter::once(posterior_header()))?;
    writer.write_iter(posterior_rows(posterior, precision))
        .with_loc(|| format!("While writing posterior distributions to {}", path.display()))
}
