use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use pedigree_inference::{GeneCount, Posterior, PosteriorTable};

/// Column names of a `.posteriors` file.
pub const POSTERIOR_HEADER: [&str; 6] = ["Name", "Gene2", "Gene1", "Gene0", "TraitTrue", "TraitFalse"];

/// Space padding of the name column.
const NAME_DISPLAY_LEN: usize = 12;

/// Pretty-printed header line of a `.posteriors` file. Separators are ` - `.
#[must_use]
pub fn posterior_header() -> String {
    POSTERIOR_HEADER.iter().join(" - ")
}

/// One line of a `.posteriors` file.
/// # Fields:
/// - `name`     : label of the individual.
/// - `posterior`: normalized distributions of this individual.
/// - `precision`: number of decimals printed.
#[derive(Debug, Clone, Copy)]
pub struct PosteriorRow<'a> {
    name     : &'a str,
    posterior: &'a Posterior,
    precision: usize,
}

impl<'a> PosteriorRow<'a> {
    #[must_use]
    pub fn new(name: &'a str, posterior: &'a Posterior, precision: usize) -> Self {
        Self { name, posterior, precision }
    }
}

impl Display for PosteriorRow<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let prec = self.precision;
        let genes = [GeneCount::Two, GeneCount::One, GeneCount::Zero].iter()
            .map(|&genes| format!("{:.prec$}", self.posterior.gene(genes)))
            .join(" - ");
        write!(f, "{: <NAME_DISPLAY_LEN$} - {genes} - {:.prec$} - {:.prec$}",
            self.name,
            self.posterior.trait_prob(true),
            self.posterior.trait_prob(false)
        )
    }
}

/// Rows of a `.posteriors` file, in name order.
pub fn posterior_rows(table: &PosteriorTable, precision: usize) -> impl Iterator<Item = PosteriorRow<'_>> {
    table.iter().map(move |(name, posterior)| PosteriorRow::new(name, posterior, precision))
}

/// Human readable rendition of a `PosteriorTable`, in name order:
/// ```text
/// Harry:
///   Gene:
///     2: 0.0092
///     1: 0.4557
///     0: 0.5351
///   Trait:
///     True: 0.2665
///     False: 0.7335
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReport<'a> {
    table    : &'a PosteriorTable,
    precision: usize,
}

impl<'a> ConsoleReport<'a> {
    #[must_use]
    pub fn new(table: &'a PosteriorTable, precision: usize) -> Self {
        Self { table, precision }
    }
}

impl Display for ConsoleReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let prec = self.precision;
        for (name, posterior) in self.table.iter() {
            writeln!(f, "{name}:")?;
            writeln!(f, "  Gene:")?;
            for genes in [GeneCount::Two, GeneCount::One, GeneCount::Zero] {
                writeln!(f, "    {genes}: {:.prec$}", posterior.gene(genes))?;
            }
            writeln!(f, "  Trait:")?;
            writeln!(f, "    True: {:.prec$}", posterior.trait_prob(true))?;
            writeln!(f, "    False: {:.prec$}", posterior.trait_prob(false))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedigree_inference::{infer, PedigreeBuilder, TraitObservation};
    use pedigree_inference::model::{FOUNDER_GENE_PRIOR, TRAIT_GIVEN_GENES};
    use pretty_assertions::assert_eq;

    fn single_founder() -> PosteriorTable {
        let pedigree = PedigreeBuilder::new()
            .add_individual("Lily", None, None, TraitObservation::Unobserved)
            .build()
            .expect("Failed to build pedigree");
        infer(&pedigree).expect("Inference failed")
    }

    #[test]
    fn header() {
        assert_eq!(posterior_header(), "Name - Gene2 - Gene1 - Gene0 - TraitTrue - TraitFalse");
    }

    #[test]
    fn row() {
        let table = single_founder();
        let rows: Vec<String> = posterior_rows(&table, 4).map(|row| row.to_string()).collect();
        let trait_true: f64 = FOUNDER_GENE_PRIOR.iter().zip(TRAIT_GIVEN_GENES).map(|(g, t)| g * t).sum();
        let expected = format!("Lily         - 0.0100 - 0.0300 - 0.9600 - {trait_true:.4} - {:.4}", 1.0 - trait_true);
        assert_eq!(expected, "Lily         - 0.0100 - 0.0300 - 0.9600 - 0.0329 - 0.9671");
        assert_eq!(rows, vec![expected]);
    }

    #[test]
    fn console_report() {
        let table = single_founder();
        let expected = "Lily:\n  Gene:\n    2: 0.01\n    1: 0.03\n    0: 0.96\n  Trait:\n    True: 0.03\n    False: 0.97\n";
        assert_eq!(ConsoleReport::new(&table, 2).to_string(), expected);
    }
}
