use std::{fs, path::Path};

/// One parsed line of a `.posteriors` table.
#[derive(Debug, Clone, PartialEq)]
pub struct PosteriorLine {
    pub name : String,
    pub genes: [f64; 3], // Ordered as written: [Gene2, Gene1, Gene0]
    pub trait_true : f64,
    pub trait_false: f64,
}

/// Parse a tab-separated `.posteriors` file, checking its header along the way.
pub fn read_posteriors(path: &Path) -> Vec<PosteriorLine> {
    let contents = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {e}", path.display()));
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("Name\tGene2\tGene1\tGene0\tTraitTrue\tTraitFalse"));

    lines.map(|line| {
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 6, "Invalid number of fields in line '{line}'");
        let prob = |i: usize| fields[i].parse::<f64>()
            .unwrap_or_else(|e| panic!("Invalid probability '{}': {e}", fields[i]));
        PosteriorLine {
            name       : fields[0].to_string(),
            genes      : [prob(1), prob(2), prob(3)],
            trait_true : prob(4),
            trait_false: prob(5),
        }
    }).collect()
}
