use std::path::Path;

use crate::error::Result;
use crate::leads::{read_dataset, Dataset};
use crate::normalize::{normalize, NormalizeNote, NormalizeOptions};
use crate::scoring::{score, ScoredDataset, ScoringConfig};

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    pub leads: ScoredDataset,
    /// Values discarded during normalization, in input row order
    pub notes: Vec<NormalizeNote>,
}

/// Normalize and score an in-memory dataset.
pub fn rank_dataset(raw: &Dataset, options: &NormalizeOptions, scoring: &ScoringConfig) -> Ranked {
    let normalized = normalize(raw, options);
    let leads = score(normalized.dataset, scoring);
    Ranked {
        leads,
        notes: normalized.notes,
    }
}

/// Read a lead file, normalize it and score it.
///
/// This is the single entry point the CLI uses for every subcommand that
/// needs ranked leads.
pub fn rank_file(path: &Path, options: &NormalizeOptions, scoring: &ScoringConfig) -> Result<Ranked> {
    let raw = read_dataset(path)?;
    tracing::debug!("Read {} rows from {}", raw.len(), path.display());
    Ok(rank_dataset(&raw, options, scoring))
}
