use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

use super::PatternMatch;

/// Output of the analysis engine for one problem statement.
///
/// `matches` is ordered nearest-first; an empty list means no pattern
/// cleared the confidence threshold ("no confident match", not a failure).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Detected problem dimensions. Never empty.
    pub dimensions: BTreeSet<Dimension>,
    /// Matches that cleared the confidence threshold, nearest first.
    pub matches: Vec<PatternMatch>,
}

impl Analysis {
    /// Whether any pattern cleared the confidence threshold.
    pub fn has_confident_match(&self) -> bool {
        !self.matches.is_empty()
    }
}
