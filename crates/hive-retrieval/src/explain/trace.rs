//! Three-line reasoning trace per match.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use hive_core::dimension::Dimension;
use hive_core::models::PatternMatch;

/// Fixed three-line reasoning trace for one surfaced match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasoningTrace {
    /// Semantic-similarity claim.
    pub similarity: String,
    /// Verbatim listing of the detected dimension set.
    pub dimension_overlap: String,
    /// Generic prior-success claim.
    pub track_record: String,
}

impl ReasoningTrace {
    /// The trace as its three lines, in presentation order.
    pub fn lines(&self) -> [&str; 3] {
        [&self.similarity, &self.dimension_overlap, &self.track_record]
    }
}

/// Template a trace from one match and the query's dimension set.
pub fn trace_for(m: &PatternMatch, dimensions: &BTreeSet<Dimension>) -> ReasoningTrace {
    let listed = dimensions
        .iter()
        .map(|d| d.label())
        .collect::<Vec<_>>()
        .join(", ");

    ReasoningTrace {
        similarity: format!(
            "Semantic similarity between problem structure and the {} pattern",
            m.pattern.problem_type
        ),
        dimension_overlap: format!("Overlap with detected problem dimensions: {listed}"),
        track_record: "Proven success in real-world use cases".to_string(),
    }
}
