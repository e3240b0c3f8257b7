use serde::{Deserialize, Serialize};

use super::{Confidence, Pattern};

/// One ranked retrieval result, transient per query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternMatch {
    /// The matched corpus pattern.
    pub pattern: Pattern,
    /// Squared Euclidean distance between the query and the pattern vector.
    pub distance: f64,
    /// Bounded score derived from `distance` alone.
    pub confidence: Confidence,
}
