use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
///
/// The defaults (k = 5, threshold = 0.15) are kept for behavioral
/// compatibility with prior deployments; both are tunable per process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of nearest neighbors requested per query. Clamped silently to
    /// the corpus size.
    pub top_k: usize,
    /// Matches scoring below this confidence are discarded (filtered, never
    /// re-ranked).
    pub min_confidence: f64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            min_confidence: defaults::DEFAULT_MIN_CONFIDENCE,
        }
    }
}
