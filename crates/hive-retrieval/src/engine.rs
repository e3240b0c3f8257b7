//! AnalysisEngine: orchestrates the retrieval pipeline.
//!
//! problem text → dimension tags → query embedding → nearest-k search →
//! confidence filter → ranked matches.

use tracing::{debug, info};

use hive_core::config::RetrievalConfig;
use hive_core::errors::{HiveResult, QueryError};
use hive_core::models::{Analysis, PatternMatch};
use hive_core::traits::IEmbeddingProvider;
use hive_corpus::PatternIndex;

use crate::scoring;
use crate::tagger;

/// The analysis engine. Holds no state between calls; borrows a shared,
/// read-only index and provider, so independent queries may run concurrently.
pub struct AnalysisEngine<'a> {
    index: &'a PatternIndex,
    provider: &'a dyn IEmbeddingProvider,
    config: RetrievalConfig,
}

impl<'a> AnalysisEngine<'a> {
    pub fn new(
        index: &'a PatternIndex,
        provider: &'a dyn IEmbeddingProvider,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            index,
            provider,
            config,
        }
    }

    /// Analyze one problem statement.
    ///
    /// Returns the detected dimensions and the matches that cleared the
    /// confidence threshold, nearest first. An empty match list means no
    /// pattern was confident enough; it is not an error.
    pub fn analyze(&self, problem: &str) -> HiveResult<Analysis> {
        // Step 1: Callers must pre-validate; blank input is a contract breach.
        if problem.trim().is_empty() {
            return Err(QueryError::EmptyProblem.into());
        }

        // Step 2: Rule-based dimension tagging.
        let dimensions = tagger::tag(problem);
        debug!(?dimensions, "problem dimensions tagged");

        // Step 3: One provider call for the query vector.
        let query_vector = self.provider.embed(problem)?;

        // Step 4: Nearest-k search, k clamped to the corpus size.
        let k = self.config.top_k.min(self.index.len());
        let neighbors = self.index.query(&query_vector, k)?;
        debug!(candidates = neighbors.len(), k, "index query complete");

        // Step 5: Score and filter. Filtering only — relative order among
        // kept matches is the index's nearest-first order.
        let mut matches = Vec::with_capacity(neighbors.len());
        for neighbor in neighbors {
            let confidence = scoring::confidence_from_distance(neighbor.distance)?;
            if confidence.value() < self.config.min_confidence {
                debug!(
                    position = neighbor.position,
                    %confidence,
                    "candidate below confidence threshold, discarded"
                );
                continue;
            }
            // Positions come from the index's own enumeration, so the lookup
            // only misses if the index is corrupt.
            let Some(pattern) = self.index.pattern(neighbor.position) else {
                continue;
            };
            matches.push(PatternMatch {
                pattern: pattern.clone(),
                distance: neighbor.distance,
                confidence,
            });
        }

        info!(
            matches = matches.len(),
            dimensions = dimensions.len(),
            provider = self.provider.name(),
            "analysis complete"
        );

        Ok(Analysis {
            dimensions,
            matches,
        })
    }
}
