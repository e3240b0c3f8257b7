//! Flat nearest-neighbor index over the pattern corpus.
//!
//! Brute-force squared-Euclidean scan over the precomputed pattern vectors.
//! Ordering is fully deterministic: ascending distance, ties broken by corpus
//! insertion position. Read-only after construction, so one instance is
//! safely shared across concurrent queries.

use tracing::debug;

use hive_core::errors::{CorpusError, HiveError, HiveResult, QueryError};
use hive_core::models::Pattern;
use hive_core::traits::IEmbeddingProvider;

/// One nearest-neighbor result: distance plus corpus position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Squared Euclidean distance to the query vector.
    pub distance: f64,
    /// Position of the matched pattern in the corpus.
    pub position: usize,
}

/// Immutable corpus plus its vector index.
///
/// Invariant: `patterns.len() == vectors.len()`, positional mapping, every
/// vector has `dimensions` entries. Enforced at construction.
#[derive(Debug)]
pub struct PatternIndex {
    patterns: Vec<Pattern>,
    vectors: Vec<Vec<f32>>,
    dimensions: usize,
}

impl PatternIndex {
    /// Build an index from patterns and their precomputed vectors (same
    /// order, same count, uniform dimensionality).
    pub fn build(patterns: Vec<Pattern>, vectors: Vec<Vec<f32>>) -> Result<Self, CorpusError> {
        if patterns.is_empty() {
            return Err(CorpusError::EmptyCorpus);
        }
        if patterns.len() != vectors.len() {
            return Err(CorpusError::CountMismatch {
                patterns: patterns.len(),
                embeddings: vectors.len(),
            });
        }

        let dimensions = vectors[0].len();
        for (index, vector) in vectors.iter().enumerate() {
            if vector.len() != dimensions {
                return Err(CorpusError::RaggedEmbeddings {
                    index,
                    expected: dimensions,
                    actual: vector.len(),
                });
            }
        }

        debug!(
            patterns = patterns.len(),
            dims = dimensions,
            "pattern index built"
        );

        Ok(Self {
            patterns,
            vectors,
            dimensions,
        })
    }

    /// Build an index by embedding all pattern descriptions in one batch
    /// call against the provider.
    pub fn build_with_provider(
        patterns: Vec<Pattern>,
        provider: &dyn IEmbeddingProvider,
    ) -> HiveResult<Self> {
        if patterns.is_empty() {
            return Err(CorpusError::EmptyCorpus.into());
        }
        let descriptions: Vec<String> = patterns.iter().map(|p| p.description.clone()).collect();
        let vectors = provider.embed_batch(&descriptions)?;
        Self::build(patterns, vectors).map_err(HiveError::from)
    }

    /// Return up to `k` nearest patterns, ascending by squared Euclidean
    /// distance, ties in insertion order.
    pub fn query(&self, vector: &[f32], k: usize) -> Result<Vec<Neighbor>, QueryError> {
        if vector.len() != self.dimensions {
            return Err(QueryError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            });
        }

        let mut neighbors: Vec<Neighbor> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(position, stored)| Neighbor {
                distance: squared_l2(vector, stored),
                position,
            })
            .collect();

        // Stable sort keeps insertion order for equal distances.
        neighbors.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        neighbors.truncate(k.min(self.patterns.len()));
        Ok(neighbors)
    }

    /// Pattern at `position`, if in range.
    pub fn pattern(&self, position: usize) -> Option<&Pattern> {
        self.patterns.get(position)
    }

    /// The full corpus, in insertion order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Stored vector at `position`, if in range.
    pub fn vector(&self, position: usize) -> Option<&[f32]> {
        self.vectors.get(position).map(Vec::as_slice)
    }

    /// Number of patterns in the corpus. Never zero.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false; kept for idiomatic pairing with `len`.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Vector dimensionality the index was built with.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// Squared Euclidean distance, accumulated in f64.
fn squared_l2(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = (*x as f64) - (*y as f64);
            d * d
        })
        .sum()
}
