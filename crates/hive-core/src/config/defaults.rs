//! Default configuration values, named so tests and docs can reference them.

/// Default embedding provider name.
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "hashed-tfidf";

/// Default embedding dimensionality.
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;

/// Default number of nearest neighbors requested per query
/// (clamped to the corpus size at query time).
pub const DEFAULT_TOP_K: usize = 5;

/// Default confidence threshold below which matches are discarded.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.15;
