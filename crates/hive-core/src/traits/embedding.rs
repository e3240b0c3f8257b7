use crate::errors::HiveResult;

/// Text-embedding provider.
///
/// Implementations must produce vectors of a single fixed dimensionality for
/// the process lifetime. `Send + Sync` so one shared instance can serve
/// concurrent queries; thread safety of the underlying model is the
/// implementation's responsibility.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> HiveResult<Vec<f32>>;

    /// Embed a batch of texts, one vector per input, in order.
    fn embed_batch(&self, texts: &[String]) -> HiveResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
