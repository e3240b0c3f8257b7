//! Provider construction and the built-in provider implementations.

mod hashed_tfidf;

pub use hashed_tfidf::HashedTfIdf;

use hive_core::config::EmbeddingConfig;
use hive_core::traits::IEmbeddingProvider;
use tracing::{info, warn};

/// Build the provider named in the config.
///
/// Unknown names fall back to the hashed TF-IDF provider so the engine can
/// always start; the substitution is logged.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    match config.provider.as_str() {
        "hashed-tfidf" => {
            info!(dims = config.dimensions, "using hashed TF-IDF provider");
            Box::new(HashedTfIdf::new(config.dimensions))
        }
        other => {
            warn!(
                requested = other,
                "unknown embedding provider, falling back to hashed TF-IDF"
            );
            Box::new(HashedTfIdf::new(config.dimensions))
        }
    }
}
