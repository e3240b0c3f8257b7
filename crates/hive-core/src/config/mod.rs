//! Engine configuration, loadable from TOML with per-field defaults.

pub mod defaults;

mod embedding_config;
mod retrieval_config;

pub use embedding_config::EmbeddingConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Hive engine.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HiveConfig {
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
}

impl HiveConfig {
    /// Parse a TOML document, filling unspecified fields with defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
