//! Shared fixtures for Hive tests: corpus JSON loaders and a deterministic
//! stub embedding provider.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use hive_core::errors::{HiveResult, QueryError};
use hive_core::traits::IEmbeddingProvider;

/// Root directory of the fixture data shipped with this crate.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as a raw JSON string.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Deterministic embedding provider keyed by exact text.
///
/// Returns preset vectors for known texts, so tests control distances (and
/// therefore confidences) precisely. Unknown text is a provider failure,
/// which keeps typos in test inputs loud.
pub struct StubEmbedder {
    dimensions: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl StubEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            vectors: HashMap::new(),
        }
    }

    /// Register the vector returned for an exact text.
    pub fn with_vector(mut self, text: &str, vector: Vec<f32>) -> Self {
        assert_eq!(
            vector.len(),
            self.dimensions,
            "stub vector for {text:?} has wrong dimensionality"
        );
        self.vectors.insert(text.to_string(), vector);
        self
    }
}

impl IEmbeddingProvider for StubEmbedder {
    fn embed(&self, text: &str) -> HiveResult<Vec<f32>> {
        self.vectors.get(text).cloned().ok_or_else(|| {
            QueryError::ProviderFailed {
                provider: "stub".to_string(),
                reason: format!("no stub vector registered for {text:?}"),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> HiveResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "stub"
    }
}
