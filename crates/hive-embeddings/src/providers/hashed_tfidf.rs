//! Hashed TF-IDF embedding provider.
//!
//! Maps text to fixed-dimension dense vectors by hashing terms into buckets
//! and weighting by damped term frequency. Deterministic and always
//! available; not as semantically rich as a neural model, but documents
//! sharing vocabulary land close together under Euclidean distance.

use std::collections::HashMap;

use hive_core::errors::HiveResult;
use hive_core::traits::IEmbeddingProvider;

/// Dependency-free embedding provider backed by term hashing.
pub struct HashedTfIdf {
    dimensions: usize,
}

impl HashedTfIdf {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    /// Split into lowercase alphanumeric terms, dropping one-character
    /// fragments (punctuation debris, single letters).
    fn terms(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|t| t.len() >= 2)
            .map(str::to_lowercase)
            .collect()
    }

    /// Build the L2-normalized vector for one text.
    ///
    /// Empty or all-punctuation text yields the zero vector.
    fn vector(&self, text: &str) -> Vec<f32> {
        let terms = Self::terms(text);
        let mut counts: HashMap<String, u32> = HashMap::new();
        for term in terms {
            *counts.entry(term).or_default() += 1;
        }

        let mut vec = vec![0.0f32; self.dimensions];
        for (term, count) in &counts {
            // Sqrt-damped term frequency, with longer terms weighted up as a
            // cheap inverse-document-frequency proxy (short terms skew toward
            // stopwords).
            let tf = (*count as f32).sqrt();
            let idf = 1.0 + (term.len() as f32).ln();
            vec[Self::bucket(term, self.dimensions)] += tf * idf;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for HashedTfIdf {
    fn embed(&self, text: &str) -> HiveResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> HiveResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-tfidf"
    }
}
