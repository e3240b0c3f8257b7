//! # hive-retrieval
//!
//! The retrieval-and-ranking pipeline: problem text → dimension tags →
//! query embedding → nearest-neighbor search → confidence filter → ranked
//! matches → reasoning traces + decomposition graph.
//!
//! All components are stateless or borrow immutable collaborators, so
//! concurrent `analyze` calls against one shared [`PatternIndex`] and
//! provider are safe without locking.

pub mod engine;
pub mod explain;
pub mod scoring;
pub mod tagger;

pub use engine::AnalysisEngine;
pub use explain::{Explanation, ExplanationGraph, ReasoningTrace};

use hive_core::config::RetrievalConfig;
use hive_core::errors::HiveResult;
use hive_core::models::Analysis;
use hive_core::traits::IEmbeddingProvider;
use hive_corpus::PatternIndex;

/// Everything the core hands to a presentation layer for one query.
#[derive(Debug)]
pub struct AnalysisReport {
    /// Dimension set and ranked matches.
    pub analysis: Analysis,
    /// Reasoning traces and the decomposition graph.
    pub explanation: Explanation,
}

/// Run the full pipeline for one problem statement.
///
/// Convenience facade over [`AnalysisEngine::analyze`] followed by
/// [`explain::build`].
pub fn analyze_problem(
    problem: &str,
    index: &PatternIndex,
    provider: &dyn IEmbeddingProvider,
    config: &RetrievalConfig,
) -> HiveResult<AnalysisReport> {
    let engine = AnalysisEngine::new(index, provider, config.clone());
    let analysis = engine.analyze(problem)?;
    let explanation = explain::build(problem, &analysis);
    Ok(AnalysisReport {
        analysis,
        explanation,
    })
}
