//! Explanation builder: reasoning traces and the decomposition graph.
//!
//! Pure templating over the engine's output; no additional computation
//! happens here, so explanations are always consistent with the ranking.

mod graph;
mod trace;

pub use graph::{ExplanationGraph, ExplanationNode, NodeKind};
pub use trace::ReasoningTrace;

use hive_core::models::Analysis;

/// Explanation of one analysis: per-match traces plus the decomposition
/// graph. Transient, rebuilt per query.
#[derive(Debug)]
pub struct Explanation {
    /// One trace per surfaced match, in the engine's output order.
    pub traces: Vec<ReasoningTrace>,
    /// Problem → matches → solution steps.
    pub graph: ExplanationGraph,
}

/// Build the explanation for an analysis.
pub fn build(problem: &str, analysis: &Analysis) -> Explanation {
    let traces = analysis
        .matches
        .iter()
        .map(|m| trace::trace_for(m, &analysis.dimensions))
        .collect();
    let graph = ExplanationGraph::build(problem, &analysis.matches);
    Explanation { traces, graph }
}
