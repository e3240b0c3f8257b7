//! Decomposition graph: problem → matched patterns → solution steps.
//!
//! Node identity is the petgraph `NodeIndex`; the display label is separate
//! data. Two matches (or two steps) may carry identical labels without
//! merging into one node.

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use hive_core::constants::PROBLEM_LABEL_WIDTH;
use hive_core::models::PatternMatch;

/// Role of a node in the decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Problem,
    Match,
    Step,
}

/// Node payload: role plus display label.
#[derive(Debug, Clone)]
pub struct ExplanationNode {
    pub kind: NodeKind,
    pub label: String,
}

/// Directed decomposition graph with a single problem root.
#[derive(Debug)]
pub struct ExplanationGraph {
    graph: DiGraph<ExplanationNode, ()>,
    root: NodeIndex,
    match_nodes: Vec<NodeIndex>,
}

impl ExplanationGraph {
    /// Build the graph for one query: a root labeled with the truncated
    /// problem text, one child per match, one grandchild per solution step.
    pub fn build(problem: &str, matches: &[PatternMatch]) -> Self {
        let mut graph = DiGraph::new();

        let root = graph.add_node(ExplanationNode {
            kind: NodeKind::Problem,
            label: root_label(problem),
        });

        let mut match_nodes = Vec::with_capacity(matches.len());
        for m in matches {
            let match_node = graph.add_node(ExplanationNode {
                kind: NodeKind::Match,
                label: match_label(m),
            });
            graph.add_edge(root, match_node, ());
            match_nodes.push(match_node);

            for step in &m.pattern.solution_steps {
                let step_node = graph.add_node(ExplanationNode {
                    kind: NodeKind::Step,
                    label: step.clone(),
                });
                graph.add_edge(match_node, step_node, ());
            }
        }

        Self {
            graph,
            root,
            match_nodes,
        }
    }

    /// The single problem root.
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// Match nodes in the engine's output order.
    pub fn match_nodes(&self) -> &[NodeIndex] {
        &self.match_nodes
    }

    /// Node payload, if the index is valid for this graph.
    pub fn node(&self, index: NodeIndex) -> Option<&ExplanationNode> {
        self.graph.node_weight(index)
    }

    /// Number of step leaves under one match node.
    pub fn step_count(&self, match_node: NodeIndex) -> usize {
        self.graph
            .neighbors_directed(match_node, Direction::Outgoing)
            .count()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The underlying petgraph structure, for callers that traverse further.
    pub fn graph(&self) -> &DiGraph<ExplanationNode, ()> {
        &self.graph
    }

    /// Render as Graphviz DOT for external viewers.
    pub fn to_dot(&self) -> String {
        let labeled = self.graph.map(|_, node| node.label.clone(), |_, _| "");
        format!("{}", Dot::with_config(&labeled, &[Config::EdgeNoLabel]))
    }
}

/// Root label: `"Problem: "` plus the first 50 characters of the problem
/// text, ellipsis appended unconditionally so the rule stays fixed-width.
fn root_label(problem: &str) -> String {
    let truncated: String = problem.chars().take(PROBLEM_LABEL_WIDTH).collect();
    format!("Problem: {truncated}...")
}

/// Match label: pattern type plus two-decimal confidence.
fn match_label(m: &PatternMatch) -> String {
    format!("{} ({})", m.pattern.problem_type, m.confidence)
}
