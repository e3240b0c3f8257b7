//! End-to-end pipeline tests over the fixture corpora.

use hive_core::config::RetrievalConfig;
use hive_core::dimension::Dimension;
use hive_corpus::{patterns_from_json, PatternIndex};
use hive_embeddings::HashedTfIdf;
use hive_retrieval::{analyze_problem, explain::NodeKind};
use test_fixtures::{load_fixture_text, StubEmbedder};

const QUERY: &str = "traffic congestion due to resource allocation";

fn single_pattern_index_with_stub() -> (PatternIndex, StubEmbedder) {
    let patterns =
        patterns_from_json(&load_fixture_text("corpus/single_load_balancing.json")).unwrap();
    let stub = StubEmbedder::new(2)
        .with_vector("traffic distribution across servers", vec![1.0, 0.0])
        .with_vector(QUERY, vec![0.0, 1.0]);
    let index = PatternIndex::build_with_provider(patterns, &stub).unwrap();
    (index, stub)
}

#[test]
fn load_balancing_scenario_with_stub_vectors() {
    let (index, stub) = single_pattern_index_with_stub();
    let report = analyze_problem(QUERY, &index, &stub, &RetrievalConfig::default()).unwrap();

    // Dimensions include both keyword hits.
    assert!(report.analysis.dimensions.contains(&Dimension::Optimization));
    assert!(report
        .analysis
        .dimensions
        .contains(&Dimension::ResourceAllocation));

    // Exactly one match with bounded confidence: the stub vectors are unit
    // and orthogonal, so the squared distance is 2 and the score 0.33.
    assert_eq!(report.analysis.matches.len(), 1);
    let m = &report.analysis.matches[0];
    assert_eq!(m.pattern.problem_type, "Load Balancing");
    assert_eq!(m.confidence.value(), 0.33);
    assert!(m.confidence.value() > 0.15 && m.confidence.value() < 1.0);

    // One trace per match, three lines each.
    assert_eq!(report.explanation.traces.len(), 1);
    let lines = report.explanation.traces[0].lines();
    assert!(lines[1].contains("Resource Allocation"));
    assert!(lines[1].contains("Optimization"));

    // Graph: one root, one match child, two step leaves.
    let graph = &report.explanation.graph;
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.node(graph.root()).unwrap().kind, NodeKind::Problem);
    assert_eq!(graph.match_nodes().len(), 1);
    assert_eq!(graph.step_count(graph.match_nodes()[0]), 2);
    assert_eq!(
        graph.node(graph.match_nodes()[0]).unwrap().label,
        "Load Balancing (0.33)"
    );
}

#[test]
fn load_balancing_scenario_with_hashed_tfidf() {
    let patterns =
        patterns_from_json(&load_fixture_text("corpus/single_load_balancing.json")).unwrap();
    let provider = HashedTfIdf::new(384);
    let index = PatternIndex::build_with_provider(patterns, &provider).unwrap();

    let report = analyze_problem(QUERY, &index, &provider, &RetrievalConfig::default()).unwrap();

    assert_eq!(report.analysis.matches.len(), 1);
    let m = &report.analysis.matches[0];
    assert_eq!(m.pattern.problem_type, "Load Balancing");
    // Shared vocabulary ("traffic") keeps the match well inside the band.
    assert!(m.confidence.value() > 0.15 && m.confidence.value() < 1.0);
}

#[test]
fn unreachable_threshold_yields_no_confident_match() {
    let (index, stub) = single_pattern_index_with_stub();
    let config = RetrievalConfig {
        min_confidence: 1.01,
        ..RetrievalConfig::default()
    };
    let report = analyze_problem(QUERY, &index, &stub, &config).unwrap();

    // No score can exceed 1.0, so everything is filtered; this is an empty
    // result, not an error.
    assert!(report.analysis.matches.is_empty());
    assert!(report.explanation.traces.is_empty());
    assert_eq!(report.explanation.graph.node_count(), 1);
    // The dimension set still explains what was detected.
    assert!(!report.analysis.dimensions.is_empty());
}

#[test]
fn fixture_corpus_ranks_multiple_patterns_deterministically() {
    let patterns = patterns_from_json(&load_fixture_text("corpus/patterns.json")).unwrap();
    let provider = HashedTfIdf::new(384);
    let index = PatternIndex::build_with_provider(patterns, &provider).unwrap();

    let report = analyze_problem(
        "traffic spikes overload the servers at peak time",
        &index,
        &provider,
        &RetrievalConfig::default(),
    )
    .unwrap();

    // Deterministic pipeline: the same query ranks identically every run.
    let again = analyze_problem(
        "traffic spikes overload the servers at peak time",
        &index,
        &provider,
        &RetrievalConfig::default(),
    )
    .unwrap();
    let types = |r: &hive_retrieval::AnalysisReport| -> Vec<String> {
        r.analysis
            .matches
            .iter()
            .map(|m| m.pattern.problem_type.clone())
            .collect()
    };
    assert_eq!(types(&report), types(&again));

    // Distances ascend, confidences descend.
    for pair in report.analysis.matches.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
        assert!(pair[0].confidence.value() >= pair[1].confidence.value());
    }
}
