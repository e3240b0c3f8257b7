//! Property tests for the pattern index.

use proptest::prelude::*;

use hive_core::models::Pattern;
use hive_corpus::PatternIndex;

fn pattern(position: usize) -> Pattern {
    Pattern {
        problem_type: format!("P{position}"),
        description: format!("pattern {position}"),
        used_in: Vec::new(),
        solution_steps: vec!["step".to_string()],
    }
}

fn build_index(vectors: Vec<Vec<f32>>) -> PatternIndex {
    let patterns = (0..vectors.len()).map(pattern).collect();
    PatternIndex::build(patterns, vectors).expect("non-empty uniform corpus")
}

/// Corpora of 1..30 vectors with a fixed dimensionality of 4.
fn corpus_strategy() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(-100.0f32..100.0, 4), 1..30)
}

proptest! {
    #[test]
    fn distances_are_nondecreasing(
        vectors in corpus_strategy(),
        query in prop::collection::vec(-100.0f32..100.0, 4),
        k in 0usize..40,
    ) {
        let index = build_index(vectors);
        let neighbors = index.query(&query, k).unwrap();
        for pair in neighbors.windows(2) {
            prop_assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn result_length_is_min_of_k_and_corpus(
        vectors in corpus_strategy(),
        query in prop::collection::vec(-100.0f32..100.0, 4),
        k in 0usize..40,
    ) {
        let len = vectors.len();
        let index = build_index(vectors);
        let neighbors = index.query(&query, k).unwrap();
        prop_assert_eq!(neighbors.len(), k.min(len));
    }

    #[test]
    fn distances_are_nonnegative_and_finite(
        vectors in corpus_strategy(),
        query in prop::collection::vec(-100.0f32..100.0, 4),
    ) {
        let index = build_index(vectors.clone());
        for n in index.query(&query, vectors.len()).unwrap() {
            prop_assert!(n.distance >= 0.0);
            prop_assert!(n.distance.is_finite());
        }
    }

    #[test]
    fn own_vector_is_top_result(
        vectors in corpus_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let position = pick.index(vectors.len());
        let index = build_index(vectors.clone());
        let own = index.vector(position).unwrap().to_vec();
        let top = index.query(&own, 1).unwrap()[0];
        prop_assert_eq!(top.distance, 0.0);
        // An earlier duplicate vector may win the tie, but never a farther one.
        prop_assert!(top.position <= position);
    }
}
