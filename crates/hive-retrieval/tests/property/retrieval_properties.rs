//! Property tests for scoring and tagging.

use proptest::prelude::*;

use hive_core::dimension::Dimension;
use hive_retrieval::scoring::confidence_from_distance;
use hive_retrieval::tagger;

proptest! {
    #[test]
    fn score_is_monotonically_decreasing(d1 in 0.0f64..1e6, delta in 0.0f64..1e6) {
        let d2 = d1 + delta;
        let c1 = confidence_from_distance(d1).unwrap().value();
        let c2 = confidence_from_distance(d2).unwrap().value();
        prop_assert!(c1 >= c2);
    }

    #[test]
    fn score_stays_in_unit_interval(d in 0.0f64..1e12) {
        let c = confidence_from_distance(d).unwrap().value();
        prop_assert!(c >= 0.0);
        prop_assert!(c <= 1.0);
    }

    #[test]
    fn score_is_positive_below_moderate_distances(d in 0.0f64..100.0) {
        // Up to distance 100 the rounded score is still at least 0.01.
        let c = confidence_from_distance(d).unwrap().value();
        prop_assert!(c > 0.0);
    }

    #[test]
    fn negative_distances_always_error(d in -1e6f64..-f64::MIN_POSITIVE) {
        prop_assert!(confidence_from_distance(d).is_err());
    }

    #[test]
    fn tagged_set_is_never_empty(problem in ".{0,200}") {
        prop_assert!(!tagger::tag(&problem).is_empty());
    }

    #[test]
    fn general_problem_never_coexists_with_a_keyword_dimension(problem in ".{0,200}") {
        let dims = tagger::tag(&problem);
        if dims.contains(&Dimension::GeneralProblem) {
            prop_assert_eq!(dims.len(), 1);
        }
    }

    #[test]
    fn tagging_is_case_insensitive(problem in "[a-zA-Z ]{0,80}") {
        prop_assert_eq!(tagger::tag(&problem), tagger::tag(&problem.to_uppercase()));
    }
}
