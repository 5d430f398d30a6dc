//! Score aggregation
//!
//! Reduces the model's fine-grained labels to the three coarse categories
//! by summing scores.
//!
//! **Routing rule** (first match wins, checked per label in this order):
//! 1. contains `"artifact"` → artifact
//! 2. contains `"murmur"` → murmur
//! 3. contains `"extra"` or `"Normal"` → normal
//! 4. anything else is dropped
//!
//! Matching is case-sensitive, so a lowercase `"normal"` label is dropped.

use crate::models::{AggregatedResult, Category, Prediction};

/// Route a single label to its category, or `None` if it is dropped
pub fn categorize(label: &str) -> Option<Category> {
    if label.contains("artifact") {
        Some(Category::Artifact)
    } else if label.contains("murmur") {
        Some(Category::Murmur)
    } else if label.contains("extra") || label.contains("Normal") {
        Some(Category::Normal)
    } else {
        None
    }
}

/// Sum prediction scores per category
pub fn aggregate(predictions: &[Prediction]) -> AggregatedResult {
    aggregate_with_report(predictions).0
}

/// Same as [`aggregate`], also returning how many predictions were dropped
pub fn aggregate_with_report(predictions: &[Prediction]) -> (AggregatedResult, usize) {
    let mut result = AggregatedResult::default();
    let mut dropped = 0;

    for prediction in predictions {
        match categorize(&prediction.label) {
            Some(category) => result.add(category, prediction.score),
            None => {
                tracing::debug!(
                    label = %prediction.label,
                    score = prediction.score,
                    "Dropping prediction with unmapped label"
                );
                dropped += 1;
            }
        }
    }

    (result, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preds(pairs: &[(&str, f64)]) -> Vec<Prediction> {
        pairs.iter().map(|(l, s)| Prediction::new(*l, *s)).collect()
    }

    #[test]
    fn test_empty_predictions_yield_zeros() {
        let result = aggregate(&[]);
        assert_eq!(
            result,
            AggregatedResult {
                normal: 0.0,
                artifact: 0.0,
                murmur: 0.0
            }
        );
    }

    #[test]
    fn test_mixed_scenario() {
        let result = aggregate(&preds(&[
            ("artifact_x", 0.7),
            ("murmur_y", 0.2),
            ("Normal", 0.1),
        ]));
        assert_eq!(result.normal, 0.1);
        assert_eq!(result.artifact, 0.7);
        assert_eq!(result.murmur, 0.2);
    }

    #[test]
    fn test_extrastole_routes_to_normal() {
        let result = aggregate(&preds(&[("extrastole", 0.9)]));
        assert_eq!(result.normal, 0.9);
        assert_eq!(result.artifact, 0.0);
        assert_eq!(result.murmur, 0.0);
        assert_eq!(result.to_text(), "normal: 0.90\nartifact: 0.00\nmurmur: 0.00");
    }

    #[test]
    fn test_exact_artifact_label() {
        let result = aggregate(&preds(&[("artifact", 0.42)]));
        assert_eq!(result.artifact, 0.42);
        assert_eq!(result.normal, 0.0);
        assert_eq!(result.murmur, 0.0);
    }

    #[test]
    fn test_artifact_wins_over_murmur() {
        assert_eq!(categorize("murmur_artifact"), Some(Category::Artifact));
        assert_eq!(categorize("artifact_murmur"), Some(Category::Artifact));
    }

    #[test]
    fn test_murmur_wins_over_normal_predicates() {
        assert_eq!(categorize("extra_murmur"), Some(Category::Murmur));
        assert_eq!(categorize("Normal murmur"), Some(Category::Murmur));
    }

    #[test]
    fn test_normal_predicates() {
        assert_eq!(categorize("Normal"), Some(Category::Normal));
        assert_eq!(categorize("extrahls"), Some(Category::Normal));
        assert_eq!(categorize("extra_systole"), Some(Category::Normal));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(categorize("normal"), None);
        assert_eq!(categorize("Artifact"), None);
        assert_eq!(categorize("MURMUR"), None);
        assert_eq!(categorize("Extrastole"), None);
    }

    #[test]
    fn test_unmatched_labels_are_dropped() {
        let (result, dropped) =
            aggregate_with_report(&preds(&[("unknown", 0.5), ("normal", 0.3), ("murmur", 0.2)]));
        assert_eq!(dropped, 2);
        assert_eq!(result.normal, 0.0);
        assert_eq!(result.artifact, 0.0);
        assert_eq!(result.murmur, 0.2);
    }

    #[test]
    fn test_scores_accumulate_within_category() {
        let result = aggregate(&preds(&[
            ("extrastole", 0.25),
            ("Normal", 0.25),
            ("extrahls", 0.25),
        ]));
        assert!((result.normal - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_total_never_exceeds_input_sum() {
        let input = preds(&[
            ("artifact", 0.1),
            ("murmur", 0.2),
            ("Normal", 0.3),
            ("other", 0.4),
        ]);
        let input_sum: f64 = input.iter().map(|p| p.score).sum();
        let result = aggregate(&input);
        assert!(result.total() <= input_sum + 1e-12);
        for (_, score) in result.iter() {
            assert!(score >= 0.0);
        }
    }
}
