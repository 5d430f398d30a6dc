//! Classifier output and aggregated result types

use serde::{Deserialize, Serialize};
use std::fmt;

/// One (label, score) pair returned by the classifier
///
/// Label vocabulary belongs to the external model. Scores are in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

impl Prediction {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Coarse heartbeat category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Normal,
    Artifact,
    Murmur,
}

impl Category {
    /// Canonical display order
    pub const ALL: [Category; 3] = [Category::Normal, Category::Artifact, Category::Murmur];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::Artifact => "artifact",
            Category::Murmur => "murmur",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category score sums for one classification
///
/// Always holds exactly the three categories, each starting at 0.0.
/// Serializes as `{"normal": .., "artifact": .., "murmur": ..}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedResult {
    pub normal: f64,
    pub artifact: f64,
    pub murmur: f64,
}

impl AggregatedResult {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Normal => self.normal,
            Category::Artifact => self.artifact,
            Category::Murmur => self.murmur,
        }
    }

    pub(crate) fn add(&mut self, category: Category, score: f64) {
        match category {
            Category::Normal => self.normal += score,
            Category::Artifact => self.artifact += score,
            Category::Murmur => self.murmur += score,
        }
    }

    /// (category, score) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    pub fn total(&self) -> f64 {
        self.normal + self.artifact + self.murmur
    }

    /// Results box text: `"<label>: <score:.2>"`, one line per category
    pub fn to_text(&self) -> String {
        self.iter()
            .map(|(category, score)| format!("{}: {:.2}", category, score))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let result = AggregatedResult::default();
        for (_, score) in result.iter() {
            assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn test_iter_canonical_order() {
        let result = AggregatedResult {
            normal: 0.1,
            artifact: 0.2,
            murmur: 0.3,
        };
        let order: Vec<_> = result.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(order, vec!["normal", "artifact", "murmur"]);
    }

    #[test]
    fn test_to_text_two_decimals() {
        let result = AggregatedResult {
            normal: 0.9,
            artifact: 0.0,
            murmur: 0.004,
        };
        assert_eq!(result.to_text(), "normal: 0.90\nartifact: 0.00\nmurmur: 0.00");
    }

    #[test]
    fn test_serializes_with_three_keys() {
        let result = AggregatedResult {
            normal: 0.5,
            artifact: 0.25,
            murmur: 0.25,
        };
        let json = serde_json::to_value(result).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(json["normal"], 0.5);
        assert_eq!(json["artifact"], 0.25);
        assert_eq!(json["murmur"], 0.25);
    }
}
