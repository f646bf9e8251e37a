//! Advisory semantic hints via string similarity.
//!
//! The advisor is an injected capability: its presence is a composition
//! decision, not a runtime availability probe. Hints annotate proposals
//! for operator display only and never gate acceptance.

use rapidfuzz::distance::jaro_winkler;

use tabula_model::SemanticHint;

/// A single-method scoring interface for advisory column-label hints.
///
/// Implementations must be total: any internal failure degrades to
/// `None` rather than propagating an error.
pub trait SemanticAdvisor {
    /// Suggest a semantic label for a column name, if one fits.
    fn hint(&self, column_name: &str) -> Option<SemanticHint>;
}

/// Controlled vocabulary of semantic labels the advisor scores against.
const SEMANTIC_LABELS: &[&str] = &[
    "revenue",
    "sales amount",
    "academic score",
    "quantity",
    "count",
    "date",
    "timestamp",
    "person name",
    "product name",
    "category",
    "geographic region",
    "department",
];

/// Minimum similarity for a label suggestion to be surfaced at all.
const MIN_HINT_CONFIDENCE: f64 = 0.5;

/// Jaro-Winkler advisor over the controlled label vocabulary.
#[derive(Debug, Clone, Default)]
pub struct FuzzyAdvisor;

impl FuzzyAdvisor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SemanticAdvisor for FuzzyAdvisor {
    fn hint(&self, column_name: &str) -> Option<SemanticHint> {
        let normalized = normalize(column_name);
        if normalized.is_empty() {
            return None;
        }

        let mut best: Option<(&str, f64)> = None;
        for label in SEMANTIC_LABELS {
            let similarity = jaro_winkler::similarity(normalized.chars(), label.chars());
            if best.is_none_or(|(_, score)| similarity > score) {
                best = Some((label, similarity));
            }
        }

        best.filter(|(_, score)| *score >= MIN_HINT_CONFIDENCE)
            .map(|(label, score)| SemanticHint {
                label: label.to_string(),
                confidence: (score * 100.0).round() / 100.0,
            })
    }
}

/// Normalize a column name for comparison: lowercase, separators to
/// spaces, collapsed whitespace.
fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(['_', '-', '.'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_names_get_hints() {
        let advisor = FuzzyAdvisor::new();
        let hint = advisor.hint("Revenue_Total").expect("hint expected");
        assert!(hint.confidence >= 0.5 && hint.confidence <= 1.0);
    }

    #[test]
    fn empty_name_degrades_to_none() {
        let advisor = FuzzyAdvisor::new();
        assert!(advisor.hint("   ").is_none());
    }

    #[test]
    fn exact_vocabulary_match_is_confident() {
        let advisor = FuzzyAdvisor::new();
        let hint = advisor.hint("department").unwrap();
        assert_eq!(hint.label, "department");
        assert_eq!(hint.confidence, 1.0);
    }
}
