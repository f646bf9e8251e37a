//! Mapping proposal engine.
//!
//! Scores every (column, role) pair from independent, capped evidence
//! layers and yields threshold-gated proposals per role. The engine is
//! a total function: an empty proposal set is a normal outcome.

use std::collections::BTreeSet;

use tracing::debug;

use tabula_model::{
    ColumnSignal, Evidence, MappingProposal, ProposalSet, Role,
};

use crate::advisor::SemanticAdvisor;
use crate::keywords::name_matches;

/// Fixed bonus for a keyword hit in the column name.
const NAME_KEYWORD_BONUS: f64 = 0.4;
/// Type-match bonus for the strongly typed roles (measure, time).
const TYPE_MATCH_BONUS_STRONG: f64 = 0.4;
/// Type-match bonus for the categorical roles (entity, dimension).
const TYPE_MATCH_BONUS_WEAK: f64 = 0.3;
/// Bonus per triggered numeric-behavior heuristic (measure only).
const BEHAVIOR_BONUS: f64 = 0.2;
/// Unique-count floor above which a numeric column looks measure-like.
const BEHAVIOR_UNIQUE_FLOOR: usize = 3;

/// Score one column against one role.
///
/// Returns the capped, two-decimal confidence together with the set of
/// evidence tags for the triggered layers. Gating against the role
/// threshold is the caller's concern.
#[must_use]
pub fn score_role(signal: &ColumnSignal, role: Role) -> (f64, BTreeSet<Evidence>) {
    let mut score = 0.0;
    let mut evidence = BTreeSet::new();

    if name_matches(&signal.name, role) {
        score += NAME_KEYWORD_BONUS;
        evidence.insert(Evidence::NameKeyword);
    }

    if signal.inferred_type == role.expected_type() {
        score += match role {
            Role::Measure | Role::Time => TYPE_MATCH_BONUS_STRONG,
            Role::Entity | Role::Dimension => TYPE_MATCH_BONUS_WEAK,
        };
        evidence.insert(Evidence::TypeMatch);
    }

    if role == Role::Measure {
        if let Some(numeric) = &signal.numeric {
            let mut behavior = 0.0;
            if numeric.unique_count > BEHAVIOR_UNIQUE_FLOOR {
                behavior += BEHAVIOR_BONUS;
            }
            if numeric.max > numeric.mean {
                behavior += BEHAVIOR_BONUS;
            }
            if behavior > 0.0 {
                score += behavior;
                evidence.insert(Evidence::NumericBehavior);
            }
        }
    }

    (round2(score.min(1.0)), evidence)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Engine that turns extracted signals into role proposals.
///
/// An advisor can be attached to annotate proposals with display-only
/// semantic hints; its absence changes nothing about gating.
#[derive(Default)]
pub struct ProposalEngine {
    advisor: Option<Box<dyn SemanticAdvisor>>,
}

impl ProposalEngine {
    #[must_use]
    pub fn new() -> Self {
        Self { advisor: None }
    }

    /// Attach an advisory hint source.
    #[must_use]
    pub fn with_advisor(mut self, advisor: Box<dyn SemanticAdvisor>) -> Self {
        self.advisor = Some(advisor);
        self
    }

    /// Propose role mappings for the given column signals.
    ///
    /// Measure and dimension collect every qualifying column in
    /// first-seen order. Entity and time select the highest-scoring
    /// qualifying column, ties broken by first-seen order; the selected
    /// column is then excluded from dimension candidacy so the operator
    /// is never asked about the same column twice in categorical roles.
    #[must_use]
    pub fn propose(&self, signals: &[ColumnSignal]) -> ProposalSet {
        let mut set = ProposalSet {
            measures: self.collect_plural(signals, Role::Measure, &[]),
            entity: self.select_best(signals, Role::Entity),
            time: self.select_best(signals, Role::Time),
            ..ProposalSet::default()
        };

        let claimed: Vec<&str> = set
            .entity
            .iter()
            .chain(set.time.iter())
            .map(|p| p.source_column.as_str())
            .collect();
        set.dimensions = self.collect_plural(signals, Role::Dimension, &claimed);

        debug!(
            measures = set.measures.len(),
            entity = set.entity.is_some(),
            time = set.time.is_some(),
            dimensions = set.dimensions.len(),
            "built proposal set"
        );
        set
    }

    fn collect_plural(
        &self,
        signals: &[ColumnSignal],
        role: Role,
        excluded: &[&str],
    ) -> Vec<MappingProposal> {
        signals
            .iter()
            .filter(|s| !excluded.contains(&s.name.as_str()))
            .filter_map(|signal| self.qualify(signal, role))
            .collect()
    }

    fn select_best(&self, signals: &[ColumnSignal], role: Role) -> Option<MappingProposal> {
        let mut best: Option<MappingProposal> = None;
        for signal in signals {
            let Some(candidate) = self.qualify(signal, role) else {
                continue;
            };
            // strict comparison keeps the first-seen column on ties
            if best
                .as_ref()
                .is_none_or(|current| candidate.confidence > current.confidence)
            {
                best = Some(candidate);
            }
        }
        best
    }

    fn qualify(&self, signal: &ColumnSignal, role: Role) -> Option<MappingProposal> {
        let (confidence, evidence) = score_role(signal, role);
        if confidence < role.threshold() {
            return None;
        }
        Some(MappingProposal {
            role,
            source_column: signal.name.clone(),
            confidence,
            evidence,
            hint: self
                .advisor
                .as_ref()
                .and_then(|advisor| advisor.hint(&signal.name)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_model::{CategoricalSignals, InferredType, NumericSignals};

    fn numeric_signal(name: &str, unique_count: usize, max: f64, mean: f64) -> ColumnSignal {
        ColumnSignal {
            name: name.to_string(),
            inferred_type: InferredType::Numeric,
            missing_count: 0,
            numeric: Some(NumericSignals {
                min: 0.0,
                max,
                mean,
                integer_like: true,
                unique_count,
            }),
            categorical: None,
        }
    }

    fn categorical_signal(name: &str, unique_count: usize) -> ColumnSignal {
        ColumnSignal {
            name: name.to_string(),
            inferred_type: InferredType::Categorical,
            missing_count: 0,
            numeric: None,
            categorical: Some(CategoricalSignals {
                unique_count,
                sample_values: Vec::new(),
            }),
        }
    }

    #[test]
    fn measure_score_caps_at_one() {
        let signal = numeric_signal("total_score", 40, 95.0, 52.0);
        let (score, evidence) = score_role(&signal, Role::Measure);
        assert_eq!(score, 1.0);
        assert_eq!(evidence.len(), 3);
    }

    #[test]
    fn type_match_alone_does_not_clear_measure_threshold() {
        let signal = numeric_signal("x", 2, 1.0, 1.0);
        let engine = ProposalEngine::new();
        let set = engine.propose(std::slice::from_ref(&signal));
        assert!(set.measures.is_empty());
    }

    #[test]
    fn best_of_n_entity_selection_prefers_higher_score() {
        // "region" is categorical with no entity keyword (0.3 < 0.4),
        // "customer" and "customer_name" both qualify; equal scores keep
        // the first-seen column.
        let signals = vec![
            categorical_signal("region", 4),
            categorical_signal("customer", 10),
            categorical_signal("customer_name", 10),
        ];
        let engine = ProposalEngine::new();
        let set = engine.propose(&signals);
        let entity = set.entity.expect("entity proposal");
        assert_eq!(entity.source_column, "customer");
        assert_eq!(entity.confidence, 0.7);
    }

    #[test]
    fn selected_entity_is_not_also_a_dimension_candidate() {
        let signals = vec![
            categorical_signal("student_id", 40),
            categorical_signal("region", 4),
        ];
        let engine = ProposalEngine::new();
        let set = engine.propose(&signals);
        assert_eq!(set.entity.as_ref().unwrap().source_column, "student_id");
        let dims: Vec<&str> = set
            .dimensions
            .iter()
            .map(|p| p.source_column.as_str())
            .collect();
        assert_eq!(dims, vec!["region"]);
    }

    #[test]
    fn evidence_tags_name_the_triggered_layers() {
        let signal = categorical_signal("region", 4);
        let (score, evidence) = score_role(&signal, Role::Dimension);
        assert_eq!(score, 0.7);
        assert!(evidence.contains(&Evidence::NameKeyword));
        assert!(evidence.contains(&Evidence::TypeMatch));
        assert!(!evidence.contains(&Evidence::NumericBehavior));
    }
}
