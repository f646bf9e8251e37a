//! Capability report evaluation.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use tabula_model::CanonicalDataset;

use crate::facts::{DatasetFacts, Fact};
use crate::rules::{AnalysisKind, RULE_TABLE};

/// Measure cardinality below which low-variance risk is flagged.
const LOW_MEASURE_CARDINALITY: usize = 3;

/// Which analyses are safe to offer, with reasons, assumptions, and
/// advisory risks. A pure function of one canonical dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityReport {
    pub enabled: BTreeSet<AnalysisKind>,
    pub disabled: BTreeMap<AnalysisKind, String>,
    pub assumptions: Vec<String>,
    /// Advisory only; risks never disable an analysis.
    pub risks: Vec<String>,
}

impl CapabilityReport {
    #[must_use]
    pub fn is_enabled(&self, kind: AnalysisKind) -> bool {
        self.enabled.contains(&kind)
    }
}

/// Evaluate the capability rule table against a canonical dataset.
///
/// Stateless; safe to re-invoke after every canonical rebuild.
#[must_use]
pub fn reason_about(dataset: &CanonicalDataset) -> CapabilityReport {
    let facts = DatasetFacts::derive(dataset);

    let mut enabled = BTreeSet::new();
    let mut disabled = BTreeMap::new();
    for (kind, required) in RULE_TABLE {
        let missing: Vec<String> = required
            .iter()
            .filter(|fact| !facts.holds(**fact))
            .map(ToString::to_string)
            .collect();
        if missing.is_empty() {
            enabled.insert(*kind);
        } else {
            disabled.insert(*kind, format!("missing {}", missing.join(", ")));
        }
    }

    let mut assumptions = Vec::new();
    if facts.holds(Fact::HasMeasure) {
        assumptions.push("Measure values are comparable across records".to_string());
    }
    if facts.holds(Fact::HasEntity) {
        assumptions.push("Entity values identify distinct units".to_string());
    }

    let mut risks = Vec::new();
    if facts.measure_cardinality < LOW_MEASURE_CARDINALITY {
        risks.push("Low variance in measure may reduce analytical insight".to_string());
    }
    if facts.holds(Fact::HasTime) && facts.time_cardinality <= 1 {
        risks.push("Single time value limits trend depth".to_string());
    }

    debug!(
        enabled = enabled.len(),
        disabled = disabled.len(),
        risks = risks.len(),
        "evaluated capability rules"
    );
    CapabilityReport {
        enabled,
        disabled,
        assumptions,
        risks,
    }
}
