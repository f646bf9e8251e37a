//! Pure facts derived from a canonical dataset.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use tabula_model::{CanonicalDataset, Value};

/// A structural fact about a canonical dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fact {
    HasMeasure,
    HasEntity,
    HasTime,
    HasDimensions,
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HasMeasure => write!(f, "measure"),
            Self::HasEntity => write!(f, "entity"),
            Self::HasTime => write!(f, "time"),
            Self::HasDimensions => write!(f, "dimensions"),
        }
    }
}

/// All facts holding for a dataset, plus the cardinalities used by the
/// risk heuristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetFacts {
    pub facts: BTreeSet<Fact>,
    /// Distinct non-missing time values.
    pub time_cardinality: usize,
    /// Distinct non-missing measure values.
    pub measure_cardinality: usize,
}

impl DatasetFacts {
    /// Derive facts from the canonical dataset alone.
    #[must_use]
    pub fn derive(dataset: &CanonicalDataset) -> Self {
        let mut facts = BTreeSet::new();
        // construction guarantees a measure column is present
        facts.insert(Fact::HasMeasure);
        if dataset.has_entity() {
            facts.insert(Fact::HasEntity);
        }
        if dataset.has_time() {
            facts.insert(Fact::HasTime);
        }
        if dataset.dimension_count() > 0 {
            facts.insert(Fact::HasDimensions);
        }

        Self {
            facts,
            time_cardinality: dataset
                .time
                .as_deref()
                .map_or(0, distinct_non_missing),
            measure_cardinality: distinct_non_missing(&dataset.measure),
        }
    }

    #[must_use]
    pub fn holds(&self, fact: Fact) -> bool {
        self.facts.contains(&fact)
    }
}

fn distinct_non_missing(values: &[Value]) -> usize {
    values
        .iter()
        .filter(|v| !v.is_missing())
        .map(Value::label)
        .collect::<BTreeSet<_>>()
        .len()
}
