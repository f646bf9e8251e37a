//! Schema signals produced by the extraction pass.
//!
//! A [`ColumnSignal`] is the immutable evidence record for one column:
//! its inferred semantic type, missing-value count, and type-specific
//! descriptive signals used by the proposal engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type inferred for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InferredType {
    Numeric,
    Categorical,
    Date,
}

impl fmt::Display for InferredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::Categorical => write!(f, "categorical"),
            Self::Date => write!(f, "date"),
        }
    }
}

/// Descriptive signals for a numeric column, over non-missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSignals {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// True when every value is a whole number.
    pub integer_like: bool,
    pub unique_count: usize,
}

/// Descriptive signals for a categorical column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalSignals {
    pub unique_count: usize,
    /// Up to five first-seen distinct values. Display only, never scored.
    pub sample_values: Vec<String>,
}

/// The full signal record for one raw column.
///
/// Empty or all-missing columns carry `None` in both signal slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSignal {
    pub name: String,
    pub inferred_type: InferredType,
    pub missing_count: usize,
    pub numeric: Option<NumericSignals>,
    pub categorical: Option<CategoricalSignals>,
}

impl ColumnSignal {
    /// Unique-value count from whichever signal block is present.
    #[must_use]
    pub fn unique_count(&self) -> Option<usize> {
        self.numeric
            .as_ref()
            .map(|n| n.unique_count)
            .or_else(|| self.categorical.as_ref().map(|c| c.unique_count))
    }
}
