//! Typed cell values for tabular data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single cell in a tabular dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    /// A numeric value.
    Number(f64),
    /// A free-text or categorical value.
    Text(String),
    /// A calendar date.
    Date(NaiveDate),
    /// An absent value.
    Missing,
}

impl Value {
    /// Returns true for [`Value::Missing`].
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Numeric view of the value, if it is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text view of the value, if it is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Date view of the value, if it is a date.
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Display label for grouping and presentation.
    ///
    /// Missing values get an explicit bucket so aggregations never drop
    /// records silently. Whole numbers render without a trailing `.0`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                format!("{}", *n as i64)
            }
            Self::Number(n) => format!("{n}"),
            Self::Text(s) => s.clone(),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::Missing => "(missing)".to_string(),
        }
    }
}
