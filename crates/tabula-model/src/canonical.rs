//! The fixed-shape canonical dataset consumed by analysis and reasoning.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A dataset projected onto the canonical vocabulary.
///
/// Columns are `measure`, optional `entity`, optional `time` (dates or
/// missing markers only), and `dimension_1..N` in confirmation order.
/// Always rebuilt wholesale; a measure switch replaces the entire value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalDataset {
    /// The confirmed measure column this projection was built from.
    pub active_measure: String,
    pub measure: Vec<Value>,
    pub entity: Option<Vec<Value>>,
    pub time: Option<Vec<Value>>,
    pub dimensions: Vec<Vec<Value>>,
}

impl CanonicalDataset {
    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.measure.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.measure.is_empty()
    }

    #[must_use]
    pub fn has_entity(&self) -> bool {
        self.entity.is_some()
    }

    #[must_use]
    pub fn has_time(&self) -> bool {
        self.time.is_some()
    }

    #[must_use]
    pub fn dimension_count(&self) -> usize {
        self.dimensions.len()
    }

    /// Canonical name for the k-th dimension column (1-based).
    #[must_use]
    pub fn dimension_name(k: usize) -> String {
        format!("dimension_{k}")
    }

    /// The k-th dimension column, 1-based.
    #[must_use]
    pub fn dimension(&self, k: usize) -> Option<&[Value]> {
        k.checked_sub(1)
            .and_then(|idx| self.dimensions.get(idx))
            .map(Vec::as_slice)
    }

    /// The canonical column vocabulary present in this dataset.
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        let mut names = vec!["measure".to_string()];
        if self.has_entity() {
            names.push("entity".to_string());
        }
        if self.has_time() {
            names.push("time".to_string());
        }
        for k in 1..=self.dimension_count() {
            names.push(Self::dimension_name(k));
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_follow_confirmation_order() {
        let dataset = CanonicalDataset {
            active_measure: "score".to_string(),
            measure: vec![Value::Number(1.0)],
            entity: None,
            time: Some(vec![Value::Missing]),
            dimensions: vec![vec![Value::Text("a".into())], vec![Value::Text("b".into())]],
        };
        assert_eq!(
            dataset.column_names(),
            vec!["measure", "time", "dimension_1", "dimension_2"]
        );
        assert_eq!(dataset.dimension(1).unwrap()[0], Value::Text("a".into()));
        assert!(dataset.dimension(0).is_none());
        assert!(dataset.dimension(3).is_none());
    }
}
