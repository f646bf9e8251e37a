//! Column-oriented frame types for raw tabular data.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A named column of cell values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of cells, including missing ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Count of [`Value::Missing`] cells.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }

    /// Iterator over non-missing cells.
    pub fn non_missing(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().filter(|v| !v.is_missing())
    }
}

/// A two-dimensional table of named columns.
///
/// This is the ingestion hand-off artifact: every column has the same
/// length and a determinable per-column storage type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<Column>,
}

impl Frame {
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn push_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Look up a column by exact name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Number of records. Zero for a frame with no columns.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    #[must_use]
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_lookup_and_counts() {
        let frame = Frame::new(vec![
            Column::new("score", vec![Value::Number(10.0), Value::Missing]),
            Column::new("region", vec![Value::Text("north".into()), Value::Missing]),
        ]);

        assert_eq!(frame.n_rows(), 2);
        assert_eq!(frame.n_columns(), 2);
        assert!(frame.column("score").is_some());
        assert!(frame.column("SCORE").is_none());
        assert_eq!(frame.column("region").unwrap().missing_count(), 1);
    }
}
