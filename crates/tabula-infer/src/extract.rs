//! Column type inference and signal extraction.
//!
//! # Algorithm
//!
//! [`infer_type`] classifies a column by storage type first, then falls
//! back to content inspection:
//!
//! 1. Every non-missing cell is a [`Value::Date`] → `Date`.
//! 2. Every non-missing cell is a [`Value::Number`] → `Numeric`.
//! 3. Otherwise, attempt a date parse over all non-missing cells; when
//!    the successful fraction exceeds [`DATE_FRACTION_THRESHOLD`], the
//!    column is a string-exported `Date`.
//! 4. Everything else is `Categorical`.
//!
//! Empty or all-missing columns classify as `Categorical` and yield no
//! signal blocks.

use tracing::debug;

use tabula_model::{
    CategoricalSignals, Column, ColumnSignal, Frame, InferredType, NumericSignals, Value,
};

use crate::datelike::parse_date;

/// Fraction of successfully parsed cells required to treat a text
/// column as a string-exported date column.
pub const DATE_FRACTION_THRESHOLD: f64 = 0.8;

/// Number of first-seen sample values recorded for categorical columns.
const SAMPLE_VALUE_LIMIT: usize = 5;

/// Infer the semantic type of a column.
#[must_use]
pub fn infer_type(column: &Column) -> InferredType {
    let non_missing: Vec<&Value> = column.non_missing().collect();
    if non_missing.is_empty() {
        return InferredType::Categorical;
    }

    if non_missing.iter().all(|v| matches!(v, Value::Date(_))) {
        return InferredType::Date;
    }
    if non_missing.iter().all(|v| matches!(v, Value::Number(_))) {
        return InferredType::Numeric;
    }

    let parsed = non_missing
        .iter()
        .filter_map(|v| v.as_text())
        .filter(|s| parse_date(s).is_some())
        .count();
    let fraction = parsed as f64 / non_missing.len() as f64;
    if fraction > DATE_FRACTION_THRESHOLD {
        InferredType::Date
    } else {
        InferredType::Categorical
    }
}

/// Descriptive signals for a numeric column, `None` when no values.
#[must_use]
pub fn numeric_signals(column: &Column) -> Option<NumericSignals> {
    let values: Vec<f64> = column.non_missing().filter_map(Value::as_number).collect();
    if values.is_empty() {
        return None;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &v in &values {
        min = min.min(v);
        max = max.max(v);
        sum += v;
    }

    let mut sorted = values.clone();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();

    Some(NumericSignals {
        min,
        max,
        mean: sum / values.len() as f64,
        integer_like: values.iter().all(|v| v.fract() == 0.0),
        unique_count: sorted.len(),
    })
}

/// Descriptive signals for a categorical column, `None` when no values.
#[must_use]
pub fn categorical_signals(column: &Column) -> Option<CategoricalSignals> {
    let mut seen: Vec<String> = Vec::new();
    let mut total = 0usize;
    for value in column.non_missing() {
        total += 1;
        let label = value.label();
        if !seen.contains(&label) {
            seen.push(label);
        }
    }
    if total == 0 {
        return None;
    }
    Some(CategoricalSignals {
        unique_count: seen.len(),
        sample_values: seen.into_iter().take(SAMPLE_VALUE_LIMIT).collect(),
    })
}

/// Extract signals for every column of a frame, in column order.
#[must_use]
pub fn extract_signals(frame: &Frame) -> Vec<ColumnSignal> {
    frame
        .columns()
        .iter()
        .map(|column| {
            let inferred_type = infer_type(column);
            let signal = ColumnSignal {
                name: column.name.clone(),
                inferred_type,
                missing_count: column.missing_count(),
                numeric: match inferred_type {
                    InferredType::Numeric => numeric_signals(column),
                    _ => None,
                },
                categorical: match inferred_type {
                    InferredType::Categorical => categorical_signals(column),
                    _ => None,
                },
            };
            debug!(
                column = %signal.name,
                inferred = %signal.inferred_type,
                missing = signal.missing_count,
                "extracted column signal"
            );
            signal
        })
        .collect()
}
