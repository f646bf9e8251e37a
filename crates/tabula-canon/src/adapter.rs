//! Deterministic projection of a raw frame into the canonical dataset.

use tracing::info;

use tabula_infer::parse_date;
use tabula_model::{CanonicalDataset, Column, ConfirmedMapping, Frame, Role, Value};

use crate::error::SchemaValidationError;

/// Build the canonical dataset for one active measure.
///
/// Validation runs in order and fails fast on the first violation:
/// confirmed measures non-empty, active measure confirmed, active
/// measure column present, every referenced entity/time/dimension
/// column present. Construction copies the measure, entity, and
/// dimension columns verbatim and coerces the time column to dates,
/// turning individually unparseable entries into missing markers.
///
/// The function is deterministic and side-effect-free; switching the
/// active measure rebuilds the whole value rather than patching it.
///
/// # Errors
///
/// Returns [`SchemaValidationError`] when a structural precondition is
/// violated or the built measure column is entirely missing.
pub fn build_canonical(
    frame: &Frame,
    mapping: &ConfirmedMapping,
    active_measure: &str,
) -> Result<CanonicalDataset, SchemaValidationError> {
    if mapping.measures.is_empty() {
        return Err(SchemaValidationError::NoConfirmedMeasures);
    }
    if !mapping.measures.iter().any(|m| m == active_measure) {
        return Err(SchemaValidationError::InactiveMeasure {
            active: active_measure.to_string(),
            confirmed: mapping.measures.clone(),
        });
    }

    let measure_column = require_column(frame, Role::Measure, active_measure)?;
    let entity_column = mapping
        .entity
        .as_deref()
        .map(|name| require_column(frame, Role::Entity, name))
        .transpose()?;
    let time_column = mapping
        .time
        .as_deref()
        .map(|name| require_column(frame, Role::Time, name))
        .transpose()?;
    let dimension_columns = mapping
        .dimensions
        .iter()
        .map(|name| require_column(frame, Role::Dimension, name))
        .collect::<Result<Vec<_>, _>>()?;

    let measure = measure_column.values.clone();
    if measure.iter().all(Value::is_missing) {
        return Err(SchemaValidationError::AllMissingMeasure {
            column: active_measure.to_string(),
        });
    }

    let dataset = CanonicalDataset {
        active_measure: active_measure.to_string(),
        measure,
        entity: entity_column.map(|c| c.values.clone()),
        time: time_column.map(coerce_time),
        dimensions: dimension_columns
            .into_iter()
            .map(|c| c.values.clone())
            .collect(),
    };

    info!(
        active_measure,
        rows = dataset.len(),
        columns = dataset.column_names().len(),
        "built canonical dataset"
    );
    Ok(dataset)
}

fn require_column<'a>(
    frame: &'a Frame,
    role: Role,
    name: &str,
) -> Result<&'a Column, SchemaValidationError> {
    frame
        .column(name)
        .ok_or_else(|| SchemaValidationError::MissingColumn {
            role,
            column: name.to_string(),
        })
}

/// Coerce a raw time column to dates, entry by entry.
///
/// Unparseable entries become missing markers; the column as a whole
/// never fails.
fn coerce_time(column: &Column) -> Vec<Value> {
    column
        .values
        .iter()
        .map(|value| match value {
            Value::Date(d) => Value::Date(*d),
            Value::Text(s) => parse_date(s).map_or(Value::Missing, Value::Date),
            Value::Number(_) | Value::Missing => Value::Missing,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame::new(vec![
            Column::new("score", vec![Value::Number(10.0), Value::Number(20.0)]),
            Column::new(
                "when",
                vec![Value::Text("2024-01-01".into()), Value::Text("junk".into())],
            ),
        ])
    }

    #[test]
    fn time_entries_coerce_individually() {
        let mut mapping = ConfirmedMapping::default();
        mapping.add_measure("score");
        mapping.set_time("when");

        let dataset = build_canonical(&frame(), &mapping, "score").unwrap();
        let time = dataset.time.as_ref().unwrap();
        assert!(matches!(time[0], Value::Date(_)));
        assert_eq!(time[1], Value::Missing);
    }

    #[test]
    fn validation_order_reports_measures_first() {
        let mapping = ConfirmedMapping::default();
        let err = build_canonical(&frame(), &mapping, "score").unwrap_err();
        assert_eq!(err, SchemaValidationError::NoConfirmedMeasures);
    }
}
