//! Adapter validation and determinism tests.

use chrono::NaiveDate;

use tabula_canon::{SchemaValidationError, build_canonical};
use tabula_model::{Column, ConfirmedMapping, Frame, Role, Value};

fn sales_frame() -> Frame {
    Frame::new(vec![
        Column::new(
            "revenue",
            vec![Value::Number(120.0), Value::Number(80.0), Value::Missing],
        ),
        Column::new(
            "rep",
            vec![
                Value::Text("alice".into()),
                Value::Text("bob".into()),
                Value::Text("alice".into()),
            ],
        ),
        Column::new(
            "order_date",
            vec![
                Value::Text("2024-05-01".into()),
                Value::Text("2024-05-02".into()),
                Value::Text("not a date".into()),
            ],
        ),
        Column::new(
            "region",
            vec![
                Value::Text("north".into()),
                Value::Text("south".into()),
                Value::Missing,
            ],
        ),
        Column::new(
            "only_nulls",
            vec![Value::Missing, Value::Missing, Value::Missing],
        ),
    ])
}

fn full_mapping() -> ConfirmedMapping {
    let mut mapping = ConfirmedMapping::default();
    mapping.add_measure("revenue");
    mapping.add_measure("only_nulls");
    mapping.set_entity("rep");
    mapping.set_time("order_date");
    mapping.add_dimension("region");
    mapping
}

#[test]
fn builds_full_canonical_shape() {
    let dataset = build_canonical(&sales_frame(), &full_mapping(), "revenue").unwrap();

    assert_eq!(dataset.active_measure, "revenue");
    assert_eq!(
        dataset.column_names(),
        vec!["measure", "entity", "time", "dimension_1"]
    );
    assert_eq!(dataset.len(), 3);
    assert_eq!(
        dataset.time.as_ref().unwrap()[0],
        Value::Date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    );
    assert_eq!(dataset.time.as_ref().unwrap()[2], Value::Missing);
}

#[test]
fn empty_confirmed_measures_fail() {
    let mapping = ConfirmedMapping::default();
    let err = build_canonical(&sales_frame(), &mapping, "revenue").unwrap_err();
    assert_eq!(err, SchemaValidationError::NoConfirmedMeasures);
    assert!(err.to_string().contains("measure"));
}

#[test]
fn unconfirmed_active_measure_fails() {
    let err = build_canonical(&sales_frame(), &full_mapping(), "profit").unwrap_err();
    assert_eq!(
        err,
        SchemaValidationError::InactiveMeasure {
            active: "profit".to_string(),
            confirmed: vec!["revenue".to_string(), "only_nulls".to_string()],
        }
    );
}

#[test]
fn custom_column_absent_from_dataset_fails_here() {
    // a custom confirmation decision names a column verbatim; the
    // adapter is where its absence surfaces
    let mut mapping = full_mapping();
    mapping.set_entity("definitely_not_a_column");
    let err = build_canonical(&sales_frame(), &mapping, "revenue").unwrap_err();
    assert_eq!(
        err,
        SchemaValidationError::MissingColumn {
            role: Role::Entity,
            column: "definitely_not_a_column".to_string(),
        }
    );
}

#[test]
fn entirely_missing_measure_fails_postcondition() {
    let err = build_canonical(&sales_frame(), &full_mapping(), "only_nulls").unwrap_err();
    assert_eq!(
        err,
        SchemaValidationError::AllMissingMeasure {
            column: "only_nulls".to_string(),
        }
    );
}

#[test]
fn rebuilds_are_deterministic() {
    let frame = sales_frame();
    let mapping = full_mapping();
    let first = build_canonical(&frame, &mapping, "revenue").unwrap();
    let second = build_canonical(&frame, &mapping, "revenue").unwrap();
    assert_eq!(first, second);
}
