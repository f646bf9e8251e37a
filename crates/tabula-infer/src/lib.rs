//! Schema signal extraction.
//!
//! Produces one immutable [`tabula_model::ColumnSignal`] per raw column:
//! an inferred semantic type plus the descriptive signals the proposal
//! engine scores against. Extraction is a total function; anomalous
//! columns degrade to absent signals instead of failing.

pub mod datelike;
pub mod extract;

pub use datelike::parse_date;
pub use extract::{
    DATE_FRACTION_THRESHOLD, categorical_signals, extract_signals, infer_type, numeric_signals,
};
