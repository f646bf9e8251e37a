//! Schema validation failures.

use thiserror::Error;

use tabula_model::Role;

/// A structural precondition of canonical construction was violated.
///
/// Always surfaced to the caller, never auto-retried; no partial
/// canonical dataset is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaValidationError {
    #[error("no measures confirmed; at least one numeric measure is required")]
    NoConfirmedMeasures,

    #[error("active measure '{active}' is not among confirmed measures: {confirmed:?}")]
    InactiveMeasure {
        active: String,
        confirmed: Vec<String>,
    },

    #[error("{role} column '{column}' not found in the dataset")]
    MissingColumn { role: Role, column: String },

    #[error("active measure column '{column}' contains only missing values")]
    AllMissingMeasure { column: String },
}
