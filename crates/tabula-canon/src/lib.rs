//! Canonical schema adapter.
//!
//! The only fail-fast boundary in the pipeline: every structural
//! precondition violation surfaces as a [`SchemaValidationError`] and
//! aborts construction with no partial result.

pub mod adapter;
pub mod error;

pub use adapter::build_canonical;
pub use error::SchemaValidationError;
