//! Dataset ingestion boundary.
//!
//! Loads a CSV file into the typed [`tabula_model::Frame`] the core
//! pipeline consumes. Everything downstream of here is
//! storage-agnostic.

pub mod csv_frame;

pub use csv_frame::{read_csv_frame, read_frame_from};
