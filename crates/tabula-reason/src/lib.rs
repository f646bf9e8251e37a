//! Capability reasoning.
//!
//! Derives pure facts from a canonical dataset and evaluates a fixed
//! declarative rule table to decide which analysis kinds are currently
//! safe. Risks are advisory annotations and never block.

pub mod facts;
pub mod report;
pub mod rules;

pub use facts::{DatasetFacts, Fact};
pub use report::{CapabilityReport, reason_about};
pub use rules::{AnalysisKind, RULE_TABLE, required_facts};
