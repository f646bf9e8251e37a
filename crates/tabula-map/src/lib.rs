//! Mapping proposals and human confirmation.
//!
//! This crate scores every (column, role) pair from independent
//! evidence layers, gates the results on role-specific thresholds, and
//! folds externally supplied accept/reject/custom decisions into a
//! confirmed mapping. Everything here is a total function; missing
//! proposals are a normal empty outcome, not an error.

pub mod advisor;
pub mod confirm;
pub mod engine;
pub mod keywords;

pub use advisor::{FuzzyAdvisor, SemanticAdvisor};
pub use confirm::{Decision, DecisionSource, ScriptedDecisions, confirm_mappings};
pub use engine::{ProposalEngine, score_role};
pub use keywords::{KEYWORD_HINTS, keywords_for, name_matches};
