//! Non-interactive pipeline driver.
//!
//! Chains extraction, proposal scoring, confirmation, canonical
//! construction, and capability reasoning over one frame. The decision
//! source is injected, so the whole flow is scriptable; the interactive
//! prompt is just one provider.

use tabula_canon::{SchemaValidationError, build_canonical};
use tabula_infer::extract_signals;
use tabula_map::{DecisionSource, ProposalEngine, SemanticAdvisor, confirm_mappings};
use tabula_model::{CanonicalDataset, ColumnSignal, ConfirmedMapping, Frame, ProposalSet};
use tabula_reason::{CapabilityReport, reason_about};

/// A dataset with extracted signals and scored proposals, awaiting
/// confirmation.
pub struct Session {
    frame: Frame,
    pub signals: Vec<ColumnSignal>,
    pub proposals: ProposalSet,
}

impl Session {
    /// Extract signals and score proposals for a frame.
    #[must_use]
    pub fn start(frame: Frame, advisor: Option<Box<dyn SemanticAdvisor>>) -> Self {
        let signals = extract_signals(&frame);
        let engine = match advisor {
            Some(advisor) => ProposalEngine::new().with_advisor(advisor),
            None => ProposalEngine::new(),
        };
        let proposals = engine.propose(&signals);
        Self {
            frame,
            signals,
            proposals,
        }
    }

    /// Run confirmation against the decision source and build the
    /// initial canonical dataset.
    ///
    /// The active measure defaults to the first confirmed measure; an
    /// explicit override must still be a confirmed measure.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaValidationError`] when canonical construction
    /// preconditions fail (including an empty confirmed-measures set).
    pub fn confirm(
        self,
        source: &mut dyn DecisionSource,
        active_measure: Option<&str>,
    ) -> Result<ConfirmedSession, SchemaValidationError> {
        let mapping = confirm_mappings(&self.proposals, source);
        let active = active_measure
            .map(str::to_string)
            .or_else(|| mapping.measures.first().cloned())
            .unwrap_or_default();
        let dataset = build_canonical(&self.frame, &mapping, &active)?;
        let report = reason_about(&dataset);
        Ok(ConfirmedSession {
            frame: self.frame,
            mapping,
            dataset,
            report,
        })
    }
}

/// A confirmed mapping with its live canonical dataset and report.
///
/// Only one canonical dataset is ever live; switching the measure
/// replaces it and its report wholesale.
pub struct ConfirmedSession {
    frame: Frame,
    pub mapping: ConfirmedMapping,
    pub dataset: CanonicalDataset,
    pub report: CapabilityReport,
}

impl ConfirmedSession {
    #[must_use]
    pub fn active_measure(&self) -> &str {
        &self.dataset.active_measure
    }

    /// Switch the active measure: full rebuild plus re-reasoning.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaValidationError`] when the new measure fails
    /// validation; the previous dataset and report stay live.
    pub fn switch_measure(&mut self, active_measure: &str) -> Result<(), SchemaValidationError> {
        let dataset = build_canonical(&self.frame, &self.mapping, active_measure)?;
        self.report = reason_about(&dataset);
        self.dataset = dataset;
        Ok(())
    }
}
