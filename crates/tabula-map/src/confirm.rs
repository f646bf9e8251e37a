//! Human confirmation protocol.
//!
//! Each proposal is presented to an injected decision source exactly
//! once and transitions to accepted, rejected, or custom. The protocol
//! is a pure fold of decisions into a [`ConfirmedMapping`]; the
//! decision source is the pipeline's only suspension point.

use std::collections::VecDeque;

use tracing::{debug, info};

use tabula_model::{ConfirmedMapping, MappingProposal, ProposalSet, Role};

/// Outcome of presenting one proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Take the proposed column.
    Accept,
    /// Skip this candidate.
    Reject,
    /// Substitute an operator-supplied column name, taken verbatim.
    /// Existence in the dataset is checked later by the adapter.
    Custom(String),
}

/// Abstract provider of confirmation decisions.
///
/// Production code supplies an interactive provider; tests supply a
/// scripted one. Providers must map unrecognized or absent input to
/// [`Decision::Reject`], never to silent acceptance.
pub trait DecisionSource {
    fn decide(&mut self, proposal: &MappingProposal) -> Decision;
}

/// Scripted decision source for deterministic test runs.
///
/// Decisions are consumed in presentation order; once the script is
/// exhausted every further proposal is rejected.
#[derive(Debug, Default)]
pub struct ScriptedDecisions {
    queue: VecDeque<Decision>,
}

impl ScriptedDecisions {
    #[must_use]
    pub fn new(decisions: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            queue: decisions.into_iter().collect(),
        }
    }

    /// A source that accepts every proposal.
    #[must_use]
    pub fn accept_all(count: usize) -> Self {
        Self::new(std::iter::repeat_n(Decision::Accept, count))
    }
}

impl DecisionSource for ScriptedDecisions {
    fn decide(&mut self, _proposal: &MappingProposal) -> Decision {
        self.queue.pop_front().unwrap_or(Decision::Reject)
    }
}

/// Present every proposal to the decision source and accumulate the
/// confirmed mapping.
///
/// Proposals are presented in presentation order (measures, entity,
/// time, dimensions); confirmation order fixes `dimension_k` indexing.
pub fn confirm_mappings(
    proposals: &ProposalSet,
    source: &mut dyn DecisionSource,
) -> ConfirmedMapping {
    let mut confirmed = ConfirmedMapping::default();
    for proposal in proposals.iter() {
        match source.decide(proposal) {
            Decision::Accept => {
                info!(
                    role = %proposal.role,
                    column = %proposal.source_column,
                    confidence = proposal.confidence,
                    "mapping accepted"
                );
                apply(&mut confirmed, proposal.role, proposal.source_column.clone());
            }
            Decision::Reject => {
                debug!(
                    role = %proposal.role,
                    column = %proposal.source_column,
                    "mapping rejected"
                );
            }
            Decision::Custom(column) => {
                info!(role = %proposal.role, column = %column, "custom mapping supplied");
                apply(&mut confirmed, proposal.role, column);
            }
        }
    }
    confirmed
}

fn apply(confirmed: &mut ConfirmedMapping, role: Role, column: String) {
    match role {
        Role::Measure => confirmed.add_measure(column),
        Role::Entity => confirmed.set_entity(column),
        Role::Time => confirmed.set_time(column),
        Role::Dimension => confirmed.add_dimension(column),
    }
}
