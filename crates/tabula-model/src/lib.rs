//! Shared data model for the Tabula pipeline.
//!
//! Every stage of the pipeline consumes an immutable artifact from its
//! predecessor and produces a new one: a raw [`Frame`] becomes
//! [`ColumnSignal`]s, signals become a [`ProposalSet`], confirmation
//! yields a [`ConfirmedMapping`], and the adapter projects everything
//! into a [`CanonicalDataset`].

pub mod canonical;
pub mod frame;
pub mod mapping;
pub mod signal;
pub mod value;

pub use canonical::CanonicalDataset;
pub use frame::{Column, Frame};
pub use mapping::{
    ConfirmedMapping, Evidence, MappingProposal, ProposalSet, Role, SemanticHint,
};
pub use signal::{CategoricalSignals, ColumnSignal, InferredType, NumericSignals};
pub use value::Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proposal_serializes() {
        let proposal = MappingProposal {
            role: Role::Entity,
            source_column: "student_id".to_string(),
            confidence: 0.7,
            evidence: [Evidence::NameKeyword, Evidence::TypeMatch]
                .into_iter()
                .collect(),
            hint: Some(SemanticHint {
                label: "person name".to_string(),
                confidence: 0.62,
            }),
        };
        let json = serde_json::to_string(&proposal).expect("serialize proposal");
        let round: MappingProposal = serde_json::from_str(&json).expect("deserialize proposal");
        assert_eq!(round, proposal);
        assert!(json.contains("\"entity\""));
        assert!(json.contains("name_keyword"));
    }
}
