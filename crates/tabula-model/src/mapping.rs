//! Canonical roles, scored proposals, and confirmed mappings.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::signal::InferredType;

/// A canonical role every raw column may be mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The numeric quantity aggregated by downstream analyses.
    Measure,
    /// The categorical unit ranked or summarized.
    Entity,
    /// The temporal axis.
    Time,
    /// An additional categorical grouping axis.
    Dimension,
}

impl Role {
    /// All roles in presentation order.
    pub const ALL: [Role; 4] = [Role::Measure, Role::Entity, Role::Time, Role::Dimension];

    /// The inferred column type this role expects.
    #[must_use]
    pub fn expected_type(self) -> InferredType {
        match self {
            Self::Measure => InferredType::Numeric,
            Self::Entity | Self::Dimension => InferredType::Categorical,
            Self::Time => InferredType::Date,
        }
    }

    /// Minimum confidence for a column to be proposed for this role.
    #[must_use]
    pub fn threshold(self) -> f64 {
        match self {
            Self::Measure => 0.6,
            Self::Entity | Self::Time => 0.4,
            Self::Dimension => 0.3,
        }
    }

    /// Whether the role accepts multiple confirmed columns.
    #[must_use]
    pub fn is_plural(self) -> bool {
        matches!(self, Self::Measure | Self::Dimension)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Measure => write!(f, "measure"),
            Self::Entity => write!(f, "entity"),
            Self::Time => write!(f, "time"),
            Self::Dimension => write!(f, "dimension"),
        }
    }
}

/// An evidence layer that contributed to a proposal's confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evidence {
    /// Case-insensitive keyword hit in the column name.
    NameKeyword,
    /// Inferred type equals the role's expected type.
    TypeMatch,
    /// Measure-only numeric behavior heuristics.
    NumericBehavior,
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameKeyword => write!(f, "name_keyword"),
            Self::TypeMatch => write!(f, "type_match"),
            Self::NumericBehavior => write!(f, "numeric_behavior"),
        }
    }
}

/// Advisory similarity-based label suggestion. Display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticHint {
    pub label: String,
    pub confidence: f64,
}

/// A scored, unconfirmed candidate mapping from a column to a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingProposal {
    pub role: Role,
    pub source_column: String,
    /// Clamped to `[0, 1]`, rounded to two decimals.
    pub confidence: f64,
    pub evidence: BTreeSet<Evidence>,
    /// Optional advisory hint; never gates acceptance.
    pub hint: Option<SemanticHint>,
}

impl MappingProposal {
    /// Evidence tags joined for operator display.
    #[must_use]
    pub fn evidence_summary(&self) -> String {
        self.evidence
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Threshold-gated proposals, grouped per role.
///
/// Measure and dimension hold every qualifying column in first-seen
/// order; entity and time hold at most one selected candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalSet {
    pub measures: Vec<MappingProposal>,
    pub entity: Option<MappingProposal>,
    pub time: Option<MappingProposal>,
    pub dimensions: Vec<MappingProposal>,
}

impl ProposalSet {
    /// All proposals in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &MappingProposal> {
        self.measures
            .iter()
            .chain(self.entity.iter())
            .chain(self.time.iter())
            .chain(self.dimensions.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.measures.len()
            + usize::from(self.entity.is_some())
            + usize::from(self.time.is_some())
            + self.dimensions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The human-confirmed mapping from raw columns onto canonical roles.
///
/// Mutated only by the confirmation protocol; plural roles preserve
/// confirmation order, which fixes `dimension_1..N` indexing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedMapping {
    pub measures: Vec<String>,
    pub entity: Option<String>,
    pub time: Option<String>,
    pub dimensions: Vec<String>,
}

impl ConfirmedMapping {
    /// Append a confirmed measure column, ignoring duplicates.
    pub fn add_measure(&mut self, column: impl Into<String>) {
        let column = column.into();
        if !self.measures.contains(&column) {
            self.measures.push(column);
        }
    }

    /// Append a confirmed dimension column, ignoring duplicates.
    pub fn add_dimension(&mut self, column: impl Into<String>) {
        let column = column.into();
        if !self.dimensions.contains(&column) {
            self.dimensions.push(column);
        }
    }

    pub fn set_entity(&mut self, column: impl Into<String>) {
        self.entity = Some(column.into());
    }

    pub fn set_time(&mut self, column: impl Into<String>) {
        self.time = Some(column.into());
    }

    /// True when no role has any confirmed column.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
            && self.entity.is_none()
            && self.time.is_none()
            && self.dimensions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_tables_are_consistent() {
        for role in Role::ALL {
            assert!(role.threshold() > 0.0 && role.threshold() <= 1.0);
        }
        assert!(Role::Measure.is_plural());
        assert!(Role::Dimension.is_plural());
        assert!(!Role::Entity.is_plural());
        assert!(!Role::Time.is_plural());
    }

    #[test]
    fn confirmed_mapping_dedupes_plural_roles() {
        let mut mapping = ConfirmedMapping::default();
        mapping.add_measure("revenue");
        mapping.add_measure("revenue");
        mapping.add_dimension("region");
        mapping.add_dimension("region");
        assert_eq!(mapping.measures, vec!["revenue".to_string()]);
        assert_eq!(mapping.dimensions, vec!["region".to_string()]);
    }

    #[test]
    fn evidence_summary_is_sorted_and_deduped() {
        let proposal = MappingProposal {
            role: Role::Measure,
            source_column: "score".to_string(),
            confidence: 0.8,
            evidence: [Evidence::TypeMatch, Evidence::NameKeyword]
                .into_iter()
                .collect(),
            hint: None,
        };
        assert_eq!(proposal.evidence_summary(), "name_keyword, type_match");
    }
}
