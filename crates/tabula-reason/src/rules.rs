//! Declarative capability rule table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::facts::Fact;

/// A category of aggregate analysis that may be offered downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    /// Totals over the active measure.
    Summary,
    /// Entities ordered by aggregated measure.
    Rank,
    /// Measure aggregated along the time axis.
    Trend,
    /// Measure compared across dimension categories.
    Compare,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 4] = [
        AnalysisKind::Summary,
        AnalysisKind::Rank,
        AnalysisKind::Trend,
        AnalysisKind::Compare,
    ];
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Rank => write!(f, "rank"),
            Self::Trend => write!(f, "trend"),
            Self::Compare => write!(f, "compare"),
        }
    }
}

/// Facts required for each analysis kind. An analysis is enabled iff
/// every listed fact holds.
pub const RULE_TABLE: &[(AnalysisKind, &[Fact])] = &[
    (AnalysisKind::Summary, &[Fact::HasMeasure]),
    (AnalysisKind::Rank, &[Fact::HasMeasure, Fact::HasEntity]),
    (AnalysisKind::Trend, &[Fact::HasMeasure, Fact::HasTime]),
    (AnalysisKind::Compare, &[Fact::HasMeasure, Fact::HasDimensions]),
];

/// The facts required by one analysis kind.
#[must_use]
pub fn required_facts(kind: AnalysisKind) -> &'static [Fact] {
    RULE_TABLE
        .iter()
        .find(|(k, _)| *k == kind)
        .map_or(&[], |(_, facts)| facts)
}
