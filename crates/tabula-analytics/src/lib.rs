//! Aggregate analyses over the canonical dataset.
//!
//! These are the hand-off collaborators the capability reasoner gates:
//! simple sums and group-bys that are only safe once the canonical
//! shape exists. Each function returns `None` when its required
//! canonical columns are absent; callers are expected to consult the
//! capability report before offering an analysis.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tabula_model::{CanonicalDataset, Value};

/// Totals for the active measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub total_measure: f64,
    /// Distinct entity count, when an entity column is present.
    pub entity_count: Option<usize>,
}

/// One group and its aggregated measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub key: String,
    pub total: f64,
}

/// Entities ordered by aggregated measure, descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankResult {
    pub ranking: Vec<GroupTotal>,
}

/// Measure aggregated along the time axis, chronological; records with
/// a missing time value collect into a trailing missing bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub points: Vec<GroupTotal>,
}

/// Group totals per dimension column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareResult {
    /// Keyed by canonical dimension name (`dimension_1`, ...).
    pub comparisons: Vec<(String, Vec<GroupTotal>)>,
}

/// Sum the active measure and count distinct entities when present.
#[must_use]
pub fn run_summary(dataset: &CanonicalDataset) -> SummaryResult {
    let total_measure: f64 = dataset
        .measure
        .iter()
        .filter_map(Value::as_number)
        .sum();

    let entity_count = dataset.entity.as_ref().map(|entities| {
        entities
            .iter()
            .filter(|v| !v.is_missing())
            .map(Value::label)
            .collect::<std::collections::BTreeSet<_>>()
            .len()
    });

    SummaryResult {
        total_measure,
        entity_count,
    }
}

/// Rank entities by summed measure, descending.
///
/// Returns `None` when the dataset has no entity column.
#[must_use]
pub fn run_rank(dataset: &CanonicalDataset) -> Option<RankResult> {
    let entities = dataset.entity.as_ref()?;
    Some(RankResult {
        ranking: grouped_totals(entities, &dataset.measure),
    })
}

/// Sum the measure per time value, in chronological order.
///
/// Returns `None` when the dataset has no time column.
#[must_use]
pub fn run_trend(dataset: &CanonicalDataset) -> Option<TrendResult> {
    let times = dataset.time.as_ref()?;

    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    let mut missing_total: Option<f64> = None;
    for (time, measure) in times.iter().zip(&dataset.measure) {
        let amount = measure.as_number().unwrap_or(0.0);
        match time.as_date() {
            Some(date) => *by_date.entry(date).or_insert(0.0) += amount,
            None => *missing_total.get_or_insert(0.0) += amount,
        }
    }

    let mut points: Vec<GroupTotal> = by_date
        .into_iter()
        .map(|(date, total)| GroupTotal {
            key: date.format("%Y-%m-%d").to_string(),
            total,
        })
        .collect();
    if let Some(total) = missing_total {
        points.push(GroupTotal {
            key: Value::Missing.label(),
            total,
        });
    }

    Some(TrendResult { points })
}

/// Compare the measure across every dimension column.
///
/// Returns `None` when the dataset has no dimensions.
#[must_use]
pub fn run_compare(dataset: &CanonicalDataset) -> Option<CompareResult> {
    if dataset.dimension_count() == 0 {
        return None;
    }
    let comparisons = dataset
        .dimensions
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            (
                CanonicalDataset::dimension_name(idx + 1),
                grouped_totals(column, &dataset.measure),
            )
        })
        .collect();
    Some(CompareResult { comparisons })
}

/// Sum the measure per group label, descending by total; ties ordered
/// by label for determinism. Missing keys share one explicit bucket.
fn grouped_totals(keys: &[Value], measure: &[Value]) -> Vec<GroupTotal> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for (key, value) in keys.iter().zip(measure) {
        let amount = value.as_number().unwrap_or(0.0);
        *totals.entry(key.label()).or_insert(0.0) += amount;
    }

    let mut groups: Vec<GroupTotal> = totals
        .into_iter()
        .map(|(key, total)| GroupTotal { key, total })
        .collect();
    groups.sort_by(|a, b| b.total.total_cmp(&a.total).then_with(|| a.key.cmp(&b.key)));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> CanonicalDataset {
        CanonicalDataset {
            active_measure: "revenue".to_string(),
            measure: vec![
                Value::Number(100.0),
                Value::Number(40.0),
                Value::Number(60.0),
                Value::Missing,
            ],
            entity: Some(vec![
                Value::Text("alice".into()),
                Value::Text("bob".into()),
                Value::Text("alice".into()),
                Value::Text("bob".into()),
            ]),
            time: Some(vec![
                Value::Date(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()),
                Value::Date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()),
                Value::Missing,
                Value::Date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()),
            ]),
            dimensions: vec![vec![
                Value::Text("north".into()),
                Value::Text("south".into()),
                Value::Text("north".into()),
                Value::Missing,
            ]],
        }
    }

    #[test]
    fn summary_ignores_missing_measures() {
        let summary = run_summary(&dataset());
        assert_eq!(summary.total_measure, 200.0);
        assert_eq!(summary.entity_count, Some(2));
    }

    #[test]
    fn rank_orders_descending() {
        let rank = run_rank(&dataset()).unwrap();
        assert_eq!(rank.ranking[0].key, "alice");
        assert_eq!(rank.ranking[0].total, 160.0);
        assert_eq!(rank.ranking[1].key, "bob");
        assert_eq!(rank.ranking[1].total, 40.0);
    }

    #[test]
    fn trend_is_chronological_with_trailing_missing_bucket() {
        let trend = run_trend(&dataset()).unwrap();
        let keys: Vec<&str> = trend.points.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["2024-05-01", "2024-05-02", "(missing)"]);
        assert_eq!(trend.points[0].total, 40.0);
    }

    #[test]
    fn compare_covers_each_dimension() {
        let compare = run_compare(&dataset()).unwrap();
        assert_eq!(compare.comparisons.len(), 1);
        let (name, groups) = &compare.comparisons[0];
        assert_eq!(name, "dimension_1");
        assert_eq!(groups[0].key, "north");
        assert_eq!(groups[0].total, 160.0);
    }

    #[test]
    fn absent_columns_yield_no_result() {
        let mut d = dataset();
        d.entity = None;
        d.time = None;
        d.dimensions.clear();
        assert!(run_rank(&d).is_none());
        assert!(run_trend(&d).is_none());
        assert!(run_compare(&d).is_none());
    }
}
