//! Proposal engine integration tests, including the confidence-range
//! property over arbitrary signals.

use proptest::prelude::*;

use tabula_map::{FuzzyAdvisor, ProposalEngine, score_role};
use tabula_model::{
    CategoricalSignals, ColumnSignal, InferredType, NumericSignals, Role,
};

fn signal(
    name: &str,
    inferred_type: InferredType,
    numeric: Option<NumericSignals>,
    categorical: Option<CategoricalSignals>,
) -> ColumnSignal {
    ColumnSignal {
        name: name.to_string(),
        inferred_type,
        missing_count: 0,
        numeric,
        categorical,
    }
}

fn exam_signals() -> Vec<ColumnSignal> {
    vec![
        signal(
            "score",
            InferredType::Numeric,
            Some(NumericSignals {
                min: 10.0,
                max: 95.0,
                mean: 52.5,
                integer_like: true,
                unique_count: 40,
            }),
            None,
        ),
        signal(
            "student_id",
            InferredType::Categorical,
            None,
            Some(CategoricalSignals {
                unique_count: 40,
                sample_values: vec!["S001".to_string()],
            }),
        ),
        signal("exam_date", InferredType::Date, None, None),
    ]
}

#[test]
fn exam_scenario_proposes_measure_entity_time() {
    let engine = ProposalEngine::new();
    let set = engine.propose(&exam_signals());

    let measure = &set.measures[0];
    assert_eq!(measure.source_column, "score");
    assert!(measure.confidence >= 0.6);

    let entity = set.entity.as_ref().expect("entity proposal");
    assert_eq!(entity.source_column, "student_id");
    assert!(entity.confidence >= 0.4);

    let time = set.time.as_ref().expect("time proposal");
    assert_eq!(time.source_column, "exam_date");
    assert!(time.confidence >= 0.4);

    assert!(set.dimensions.is_empty(), "no dimension proposals expected");
}

#[test]
fn below_threshold_columns_are_omitted_silently() {
    // numeric with no keyword, weak behavior: 0.4 type + 0.0 = below 0.6
    let signals = vec![signal(
        "x",
        InferredType::Numeric,
        Some(NumericSignals {
            min: 1.0,
            max: 1.0,
            mean: 1.0,
            integer_like: true,
            unique_count: 1,
        }),
        None,
    )];
    let set = ProposalEngine::new().propose(&signals);
    assert!(set.is_empty());
}

#[test]
fn advisor_hints_are_attached_but_never_gate() {
    let engine = ProposalEngine::new().with_advisor(Box::new(FuzzyAdvisor::new()));
    let set = engine.propose(&exam_signals());
    // gating identical to the advisor-less engine
    assert_eq!(set.measures.len(), 1);
    assert!(set.entity.is_some());
    // hints, when present, are advisory payloads only
    for proposal in set.iter() {
        if let Some(hint) = &proposal.hint {
            assert!((0.0..=1.0).contains(&hint.confidence));
        }
    }
}

fn arb_inferred_type() -> impl Strategy<Value = InferredType> {
    prop_oneof![
        Just(InferredType::Numeric),
        Just(InferredType::Categorical),
        Just(InferredType::Date),
    ]
}

fn arb_signal() -> impl Strategy<Value = ColumnSignal> {
    (
        "[a-zA-Z_ ]{0,24}",
        arb_inferred_type(),
        0usize..1000,
        proptest::option::of((
            -1.0e6f64..1.0e6,
            -1.0e6f64..1.0e6,
            -1.0e6f64..1.0e6,
            any::<bool>(),
            0usize..10_000,
        )),
    )
        .prop_map(|(name, inferred_type, missing_count, numeric)| ColumnSignal {
            name,
            inferred_type,
            missing_count,
            numeric: numeric.map(|(min, max, mean, integer_like, unique_count)| {
                NumericSignals {
                    min,
                    max,
                    mean,
                    integer_like,
                    unique_count,
                }
            }),
            categorical: None,
        })
}

proptest! {
    #[test]
    fn confidence_always_in_unit_interval(signal in arb_signal()) {
        for role in Role::ALL {
            let (confidence, _) = score_role(&signal, role);
            prop_assert!((0.0..=1.0).contains(&confidence), "role {role}: {confidence}");
        }
    }
}
