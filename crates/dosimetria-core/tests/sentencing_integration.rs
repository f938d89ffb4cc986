//! Integration tests for the full three-phase calculation.

use dosimetria_core::{
    compute_sentence, format_duration, AdjustmentCounts, Circumstance, Fraction,
    JudicialCircumstances, PenaltyTerm, SentencingRange,
};

fn robbery_range() -> SentencingRange {
    SentencingRange::normalize(PenaltyTerm::new(4, 0), PenaltyTerm::new(10, 0))
}

#[test]
fn test_concrete_scenario_end_to_end() {
    let range = robbery_range();
    assert_eq!((range.min_months, range.max_months), (48.0, 120.0));

    let circumstances = JudicialCircumstances::from_negative([
        Circumstance::Culpability,
        Circumstance::CriminalRecord,
    ]);
    let result = compute_sentence(
        &range,
        &circumstances,
        &AdjustmentCounts::new(1, 0),
        Fraction::OneThird,
        Fraction::Zero,
    );

    assert_eq!(result.base_months, 66.0);
    assert!((result.intermediate_months - 77.0).abs() < 1e-9);
    assert!((result.final_months - 102.666_666_666).abs() < 1e-6);

    let duration = format_duration(result.final_months);
    assert_eq!((duration.years, duration.months, duration.days), (8, 7, 0));
    assert_eq!(duration.text, "8 years and 7 months");
}

#[test]
fn test_identity_case() {
    let result = compute_sentence(
        &robbery_range(),
        &JudicialCircumstances::default(),
        &AdjustmentCounts::default(),
        Fraction::Zero,
        Fraction::Zero,
    );
    assert_eq!(result.final_months, 48.0);
}

#[test]
fn test_degenerate_range_yields_zero() {
    for (min, max) in [((3, 0), (3, 0)), ((5, 0), (2, 11)), ((0, 0), (0, 0))] {
        let range = SentencingRange::normalize(
            PenaltyTerm::new(min.0, min.1),
            PenaltyTerm::new(max.0, max.1),
        );
        let result = compute_sentence(
            &range,
            &JudicialCircumstances::from_negative(Circumstance::ALL),
            &AdjustmentCounts::new(3, 0),
            Fraction::TwoThirds,
            Fraction::OneSixth,
        );
        assert_eq!(result.base_months, 0.0);
        assert_eq!(result.intermediate_months, 0.0);
        assert_eq!(result.final_months, 0.0);
        assert_eq!(format_duration(result.final_months).text, "0 months");
    }
}

#[test]
fn test_all_circumstances_reach_maximum() {
    let result = compute_sentence(
        &robbery_range(),
        &JudicialCircumstances::from_negative(Circumstance::ALL),
        &AdjustmentCounts::default(),
        Fraction::Zero,
        Fraction::Zero,
    );
    assert_eq!(result.base_months, 120.0);
    assert_eq!(result.final_months, 120.0);
}

#[test]
fn test_phase_two_never_leaves_range_but_phase_three_may() {
    let range = robbery_range();
    let high = compute_sentence(
        &range,
        &JudicialCircumstances::from_negative(Circumstance::ALL),
        &AdjustmentCounts::new(1_000_000, 0),
        Fraction::OneHalf,
        Fraction::Zero,
    );
    assert_eq!(high.intermediate_months, 120.0);
    assert_eq!(high.final_months, 180.0);

    let low = compute_sentence(
        &range,
        &JudicialCircumstances::default(),
        &AdjustmentCounts::new(0, 1_000_000),
        Fraction::Zero,
        Fraction::TwoThirds,
    );
    assert_eq!(low.intermediate_months, 48.0);
    assert!((low.final_months - 16.0).abs() < 1e-9);
}

#[test]
fn test_short_sentence_formats_in_days() {
    // 1 month range minimum, large decrease: 1 * (1 - 2/3) = 1/3 month = 10 days.
    let range = SentencingRange::normalize(PenaltyTerm::new(0, 1), PenaltyTerm::new(0, 6));
    let result = compute_sentence(
        &range,
        &JudicialCircumstances::default(),
        &AdjustmentCounts::default(),
        Fraction::Zero,
        Fraction::TwoThirds,
    );
    let duration = format_duration(result.final_months);
    assert_eq!((duration.years, duration.months, duration.days), (0, 0, 10));
    assert_eq!(duration.text, "10 days");
}
