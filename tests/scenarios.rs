//! End-to-end scoring scenarios through the public API.

use racquet_score::{
    format_sets, parse_score, ComplementAdvice, ComplementRequest, DeclineReason, MatchFormat,
    MatchUpStatus, SetFormat, Side, SmartComplement,
};

#[test]
fn test_standard_best_of_three_with_tiebreak() {
    let result = parse_score("6-4 3-6 7-6(5)", &MatchFormat::standard());

    assert!(result.valid);
    assert_eq!(result.sets.len(), 3);
    let decider = &result.sets[2];
    assert_eq!(decider.game_pair(), (7, 6));
    assert_eq!(decider.side1_tiebreak_score, Some(7));
    assert_eq!(decider.side2_tiebreak_score, Some(5));
    assert_eq!(decider.winning_side, Some(Side::One));
    assert!(result.match_complete);
    assert_eq!(result.winner, Some(Side::One));
}

#[test]
fn test_match_tiebreak_decider() {
    let result = parse_score("6-4 3-6 [10-8]", &MatchFormat::match_tiebreak_decider());

    assert!(result.valid);
    let decider = &result.sets[2];
    assert!(decider.is_tiebreak_only());
    assert_eq!(decider.game_pair(), (0, 0));
    assert_eq!(decider.tiebreak_pair(), Some((10, 8)));
    assert_eq!(decider.winning_side, Some(Side::One));
    assert_eq!(result.formatted_score, "6-4 3-6 [10-8]");
}

#[test]
fn test_retirement_keeps_score() {
    let result = parse_score("6-0 3-2 RET", &MatchFormat::standard());

    assert!(result.valid);
    assert_eq!(result.sets.len(), 2);
    assert_eq!(result.match_up_status, Some(MatchUpStatus::Retired));
    assert!(!result.match_complete);
    assert!(result.incomplete);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["matchUpStatus"], "RETIRED");
}

#[test]
fn test_walkover_discards_score() {
    for text in ["WO", "6-0 WO"] {
        let result = parse_score(text, &MatchFormat::standard());
        assert!(result.sets.is_empty(), "input {text:?}");
        assert_eq!(result.match_up_status, Some(MatchUpStatus::Walkover));
    }
}

#[test]
fn test_smart_complement_predictions() {
    let format = MatchFormat::best_of(3, SetFormat::games(6, 7));
    let advisor = SmartComplement::default();
    let advise = |digit| {
        advisor.advise(
            &ComplementRequest {
                set_index: 0,
                digit,
                side: Side::One,
                opponent_value: 0,
                history: &[],
                shift: false,
            },
            &format,
        )
    };

    assert_eq!(advise(2), ComplementAdvice::Apply { side1: 2, side2: 6 });
    assert_eq!(advise(5), ComplementAdvice::Apply { side1: 5, side2: 7 });
    assert_eq!(
        advise(6),
        ComplementAdvice::Decline {
            reason: DeclineReason::NoPrediction
        }
    );
}

#[test]
fn test_exactly_three_timed_sets() {
    let format = MatchFormat::timed_exactly(3);

    let result = parse_score("12-9 8-10 11-7", &format);
    assert!(result.valid);
    assert_eq!(result.sets.len(), 3);
    assert!(result.match_complete);

    for text in ["12-9 8-10", "12-9 8-10 11-7 4-4", "12-9 8-10 11-7(3)", "1298 10-11 7-6"] {
        assert!(!parse_score(text, &format).valid, "input {text:?}");
    }
}

#[test]
fn test_early_tiebreak_marker_is_lenient() {
    let result = parse_score("6-4 6-5(4)", &MatchFormat::standard());

    assert!(result.valid);
    assert_eq!(result.sets.len(), 2);
    assert_eq!(result.sets[1].tiebreak_pair(), Some((7, 4)));
    assert!(!result.ambiguities.is_empty());
    assert!(!result.suggestions.is_empty());
    assert!(result.confidence < 1.0);
}

#[test]
fn test_formatted_score_is_canonical() {
    let result = parse_score("6/4, 6:7 (5)  7-5", &MatchFormat::standard());
    assert!(result.valid);
    assert_eq!(result.formatted_score, "6-4 6-7(5) 7-5");
    assert_eq!(format_sets(&result.sets), "6-4 6-7(5) 7-5");
    assert_eq!(result.winner, Some(Side::One));
}

#[test]
fn test_short_sets() {
    let result = parse_score("4-2 5-4(3)", &MatchFormat::short_sets());
    assert!(result.valid);
    assert!(result.match_complete);
    assert_eq!(result.sets[1].tiebreak_pair(), Some((7, 3)));
}

#[test]
fn test_concurrent_parses_are_independent() {
    let handles: Vec<_> = ["6-4 6-4", "4-6 4-6", "6-0 3-2 RET"]
        .into_iter()
        .map(|text| std::thread::spawn(move || parse_score(text, &MatchFormat::standard())))
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results[0].winner, Some(Side::One));
    assert_eq!(results[1].winner, Some(Side::Two));
    assert_eq!(results[2].match_up_status, Some(MatchUpStatus::Retired));
}
