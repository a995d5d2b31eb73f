//! Property-based tests for the parser and completion rules
//!
//! - canonical notation parses back to the same sets
//! - parsing is deterministic and total
//! - the tiebreak trigger is symmetric
//! - a complete set never absorbs further digits
//! - match completion follows sets won

use proptest::prelude::*;
use racquet_score::rules::{evaluate_match, requires_tiebreak, sets_to_win};
use racquet_score::{format_sets, parse_score, MatchFormat, SetFormat, SetScore, Side};

/// A complete six-game set, tiebreak to 7, from the winner's point of view:
/// `(winner games, loser games, loser tiebreak points)`.
fn won_set_strategy() -> impl Strategy<Value = (u32, u32, Option<u32>)> {
    prop_oneof![
        (0u32..=4).prop_map(|loser| (6, loser, None)),
        Just((7, 5, None)),
        (0u32..=20).prop_map(|loser_tiebreak| (7, 6, Some(loser_tiebreak))),
    ]
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::One), Just(Side::Two)]
}

fn build_set(number: u32, winner: Side, shape: (u32, u32, Option<u32>)) -> SetScore {
    let (games_won, games_lost, loser_tiebreak) = shape;
    let mut set = SetScore::games(number, games_won, games_lost);
    if let Some(lost) = loser_tiebreak {
        set = set.with_tiebreak(lost.saturating_add(2).max(7), lost);
    }
    let set = set.with_winner(Some(Side::One));
    match winner {
        Side::One => set,
        Side::Two => set.flipped(),
    }
}

/// Sets of a best-of-3 match that stops as soon as it is decided.
fn match_strategy() -> impl Strategy<Value = Vec<SetScore>> {
    prop::collection::vec((side_strategy(), won_set_strategy()), 1..=3).prop_map(|raw| {
        let mut sets = Vec::new();
        let mut won = [0u32; 2];
        for (winner, shape) in raw {
            if won.iter().any(|&w| w >= 2) {
                break;
            }
            won[winner.index()] += 1;
            sets.push(build_set(sets.len() as u32 + 1, winner, shape));
        }
        sets
    })
}

proptest! {
    #[test]
    fn canonical_notation_round_trips(sets in match_strategy()) {
        let format = MatchFormat::standard();
        let text = format_sets(&sets);
        let result = parse_score(&text, &format);

        prop_assert!(result.valid, "{text:?}: {:?}", result.errors);
        prop_assert_eq!(&result.sets, &sets);
        prop_assert_eq!(&result.formatted_score, &text);
    }

    #[test]
    fn match_tiebreak_round_trips(
        first in (side_strategy(), won_set_strategy()),
        second_shape in won_set_strategy(),
        loser_points in 0u32..=15,
    ) {
        let (first_winner, first_shape) = first;
        let decider_winner_points = (loser_points + 2).max(10);
        let decider = match first_winner {
            Side::One => SetScore::tiebreak_only(3, loser_points, decider_winner_points),
            Side::Two => SetScore::tiebreak_only(3, decider_winner_points, loser_points),
        }
        .with_winner(Some(first_winner.opponent()));
        let sets = vec![
            build_set(1, first_winner, first_shape),
            build_set(2, first_winner.opponent(), second_shape),
            decider,
        ];

        let result = parse_score(&format_sets(&sets), &MatchFormat::match_tiebreak_decider());
        prop_assert_eq!(&result.sets, &sets);
        prop_assert_eq!(result.winner, Some(first_winner.opponent()));
    }

    #[test]
    fn parsing_is_deterministic(text in "[0-9 ()\\[\\]/:,;-]{0,24}") {
        let format = MatchFormat::standard();
        prop_assert_eq!(parse_score(&text, &format), parse_score(&text, &format));
    }

    #[test]
    fn parsing_never_panics(text in "\\PC{0,40}") {
        for format in [
            MatchFormat::standard(),
            MatchFormat::match_tiebreak_decider(),
            MatchFormat::timed_exactly(2),
        ] {
            let result = parse_score(&text, &format);
            prop_assert!((0.0..=1.0).contains(&result.confidence));
            prop_assert!(result.valid == result.errors.is_empty());
        }
    }

    #[test]
    fn tiebreak_trigger_is_symmetric(trigger in 1u32..=12, a in 0u32..=15, b in 0u32..=15) {
        let set_format = SetFormat::games(trigger, 7);
        prop_assert!(requires_tiebreak(trigger, trigger + 1, &set_format));
        prop_assert!(requires_tiebreak(trigger + 1, trigger, &set_format));

        let expected = a.min(b) == trigger && a.max(b) == trigger + 1;
        prop_assert_eq!(requires_tiebreak(a, b, &set_format), expected);
    }

    #[test]
    fn complete_set_absorbs_no_digits(
        shape in prop_oneof![(0u32..=4).prop_map(|l| (6, l)), Just((7, 5))],
        digit in 0u32..=9,
    ) {
        let (won, lost) = shape;
        let text = format!("{won}-{lost}{digit}");
        let result = parse_score(&text, &MatchFormat::standard());
        prop_assert_eq!(result.sets[0].game_pair(), (won, lost));
        prop_assert_eq!(result.sets[0].winning_side, Some(Side::One));
    }

    #[test]
    fn match_completion_follows_sets_won(
        winners in prop::collection::vec(side_strategy(), 0..=5),
        best_of in prop_oneof![Just(3u32), Just(5u32)],
    ) {
        let format = MatchFormat::best_of(best_of, SetFormat::games(6, 7));
        let sets: Vec<SetScore> = winners
            .iter()
            .enumerate()
            .map(|(i, &side)| build_set(i as u32 + 1, side, (6, 0, None)))
            .collect();

        let needed = sets_to_win(&format);
        prop_assert_eq!(needed, best_of.div_ceil(2));

        let won_one = winners.iter().filter(|&&s| s == Side::One).count() as u32;
        let won_two = winners.len() as u32 - won_one;
        let outcome = evaluate_match(&sets, &format);
        prop_assert_eq!(outcome.complete, won_one >= needed || won_two >= needed);
        prop_assert_eq!(outcome.sets_won, [won_one, won_two]);
    }
}
