//! Match Outcome Rules
//!
//! Decides whether a sequence of sets finishes the match, and for whom.

use serde::Serialize;

use crate::format::{MatchFormat, SetCount};
use crate::rules::completion::format_for_index;
use crate::score::{SetScore, Side};

/// Sets a side must win to take the match: `ceil(n / 2)`.
pub fn sets_to_win(format: &MatchFormat) -> u32 {
    format.max_sets().div_ceil(2)
}

fn sets_won(sets: &[SetScore]) -> [u32; 2] {
    sets.iter()
        .filter_map(|set| set.winning_side)
        .fold([0, 0], |mut won, side| {
            won[side.index()] += 1;
            won
        })
}

/// True iff either side has won `sets_to_win` sets.
pub fn is_match_complete(sets: &[SetScore], sets_to_win: u32) -> bool {
    match_winner(sets, sets_to_win).is_some()
}

/// Side that has won `sets_to_win` sets, if any.
pub fn match_winner(sets: &[SetScore], sets_to_win: u32) -> Option<Side> {
    if sets_to_win == 0 {
        return None;
    }
    let won = sets_won(sets);
    if won[0] >= sets_to_win {
        Some(Side::One)
    } else if won[1] >= sets_to_win {
        Some(Side::Two)
    } else {
        None
    }
}

// =============================================================================
// FORMAT-AWARE OUTCOME
// =============================================================================

/// Match state derived from its sets and format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    /// No further sets will be played.
    pub complete: bool,
    /// Winner, when complete and not drawn.
    pub winner: Option<Side>,
    /// Sets won per side.
    pub sets_won: [u32; 2],
    /// Games won per side, tiebreak-only sets excluded.
    pub games_won: [u32; 2],
}

/// Evaluate `sets` against every kind of match format.
///
/// - best-of: first to `sets_to_win`
/// - exactly-N: complete once N sets are decided (timed sets: entered),
///   most sets won
/// - aggregate: complete once every regular slot is entered, most games
///   won, ties going to a tiebreak-only decider
pub fn evaluate_match(sets: &[SetScore], format: &MatchFormat) -> MatchOutcome {
    let mut outcome = MatchOutcome {
        sets_won: sets_won(sets),
        games_won: sets.iter().fold([0, 0], |mut games, set| {
            games[0] = games[0].saturating_add(set.side1_score);
            games[1] = games[1].saturating_add(set.side2_score);
            games
        }),
        ..Default::default()
    };

    if format.aggregate {
        evaluate_aggregate(sets, format, &mut outcome);
        return outcome;
    }

    match format.set_count {
        SetCount::BestOf(_) => {
            outcome.winner = match_winner(sets, sets_to_win(format));
            outcome.complete = outcome.winner.is_some();
        }
        SetCount::Exactly(n) => {
            // Timed sets count once entered, even when level
            outcome.complete = sets.len() >= n as usize
                && sets.iter().take(n as usize).enumerate().all(|(index, set)| {
                    set.winning_side.is_some() || format_for_index(index, format).timed
                });
            if outcome.complete {
                outcome.winner = Side::leading(outcome.sets_won[0], outcome.sets_won[1]);
            }
        }
    }
    outcome
}

fn evaluate_aggregate(sets: &[SetScore], format: &MatchFormat, outcome: &mut MatchOutcome) {
    let regular_slots = (0..format.max_sets() as usize)
        .filter(|&index| !format_for_index(index, format).is_tiebreak_only())
        .count();
    let regular_played = sets.iter().filter(|set| !set.is_tiebreak_only()).count();
    if regular_played < regular_slots {
        return;
    }

    let [side1, side2] = outcome.games_won;
    outcome.winner = Side::leading(side1, side2).or_else(|| {
        sets.iter()
            .filter(|set| set.is_tiebreak_only())
            .find_map(|set| set.winning_side)
    });
    outcome.complete = outcome.winner.is_some();
}
