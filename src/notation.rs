//! Score Notation
//!
//! Renders set records back into the text the parser reads:
//!
//! - regular set: `6-4`, with the loser's tiebreak points appended as `7-6(5)`
//! - tiebreak-only set: `[10-8]`, in side order
//!
//! Sets are joined by single spaces.

use crate::score::{MatchUpStatus, SetScore, Side};

/// Render `sets` from side 1's point of view.
pub fn format_sets(sets: &[SetScore]) -> String {
    sets.iter().map(format_set).collect::<Vec<_>>().join(" ")
}

/// Render `sets` with `perspective`'s scores listed first.
pub fn format_sets_for(sets: &[SetScore], perspective: Side) -> String {
    match perspective {
        Side::One => format_sets(sets),
        Side::Two => sets
            .iter()
            .map(|set| format_set(&set.flipped()))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Render `sets` followed by the abbreviation of an irregular ending.
pub fn format_with_status(sets: &[SetScore], status: Option<MatchUpStatus>) -> String {
    let score = format_sets(sets);
    match status {
        None => score,
        Some(status) if score.is_empty() => status.abbreviation().to_string(),
        Some(status) => format!("{score} {}", status.abbreviation()),
    }
}

fn format_set(set: &SetScore) -> String {
    let (side1, side2) = set.game_pair();

    if set.is_tiebreak_only() {
        let tiebreak1 = set.side1_tiebreak_score.unwrap_or_default();
        let tiebreak2 = set.side2_tiebreak_score.unwrap_or_default();
        return format!("[{tiebreak1}-{tiebreak2}]");
    }

    let Some((tiebreak1, tiebreak2)) = set.tiebreak_pair() else {
        return format!("{side1}-{side2}");
    };

    // Winner by games; level games (timed sets) fall back to the tiebreak
    match Side::leading(side1, side2).or_else(|| Side::leading(tiebreak1, tiebreak2)) {
        Some(Side::One) => format!("{side1}-{side2}({tiebreak2})"),
        Some(Side::Two) => format!("{side1}-{side2}({tiebreak1})"),
        None => format!("{side1}-{side2}({tiebreak1}-{tiebreak2})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<SetScore> {
        vec![
            SetScore::games(1, 6, 4),
            SetScore::games(2, 6, 7).with_tiebreak(3, 7),
            SetScore::tiebreak_only(3, 8, 10),
        ]
    }

    #[test]
    fn test_format_sets() {
        assert_eq!(format_sets(&sample()), "6-4 6-7(3) [8-10]");
        assert_eq!(format_sets(&[]), "");
    }

    #[test]
    fn test_loser_tiebreak_follows_games() {
        let set = SetScore::games(1, 7, 6).with_tiebreak(9, 11);
        assert_eq!(format_sets(&[set]), "7-6(9)");
    }

    #[test]
    fn test_level_games_use_tiebreak() {
        let set = SetScore::games(1, 8, 8).with_tiebreak(3, 7);
        assert_eq!(format_sets(&[set]), "8-8(3)");
        let unresolved = SetScore::games(1, 8, 8).with_tiebreak(5, 5);
        assert_eq!(format_sets(&[unresolved]), "8-8(5-5)");
    }

    #[test]
    fn test_perspective() {
        assert_eq!(format_sets_for(&sample(), Side::Two), "4-6 7-6(3) [10-8]");
    }

    #[test]
    fn test_with_status() {
        let sets = [SetScore::games(1, 6, 0), SetScore::games(2, 3, 2)];
        assert_eq!(
            format_with_status(&sets, Some(MatchUpStatus::Retired)),
            "6-0 3-2 RET"
        );
        assert_eq!(format_with_status(&[], Some(MatchUpStatus::Walkover)), "WO");
        assert_eq!(format_with_status(&sets, None), "6-0 3-2");
    }
}
