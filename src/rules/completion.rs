//! Set Completion Rules
//!
//! Answers, for one set slot, whether a score pair calls for a tiebreak,
//! how high a score may plausibly go, whether the set is over and who
//! won it.

use crate::format::{MatchFormat, SetFormat, TiebreakFormat};
use crate::score::{SetScore, Side};

// =============================================================================
// SLOT RESOLUTION
// =============================================================================

/// Rules for the set at zero-based `set_index`.
///
/// The final-set override applies only to the last possible slot.
pub fn format_for_index(set_index: usize, format: &MatchFormat) -> SetFormat {
    match format.final_set_format {
        Some(final_set) if set_index == format.final_set_index() => final_set,
        _ => format.set_format,
    }
}

/// Slot has a tiebreak target but no regular game target.
#[inline]
pub fn is_tiebreak_only(set_format: &SetFormat) -> bool {
    set_format.is_tiebreak_only()
}

// =============================================================================
// TIEBREAK TRIGGER AND LIMITS
// =============================================================================

/// True iff the game pair is `{T, T+1}` in either order, `T` being the
/// slot's tiebreak trigger.
pub fn requires_tiebreak(side1: u32, side2: u32, set_format: &SetFormat) -> bool {
    let Some(trigger) = set_format.tiebreak_trigger() else {
        return false;
    };
    let (low, high) = (side1.min(side2), side1.max(side2));
    low == trigger && trigger.checked_add(1) == Some(high)
}

/// Ceiling `side`'s score may reach before the set is necessarily over,
/// given the opponent's current score in `pair`.
///
/// `None` for slots with no target (timed sets).
pub fn max_allowed_score(side: Side, pair: (u32, u32), set_format: &SetFormat) -> Option<u32> {
    let target = if set_format.is_tiebreak_only() {
        set_format.tiebreak_to()?
    } else {
        set_format.set_to?
    };
    let opponent = match side {
        Side::One => pair.1,
        Side::Two => pair.0,
    };

    let ceiling = if opponent.saturating_add(1) < target {
        target.saturating_add(2)
    } else if opponent.saturating_add(1) == target {
        target.saturating_add(1)
    } else if opponent == target {
        target.saturating_add(2)
    } else {
        // Past the trigger: extended set such as 9-7
        opponent.saturating_add(2)
    };
    Some(ceiling)
}

/// Winning tiebreak score implied by the loser's score.
pub fn infer_tiebreak_winner_score(loser_score: u32, tiebreak: &TiebreakFormat) -> u32 {
    if tiebreak.no_ad {
        tiebreak.tiebreak_to
    } else {
        tiebreak.tiebreak_to.max(loser_score.saturating_add(2))
    }
}

// =============================================================================
// COMPLETION AND WINNER
// =============================================================================

/// Whether `set` is finished under `set_format`.
pub fn is_slot_complete(set_format: &SetFormat, set: &SetScore) -> bool {
    if set_format.is_tiebreak_only() {
        let (Some(tiebreak), Some((side1, side2))) =
            (set_format.effective_tiebreak(), set.tiebreak_pair())
        else {
            return false;
        };
        let (low, high) = (side1.min(side2), side1.max(side2));
        // A tiebreak to 1 is a single deciding point
        return if tiebreak.no_ad || tiebreak.tiebreak_to == 1 {
            high >= tiebreak.tiebreak_to && high > low
        } else {
            high >= tiebreak.tiebreak_to && high - low >= 2
        };
    }

    if set_format.timed {
        return set.side1_score != set.side2_score || timed_tiebreak_leader(set).is_some();
    }

    let Some(set_to) = set_format.set_to else {
        return false;
    };
    let (side1, side2) = set.game_pair();
    if requires_tiebreak(side1, side2, set_format) {
        return set.has_tiebreak();
    }
    let (low, high) = (side1.min(side2), side1.max(side2));
    high >= set_to && high - low >= 2
}

/// Winner of `set` under `set_format`, if the set is complete.
pub fn slot_winner(set_format: &SetFormat, set: &SetScore) -> Option<Side> {
    if !is_slot_complete(set_format, set) {
        return None;
    }
    if set_format.is_tiebreak_only() {
        let (side1, side2) = set.tiebreak_pair()?;
        return Side::leading(side1, side2);
    }
    Side::leading(set.side1_score, set.side2_score).or_else(|| timed_tiebreak_leader(set))
}

fn timed_tiebreak_leader(set: &SetScore) -> Option<Side> {
    let (side1, side2) = set.tiebreak_pair()?;
    Side::leading(side1, side2)
}

/// Whether the set at `set_index` is complete for its slot in `format`.
pub fn is_set_complete(set_index: usize, set: &SetScore, format: &MatchFormat) -> bool {
    is_slot_complete(&format_for_index(set_index, format), set)
}

/// Winner of the set at `set_index`, if complete.
pub fn set_winner(set_index: usize, set: &SetScore, format: &MatchFormat) -> Option<Side> {
    slot_winner(&format_for_index(set_index, format), set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six() -> SetFormat {
        SetFormat::games(6, 7)
    }

    #[test]
    fn test_format_for_index_final_override() {
        let format = MatchFormat::match_tiebreak_decider();
        assert!(!format_for_index(0, &format).is_tiebreak_only());
        assert!(!format_for_index(1, &format).is_tiebreak_only());
        assert!(format_for_index(2, &format).is_tiebreak_only());

        let exactly = MatchFormat::exactly(2, six()).with_final_set(SetFormat::tiebreak_only(10));
        assert!(format_for_index(1, &exactly).is_tiebreak_only());
    }

    #[test]
    fn test_requires_tiebreak_pairs() {
        assert!(requires_tiebreak(7, 6, &six()));
        assert!(requires_tiebreak(6, 7, &six()));
        assert!(!requires_tiebreak(6, 6, &six()));
        assert!(!requires_tiebreak(7, 5, &six()));
        assert!(!requires_tiebreak(8, 6, &six()));
        assert!(!requires_tiebreak(7, 6, &SetFormat::advantage(6)));

        let short = SetFormat::games(4, 7).with_tiebreak_at(4);
        assert!(requires_tiebreak(5, 4, &short));
        assert!(!requires_tiebreak(4, 3, &short));
    }

    #[test]
    fn test_max_allowed_score() {
        let format = six();
        assert_eq!(max_allowed_score(Side::One, (0, 3), &format), Some(8));
        assert_eq!(max_allowed_score(Side::One, (0, 5), &format), Some(7));
        assert_eq!(max_allowed_score(Side::One, (0, 6), &format), Some(8));
        assert_eq!(max_allowed_score(Side::Two, (7, 0), &format), Some(9));
        assert_eq!(max_allowed_score(Side::One, (0, 0), &SetFormat::timed()), None);
        assert_eq!(
            max_allowed_score(Side::One, (0, 9), &SetFormat::tiebreak_only(10)),
            Some(11)
        );
    }

    #[test]
    fn test_infer_tiebreak_winner_score() {
        assert_eq!(infer_tiebreak_winner_score(5, &TiebreakFormat::new(7)), 7);
        assert_eq!(infer_tiebreak_winner_score(9, &TiebreakFormat::new(7)), 11);
        assert_eq!(infer_tiebreak_winner_score(9, &TiebreakFormat::no_ad(10)), 10);
    }

    #[test]
    fn test_regular_set_completion() {
        let format = six();
        assert!(is_slot_complete(&format, &SetScore::games(1, 6, 4)));
        assert!(is_slot_complete(&format, &SetScore::games(1, 7, 5)));
        assert!(!is_slot_complete(&format, &SetScore::games(1, 6, 5)));
        assert!(!is_slot_complete(&format, &SetScore::games(1, 3, 2)));
        assert!(!is_slot_complete(&format, &SetScore::games(1, 7, 6)));
        assert!(is_slot_complete(
            &format,
            &SetScore::games(1, 7, 6).with_tiebreak(7, 5)
        ));
        assert!(is_slot_complete(&SetFormat::advantage(6), &SetScore::games(1, 9, 7)));
    }

    #[test]
    fn test_tiebreak_only_completion() {
        let format = SetFormat::tiebreak_only(10);
        assert!(is_slot_complete(&format, &SetScore::tiebreak_only(1, 10, 8)));
        assert!(is_slot_complete(&format, &SetScore::tiebreak_only(1, 12, 10)));
        assert!(!is_slot_complete(&format, &SetScore::tiebreak_only(1, 10, 9)));
        assert!(!is_slot_complete(&format, &SetScore::tiebreak_only(1, 8, 6)));

        let no_ad = MatchFormat::single_tiebreak_no_ad(10).set_format;
        assert!(is_slot_complete(&no_ad, &SetScore::tiebreak_only(1, 10, 9)));
        assert!(!is_slot_complete(&no_ad, &SetScore::tiebreak_only(1, 9, 9)));

        let set_level_no_ad = SetFormat {
            no_ad: true,
            ..SetFormat::tiebreak_only(10)
        };
        assert!(is_slot_complete(&set_level_no_ad, &SetScore::tiebreak_only(1, 10, 9)));
        assert_eq!(
            slot_winner(&set_level_no_ad, &SetScore::tiebreak_only(1, 10, 9)),
            Some(Side::One)
        );

        let deciding_point = SetFormat::tiebreak_only(1);
        assert!(is_slot_complete(&deciding_point, &SetScore::tiebreak_only(1, 0, 1)));
    }

    #[test]
    fn test_timed_completion() {
        let format = SetFormat::timed();
        assert!(is_slot_complete(&format, &SetScore::games(1, 12, 9)));
        assert!(!is_slot_complete(&format, &SetScore::games(1, 8, 8)));
        let decided = SetScore::games(1, 8, 8).with_tiebreak(3, 7);
        assert_eq!(slot_winner(&format, &decided), Some(Side::Two));
    }

    #[test]
    fn test_set_winner_by_games_not_tiebreak() {
        let format = MatchFormat::standard();
        let set = SetScore::games(1, 6, 7).with_tiebreak(5, 7);
        assert_eq!(set_winner(0, &set, &format), Some(Side::Two));
        assert_eq!(set_winner(0, &SetScore::games(1, 3, 2), &format), None);
    }

    #[test]
    fn test_is_set_complete_uses_final_set_override() {
        let format = MatchFormat::match_tiebreak_decider();
        let decider = SetScore::tiebreak_only(3, 10, 8);
        assert!(is_set_complete(2, &decider, &format));
        assert!(!is_set_complete(0, &decider, &format));
        assert!(!is_set_complete(2, &SetScore::tiebreak_only(3, 10, 9), &format));
        assert!(is_set_complete(0, &SetScore::games(1, 6, 4), &format));
    }

    #[test]
    fn test_huge_targets_saturate() {
        let format = SetFormat::games(u32::MAX, 7);
        assert!(!requires_tiebreak(u32::MAX, u32::MAX, &format));
        assert_eq!(max_allowed_score(Side::One, (0, 0), &format), Some(u32::MAX));
        assert_eq!(
            max_allowed_score(Side::One, (0, u32::MAX - 1), &format),
            Some(u32::MAX)
        );
    }
}
