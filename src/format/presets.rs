//! Common Match Formats
//!
//! Descriptors for the formats most hosts need, equivalent to what a
//! format-code interpreter returns for the usual codes.

use crate::format::descriptor::{MatchFormat, SetFormat, TiebreakFormat};

impl MatchFormat {
    /// Best of 3 six-game sets, tiebreak to 7 at 6-6 (`SET3-S:6/TB7`).
    pub const fn standard() -> Self {
        Self::best_of(3, SetFormat::games(6, 7))
    }

    /// Best of 3 with a match tiebreak to 10 instead of a final set
    /// (`SET3-S:6/TB7-F:TB10`).
    pub const fn match_tiebreak_decider() -> Self {
        Self::standard().with_final_set(SetFormat::tiebreak_only(10))
    }

    /// Best of 5 six-game sets, tiebreak to 7 at 6-6 (`SET5-S:6/TB7`).
    pub const fn best_of_five() -> Self {
        Self::best_of(5, SetFormat::games(6, 7))
    }

    /// Best of 3 short sets to 4, tiebreak to 7 at 4-4 (`SET3-S:4/TB7@4`).
    pub const fn short_sets() -> Self {
        Self::best_of(3, SetFormat::games(4, 7).with_tiebreak_at(4))
    }

    /// Best of 5 with an advantage final set (`SET5-S:6/TB7-F:6`).
    pub const fn advantage_final_set() -> Self {
        Self::best_of_five().with_final_set(SetFormat::advantage(6))
    }

    /// Exactly `n` timed sets (`SET{n}X-S:T20`).
    pub const fn timed_exactly(n: u32) -> Self {
        Self::exactly(n, SetFormat::timed())
    }

    /// Exactly `n` tiebreak-only sets to `tiebreak_to` (`SET{n}X-S:TB{to}`).
    pub const fn tiebreak_sets_exactly(n: u32, tiebreak_to: u32) -> Self {
        Self::exactly(n, SetFormat::tiebreak_only(tiebreak_to))
    }

    /// Single no-ad tiebreak to `tiebreak_to` (`SET1-S:TB{to}NOAD`).
    pub const fn single_tiebreak_no_ad(tiebreak_to: u32) -> Self {
        Self::best_of(
            1,
            SetFormat {
                set_to: None,
                tiebreak_at: None,
                tiebreak: Some(TiebreakFormat::no_ad(tiebreak_to)),
                no_ad: true,
                timed: false,
            },
        )
    }

    /// Look up a preset by its short name.
    pub fn preset(name: &str) -> Option<Self> {
        let format = match name {
            "standard" => Self::standard(),
            "match-tiebreak" => Self::match_tiebreak_decider(),
            "best-of-five" => Self::best_of_five(),
            "short-sets" => Self::short_sets(),
            "advantage-final" => Self::advantage_final_set(),
            "timed-3" => Self::timed_exactly(3),
            "tiebreak-sets-3" => Self::tiebreak_sets_exactly(3, 7),
            _ => return None,
        };
        Some(format)
    }
}

/// Names accepted by [`MatchFormat::preset`].
pub const PRESET_NAMES: [&str; 7] = [
    "standard",
    "match-tiebreak",
    "best-of-five",
    "short-sets",
    "advantage-final",
    "timed-3",
    "tiebreak-sets-3",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::SetCount;

    #[test]
    fn test_all_presets_resolve_and_validate() {
        for name in PRESET_NAMES {
            let format = MatchFormat::preset(name).unwrap();
            assert!(format.validate().is_ok(), "{name} should validate");
        }
        assert!(MatchFormat::preset("unknown").is_none());
    }

    #[test]
    fn test_match_tiebreak_decider_final_slot() {
        let format = MatchFormat::match_tiebreak_decider();
        assert_eq!(format.set_count, SetCount::BestOf(3));
        assert_eq!(format.final_set_index(), 2);
        assert!(format.final_set_format.unwrap().is_tiebreak_only());
    }
}
