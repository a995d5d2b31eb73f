//! Irregular Match Endings

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A match ending other than completed play.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchUpStatus {
    /// A side stopped playing mid-match.
    Retired,
    /// A side never took the court.
    Walkover,
    /// A side was disqualified.
    Defaulted,
    /// Play stopped and will resume later.
    Suspended,
    /// Match will not be played.
    Cancelled,
    /// Play stopped with no result.
    Incomplete,
    /// Match is still being played.
    InProgress,
    /// Played, result not yet reported.
    AwaitingResult,
    /// Match not played because the tie was already decided.
    DeadRubber,
}

impl MatchUpStatus {
    /// Whether play never happened, so any entered score is meaningless.
    pub fn discards_score(self) -> bool {
        matches!(
            self,
            MatchUpStatus::Walkover | MatchUpStatus::Cancelled | MatchUpStatus::DeadRubber
        )
    }

    /// Standard short form used in score strings.
    pub fn abbreviation(self) -> &'static str {
        match self {
            MatchUpStatus::Retired => "RET",
            MatchUpStatus::Walkover => "WO",
            MatchUpStatus::Defaulted => "DEF",
            MatchUpStatus::Suspended => "SUSP",
            MatchUpStatus::Cancelled => "CANC",
            MatchUpStatus::Incomplete => "INC",
            MatchUpStatus::InProgress => "IN",
            MatchUpStatus::AwaitingResult => "AWAIT",
            MatchUpStatus::DeadRubber => "DR",
        }
    }
}
