//! Set Records

use serde::{Deserialize, Serialize};

// =============================================================================
// SIDE
// =============================================================================

/// One of the two sides of a match. Serialized as `1` or `2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Side {
    /// Side 1 (listed first in score strings).
    One,
    /// Side 2.
    Two,
}

impl Side {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Array index (0 or 1).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    /// Side with the strictly higher value, `None` on a tie.
    pub fn leading(side1: u32, side2: u32) -> Option<Side> {
        match side1.cmp(&side2) {
            std::cmp::Ordering::Greater => Some(Side::One),
            std::cmp::Ordering::Less => Some(Side::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl From<Side> for u8 {
    fn from(side: Side) -> u8 {
        match side {
            Side::One => 1,
            Side::Two => 2,
        }
    }
}

impl TryFrom<u8> for Side {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Side::One),
            2 => Ok(Side::Two),
            other => Err(format!("invalid side {other}, expected 1 or 2")),
        }
    }
}

// =============================================================================
// SET SCORE
// =============================================================================

/// Score of a single set.
///
/// A tiebreak-only set carries zero game scores and both tiebreak scores.
/// `winning_side` is only set once the set is complete for its format slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetScore {
    /// One-based set number.
    pub set_number: u32,
    /// Games won by side 1.
    #[serde(default)]
    pub side1_score: u32,
    /// Games won by side 2.
    #[serde(default)]
    pub side2_score: u32,
    /// Tiebreak points won by side 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side1_tiebreak_score: Option<u32>,
    /// Tiebreak points won by side 2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side2_tiebreak_score: Option<u32>,
    /// Winner of the set, if complete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_side: Option<Side>,
}

impl SetScore {
    /// Set with game scores only.
    pub fn games(set_number: u32, side1: u32, side2: u32) -> Self {
        Self {
            set_number,
            side1_score: side1,
            side2_score: side2,
            ..Default::default()
        }
    }

    /// Set decided by a tiebreak alone.
    pub fn tiebreak_only(set_number: u32, side1: u32, side2: u32) -> Self {
        Self {
            set_number,
            side1_tiebreak_score: Some(side1),
            side2_tiebreak_score: Some(side2),
            ..Default::default()
        }
    }

    /// Attach tiebreak scores.
    pub fn with_tiebreak(mut self, side1: u32, side2: u32) -> Self {
        self.side1_tiebreak_score = Some(side1);
        self.side2_tiebreak_score = Some(side2);
        self
    }

    /// Attach the winner.
    pub fn with_winner(mut self, side: Option<Side>) -> Self {
        self.winning_side = side;
        self
    }

    /// Game scores as a pair.
    #[inline]
    pub fn game_pair(&self) -> (u32, u32) {
        (self.side1_score, self.side2_score)
    }

    /// Tiebreak scores as a pair, when both are present.
    pub fn tiebreak_pair(&self) -> Option<(u32, u32)> {
        Some((self.side1_tiebreak_score?, self.side2_tiebreak_score?))
    }

    /// Whether any tiebreak score was recorded.
    #[inline]
    pub fn has_tiebreak(&self) -> bool {
        self.side1_tiebreak_score.is_some() || self.side2_tiebreak_score.is_some()
    }

    /// No games recorded but a tiebreak is.
    pub fn is_tiebreak_only(&self) -> bool {
        self.side1_score == 0 && self.side2_score == 0 && self.has_tiebreak()
    }

    /// Same set seen from side 2: every pair swapped.
    pub fn flipped(&self) -> Self {
        Self {
            set_number: self.set_number,
            side1_score: self.side2_score,
            side2_score: self.side1_score,
            side1_tiebreak_score: self.side2_tiebreak_score,
            side2_tiebreak_score: self.side1_tiebreak_score,
            winning_side: self.winning_side.map(Side::opponent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_serializes_as_number() {
        let set = SetScore::games(1, 6, 4).with_winner(Some(Side::One));
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["winningSide"], 1);
        assert!(json.get("side1TiebreakScore").is_none());

        let back: SetScore = serde_json::from_value(json).unwrap();
        assert_eq!(back, set);
        assert!(serde_json::from_str::<Side>("3").is_err());
    }

    #[test]
    fn test_flipped_swaps_everything() {
        let set = SetScore::games(3, 7, 6)
            .with_tiebreak(7, 5)
            .with_winner(Some(Side::One));
        let flipped = set.flipped();
        assert_eq!(flipped.game_pair(), (6, 7));
        assert_eq!(flipped.tiebreak_pair(), Some((5, 7)));
        assert_eq!(flipped.winning_side, Some(Side::Two));
        assert_eq!(flipped.flipped(), set);
    }

    #[test]
    fn test_tiebreak_only_shape() {
        assert!(SetScore::tiebreak_only(3, 10, 8).is_tiebreak_only());
        assert!(!SetScore::games(1, 7, 6).with_tiebreak(7, 5).is_tiebreak_only());
        assert!(!SetScore::games(1, 0, 0).is_tiebreak_only());
    }
}
