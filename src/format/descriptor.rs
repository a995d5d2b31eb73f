//! Format Descriptor Types
//!
//! Per-set and per-match scoring configuration. Every rule in
//! [`crate::rules`] is a function of one of these values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// TIEBREAK FORMAT
// =============================================================================

/// How a tiebreak game is won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TiebreakFormat {
    /// Points needed to win the tiebreak (7, 10, ...).
    pub tiebreak_to: u32,
    /// Reaching `tiebreak_to` first wins outright, no two-point margin.
    #[serde(default)]
    pub no_ad: bool,
}

impl TiebreakFormat {
    /// Tiebreak to `tiebreak_to` with a two-point margin.
    pub const fn new(tiebreak_to: u32) -> Self {
        Self {
            tiebreak_to,
            no_ad: false,
        }
    }

    /// Tiebreak won by whoever reaches `tiebreak_to` first.
    pub const fn no_ad(tiebreak_to: u32) -> Self {
        Self {
            tiebreak_to,
            no_ad: true,
        }
    }
}

// =============================================================================
// SET FORMAT
// =============================================================================

/// Scoring rules for one set slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFormat {
    /// Games needed to win the set. `None` for tiebreak-only and some timed slots.
    #[serde(default)]
    pub set_to: Option<u32>,
    /// Game count at which the tiebreak is played. Defaults to `set_to`.
    #[serde(default)]
    pub tiebreak_at: Option<u32>,
    /// Tiebreak rules. `None` means an advantage set (play on until two clear).
    #[serde(default)]
    pub tiebreak: Option<TiebreakFormat>,
    /// No-advantage scoring. Also makes the slot's tiebreak sudden-death.
    #[serde(default)]
    pub no_ad: bool,
    /// Set is played against the clock rather than to a game target.
    #[serde(default)]
    pub timed: bool,
}

impl SetFormat {
    /// Regular set to `set_to` games with a tiebreak to `tiebreak_to` at `set_to`-all.
    pub const fn games(set_to: u32, tiebreak_to: u32) -> Self {
        Self {
            set_to: Some(set_to),
            tiebreak_at: Some(set_to),
            tiebreak: Some(TiebreakFormat::new(tiebreak_to)),
            no_ad: false,
            timed: false,
        }
    }

    /// Set to `set_to` games with no tiebreak.
    pub const fn advantage(set_to: u32) -> Self {
        Self {
            set_to: Some(set_to),
            tiebreak_at: None,
            tiebreak: None,
            no_ad: false,
            timed: false,
        }
    }

    /// Slot decided by a single tiebreak to `tiebreak_to`.
    pub const fn tiebreak_only(tiebreak_to: u32) -> Self {
        Self {
            set_to: None,
            tiebreak_at: None,
            tiebreak: Some(TiebreakFormat::new(tiebreak_to)),
            no_ad: false,
            timed: false,
        }
    }

    /// Timed slot; the higher game count at the whistle wins.
    pub const fn timed() -> Self {
        Self {
            set_to: None,
            tiebreak_at: None,
            tiebreak: None,
            no_ad: false,
            timed: true,
        }
    }

    /// Override the tiebreak trigger.
    pub const fn with_tiebreak_at(mut self, tiebreak_at: u32) -> Self {
        self.tiebreak_at = Some(tiebreak_at);
        self
    }

    /// Slot has a tiebreak target but no regular game target.
    #[inline]
    pub fn is_tiebreak_only(&self) -> bool {
        self.set_to.is_none() && self.tiebreak.is_some() && !self.timed
    }

    /// Game count `T` at which the tiebreak is triggered.
    ///
    /// `None` when the slot has no tiebreak or no game target.
    pub fn tiebreak_trigger(&self) -> Option<u32> {
        self.tiebreak?;
        self.tiebreak_at.or(self.set_to)
    }

    /// Tiebreak target points, if the slot has a tiebreak.
    #[inline]
    pub fn tiebreak_to(&self) -> Option<u32> {
        self.tiebreak.map(|tb| tb.tiebreak_to)
    }

    /// Tiebreak rules as played, with the set-level `no_ad` folded in.
    pub fn effective_tiebreak(&self) -> Option<TiebreakFormat> {
        self.tiebreak.map(|tb| TiebreakFormat {
            no_ad: tb.no_ad || self.no_ad,
            ..tb
        })
    }
}

// =============================================================================
// MATCH FORMAT
// =============================================================================

/// How many sets a match consists of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetCount {
    /// Play stops once a side has won a majority of `n` sets.
    BestOf(u32),
    /// Exactly `n` sets are always played.
    Exactly(u32),
}

impl SetCount {
    /// Number of set slots (`n`).
    #[inline]
    pub fn slots(self) -> u32 {
        match self {
            SetCount::BestOf(n) | SetCount::Exactly(n) => n,
        }
    }
}

/// Complete match scoring descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFormat {
    /// Best-of or exactly-N.
    #[serde(flatten)]
    pub set_count: SetCount,
    /// Rules for every set slot without an override.
    pub set_format: SetFormat,
    /// Rules for the last possible set slot.
    #[serde(default)]
    pub final_set_format: Option<SetFormat>,
    /// Winner decided by total games across all sets.
    #[serde(default)]
    pub aggregate: bool,
}

impl MatchFormat {
    /// Best-of-`n` match where every set uses `set_format`.
    pub const fn best_of(n: u32, set_format: SetFormat) -> Self {
        Self {
            set_count: SetCount::BestOf(n),
            set_format,
            final_set_format: None,
            aggregate: false,
        }
    }

    /// Exactly-`n` match where every set uses `set_format`.
    pub const fn exactly(n: u32, set_format: SetFormat) -> Self {
        Self {
            set_count: SetCount::Exactly(n),
            set_format,
            final_set_format: None,
            aggregate: false,
        }
    }

    /// Replace the final-set rules.
    pub const fn with_final_set(mut self, final_set_format: SetFormat) -> Self {
        self.final_set_format = Some(final_set_format);
        self
    }

    /// Decide the match on total games.
    pub const fn with_aggregate(mut self) -> Self {
        self.aggregate = true;
        self
    }

    /// Number of set slots.
    #[inline]
    pub fn max_sets(&self) -> u32 {
        self.set_count.slots()
    }

    /// Zero-based index of the last possible set.
    #[inline]
    pub fn final_set_index(&self) -> usize {
        self.max_sets().saturating_sub(1) as usize
    }

    /// Whether this is an exactly-N format.
    #[inline]
    pub fn is_exactly(&self) -> bool {
        matches!(self.set_count, SetCount::Exactly(_))
    }

    /// Check the descriptor is internally consistent.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.max_sets() == 0 {
            return Err(FormatError::ZeroSets);
        }
        validate_set_format(&self.set_format, "set")?;
        if let Some(ref final_set) = self.final_set_format {
            validate_set_format(final_set, "final set")?;
        }
        Ok(())
    }
}

fn validate_set_format(format: &SetFormat, slot: &'static str) -> Result<(), FormatError> {
    if format.set_to.is_none() && format.tiebreak.is_none() && !format.timed {
        return Err(FormatError::NoScoringTarget(slot));
    }
    if format.set_to == Some(0) {
        return Err(FormatError::ZeroSetTarget(slot));
    }
    if format.tiebreak_to() == Some(0) {
        return Err(FormatError::ZeroTiebreakTarget(slot));
    }
    Ok(())
}

// =============================================================================
// ERRORS AND COLLABORATORS
// =============================================================================

/// Descriptor validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Descriptor could not be produced at all.
    #[error("match format is missing or unrecognized")]
    Missing,
    /// Set count of zero.
    #[error("match format must contain at least one set")]
    ZeroSets,
    /// Slot has neither a game target, a tiebreak nor a clock.
    #[error("{0} format has no game target, tiebreak or timer")]
    NoScoringTarget(&'static str),
    /// Game target of zero.
    #[error("{0} format has a game target of zero")]
    ZeroSetTarget(&'static str),
    /// Tiebreak target of zero.
    #[error("{0} format has a tiebreak target of zero")]
    ZeroTiebreakTarget(&'static str),
}

/// Turns a format code (e.g. `"SET3-S:6/TB7"`) into a descriptor.
///
/// Implemented by the host; `None` means the code was not understood.
pub trait FormatInterpreter {
    /// Interpret a format code.
    fn interpret(&self, code: &str) -> Option<MatchFormat>;
}

impl<F> FormatInterpreter for F
where
    F: Fn(&str) -> Option<MatchFormat>,
{
    fn interpret(&self, code: &str) -> Option<MatchFormat> {
        self(code)
    }
}
