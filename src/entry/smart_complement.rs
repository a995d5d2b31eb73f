//! Smart Complement
//!
//! During keystroke entry, a single digit typed for one side often fixes
//! the other side's score: typing `2` in a six-game set means the set ended
//! 2-6 or 6-2. The advisor fills in the companion value once per set.

use std::collections::BTreeSet;

use serde::Serialize;
use strum::Display;
use tracing::debug;

use crate::format::MatchFormat;
use crate::rules::{calculate_complement, evaluate_match, format_for_index};
use crate::score::{SetScore, Side};

/// One keystroke worth of context.
#[derive(Clone, Copy, Debug)]
pub struct ComplementRequest<'a> {
    /// Zero-based index of the set being entered.
    pub set_index: usize,
    /// Value just typed.
    pub digit: u32,
    /// Field the digit was typed into.
    pub side: Side,
    /// Current value of the other field.
    pub opponent_value: u32,
    /// Sets already entered for this match.
    pub history: &'a [SetScore],
    /// Alternate entry: the typed value goes to the other field.
    pub shift: bool,
}

/// Why no complement was offered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "snake_case")]
pub enum DeclineReason {
    /// Feature switched off.
    Disabled,
    /// Already applied once in this set.
    AlreadyUsed,
    /// Match is already decided.
    MatchComplete,
    /// Slot is a match tiebreak.
    TiebreakOnlySet,
    /// The other field already holds a score.
    OpponentScoreEntered,
    /// Digit is at or past the trigger.
    NoPrediction,
}

/// Advisor answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "action")]
pub enum ComplementAdvice {
    /// Populate both fields.
    Apply {
        /// Value for side 1's field.
        side1: u32,
        /// Value for side 2's field.
        side2: u32,
    },
    /// Leave the fields alone.
    Decline {
        /// Reason shown to the host.
        reason: DeclineReason,
    },
}

impl ComplementAdvice {
    fn decline(reason: DeclineReason) -> Self {
        ComplementAdvice::Decline { reason }
    }
}

/// Per-session advisor state: the switch and the sets already completed
/// this way. Owned by the host and reset per match.
#[derive(Clone, Debug)]
pub struct SmartComplement {
    /// Feature switch.
    pub enabled: bool,
    used: BTreeSet<usize>,
}

impl Default for SmartComplement {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SmartComplement {
    /// Advisor with nothing used yet.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            used: BTreeSet::new(),
        }
    }

    /// Decide whether to complement `request` under `format`.
    pub fn advise(&self, request: &ComplementRequest<'_>, format: &MatchFormat) -> ComplementAdvice {
        if !self.enabled {
            return ComplementAdvice::decline(DeclineReason::Disabled);
        }
        if self.used.contains(&request.set_index) {
            return ComplementAdvice::decline(DeclineReason::AlreadyUsed);
        }
        if evaluate_match(request.history, format).complete {
            return ComplementAdvice::decline(DeclineReason::MatchComplete);
        }

        let slot = format_for_index(request.set_index, format);
        if slot.is_tiebreak_only() {
            return ComplementAdvice::decline(DeclineReason::TiebreakOnlySet);
        }
        if request.opponent_value != 0 {
            return ComplementAdvice::decline(DeclineReason::OpponentScoreEntered);
        }
        let Some(complement) = calculate_complement(request.digit, &slot) else {
            return ComplementAdvice::decline(DeclineReason::NoPrediction);
        };

        let typed_side = if request.shift {
            request.side.opponent()
        } else {
            request.side
        };
        let (side1, side2) = match typed_side {
            Side::One => (request.digit, complement),
            Side::Two => (complement, request.digit),
        };
        ComplementAdvice::Apply { side1, side2 }
    }

    /// [`advise`](Self::advise), marking the set used when applied.
    pub fn advise_and_mark(
        &mut self,
        request: &ComplementRequest<'_>,
        format: &MatchFormat,
    ) -> ComplementAdvice {
        let advice = self.advise(request, format);
        if let ComplementAdvice::Apply { side1, side2 } = advice {
            debug!(set = request.set_index, side1, side2, "smart complement applied");
            self.mark_used(request.set_index);
        }
        advice
    }

    /// Record that `set_index` has been complemented.
    pub fn mark_used(&mut self, set_index: usize) {
        self.used.insert(set_index);
    }

    /// Whether `set_index` has been complemented.
    pub fn is_used(&self, set_index: usize) -> bool {
        self.used.contains(&set_index)
    }

    /// Forget every used set.
    pub fn reset(&mut self) {
        self.used.clear();
    }
}
