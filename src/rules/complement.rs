//! Companion Score Prediction
//!
//! When one side's score is typed with the other still at zero, the
//! opposing score that must end the set is often determined.

use crate::format::SetFormat;

/// Score the opposing side must reach for the set to end, given `typed`.
///
/// With six-game sets and a tiebreak at 6-6: 0..=4 predict 6, 5 predicts 7,
/// anything at or past the trigger predicts nothing.
pub fn calculate_complement(typed: u32, set_format: &SetFormat) -> Option<u32> {
    if set_format.is_tiebreak_only() || set_format.timed {
        return None;
    }
    let set_to = set_format.set_to?;
    let threshold = set_format.tiebreak_trigger().unwrap_or(set_to);
    if typed >= threshold {
        return None;
    }

    let next = typed.saturating_add(1);
    if next < set_to {
        Some(set_to)
    } else if next == set_to {
        Some(set_to.saturating_add(1))
    } else {
        None
    }
}
