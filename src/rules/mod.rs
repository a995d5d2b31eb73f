//! Completion Rule Engine
//!
//! Pure functions over set scores and a format descriptor. Nothing in this
//! module holds state; every function may be called from any thread.
//!
//! ## Module Structure
//!
//! - `completion`: per-set rules (tiebreak trigger, limits, completion, winner)
//! - `outcome`: per-match rules (sets to win, completion, aggregate scoring)
//! - `complement`: companion-score prediction for incremental entry

pub mod complement;
pub mod completion;
pub mod outcome;

// Re-export key functions
pub use complement::calculate_complement;
pub use completion::{
    format_for_index, infer_tiebreak_winner_score, is_set_complete, is_slot_complete,
    is_tiebreak_only, max_allowed_score, requires_tiebreak, set_winner, slot_winner,
};
pub use outcome::{evaluate_match, is_match_complete, match_winner, sets_to_win, MatchOutcome};
