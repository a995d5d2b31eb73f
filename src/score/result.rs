//! Parse Results
//!
//! What a parse hands back. Always produced, never an `Err`: failures are
//! reported as diagnostics with `valid == false`.

use serde::Serialize;

use crate::score::set::{SetScore, Side};
use crate::score::status::MatchUpStatus;

/// A positioned message from the parser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// Human-readable description.
    pub message: String,
    /// Character offset into the input, when the issue has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl Diagnostic {
    /// Diagnostic without a position.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position: None,
        }
    }

    /// Diagnostic anchored at `position`.
    pub fn at(position: usize, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position: Some(position),
        }
    }
}

/// Outcome of parsing one score string.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// Gate to check before trusting `sets`.
    pub valid: bool,
    /// Canonical rendering of the parsed score.
    pub formatted_score: String,
    /// Parsed sets, in order.
    pub sets: Vec<SetScore>,
    /// 1.0 when every decision followed unambiguous grammar.
    pub confidence: f64,
    /// Problems that invalidate the result.
    pub errors: Vec<Diagnostic>,
    /// Recoverable oddities.
    pub warnings: Vec<Diagnostic>,
    /// Points where the parser had to guess.
    pub ambiguities: Vec<String>,
    /// Advice for a human reviewing the input.
    pub suggestions: Vec<String>,
    /// Sets were parsed but the match is not decided.
    pub incomplete: bool,
    /// Match is decided by the parsed sets.
    pub match_complete: bool,
    /// Winner of the match, when complete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Side>,
    /// Irregular ending, if one was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_up_status: Option<MatchUpStatus>,
}

impl ParseResult {
    /// Result that failed before any scanning.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            formatted_score: String::new(),
            sets: Vec::new(),
            confidence: 0.0,
            errors: vec![Diagnostic::new(message)],
            warnings: Vec::new(),
            ambiguities: Vec::new(),
            suggestions: Vec::new(),
            incomplete: false,
            match_complete: false,
            winner: None,
            match_up_status: None,
        }
    }

    /// Number of sets won by `side`.
    pub fn sets_won(&self, side: Side) -> usize {
        self.sets
            .iter()
            .filter(|set| set.winning_side == Some(side))
            .count()
    }
}
