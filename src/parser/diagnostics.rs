//! Diagnostic Accumulation
//!
//! Errors, warnings, ambiguity notes and confidence gathered during one
//! parse.

use crate::score::result::Diagnostic;

/// Everything a parse has to say besides the sets.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostics {
    /// Fatal problems.
    pub errors: Vec<Diagnostic>,
    /// Recoverable problems.
    pub warnings: Vec<Diagnostic>,
    /// Guesses made while resolving the input.
    pub ambiguities: Vec<String>,
    /// Advice for a human reviewer.
    pub suggestions: Vec<String>,
    /// Starts at 1.0, lowered by every guess.
    pub confidence: f64,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            ambiguities: Vec::new(),
            suggestions: Vec::new(),
            confidence: 1.0,
        }
    }
}

impl Diagnostics {
    /// Record a fatal error.
    pub fn error(&mut self, position: usize, message: impl Into<String>) {
        self.errors.push(Diagnostic::at(position, message));
    }

    /// Record a warning without touching confidence.
    pub fn note(&mut self, position: usize, message: impl Into<String>) {
        self.warnings.push(Diagnostic::at(position, message));
    }

    /// Record a warning and lower confidence by `penalty`.
    pub fn warn(&mut self, position: usize, message: impl Into<String>, penalty: f64) {
        self.note(position, message);
        self.lower_confidence(penalty);
    }

    /// Record a guess, lowering confidence by `penalty`.
    pub fn ambiguity(&mut self, message: impl Into<String>, penalty: f64) {
        self.ambiguities.push(message.into());
        self.lower_confidence(penalty);
    }

    /// Record advice for the reviewer.
    pub fn suggest(&mut self, message: impl Into<String>) {
        self.suggestions.push(message.into());
    }

    fn lower_confidence(&mut self, penalty: f64) {
        self.confidence = (self.confidence - penalty).max(0.0);
    }
}
