//! Parser Configuration
//!
//! Tunables for the tokenizing parser. Defaults suit hand-typed tennis
//! scores; hosts may override them from the environment.

use serde::{Deserialize, Serialize};

/// Parser configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserConfig {
    /// Characters of context shown either side of an unrecognized character.
    pub context_window: usize,
    /// Largest value a second tiebreak score may accumulate to.
    pub tiebreak_ceiling: u32,
    /// Largest game score in slots with no tiebreak (advantage or timed sets).
    pub open_set_ceiling: u32,
    /// Confidence lost when an ambiguity is resolved by guessing.
    pub ambiguity_penalty: f64,
    /// Confidence lost per recoverable warning.
    pub warning_penalty: f64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            context_window: 3,
            tiebreak_ceiling: 999,
            open_set_ceiling: 99,
            ambiguity_penalty: 0.2,
            warning_penalty: 0.1,
        }
    }
}

impl ParserConfig {
    /// Create config from environment variables, falling back to defaults.
    ///
    /// - `SCORE_CONTEXT_WINDOW`
    /// - `SCORE_TIEBREAK_CEILING`
    /// - `SCORE_OPEN_SET_CEILING`
    /// - `SCORE_AMBIGUITY_PENALTY`
    /// - `SCORE_WARNING_PENALTY`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string());
        Self {
            context_window: read("SCORE_CONTEXT_WINDOW")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.context_window),
            tiebreak_ceiling: read("SCORE_TIEBREAK_CEILING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.tiebreak_ceiling),
            open_set_ceiling: read("SCORE_OPEN_SET_CEILING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.open_set_ceiling),
            ambiguity_penalty: read("SCORE_AMBIGUITY_PENALTY")
                .and_then(|v| v.parse().ok())
                .filter(|p: &f64| (0.0..=1.0).contains(p))
                .unwrap_or(defaults.ambiguity_penalty),
            warning_penalty: read("SCORE_WARNING_PENALTY")
                .and_then(|v| v.parse().ok())
                .filter(|p: &f64| (0.0..=1.0).contains(p))
                .unwrap_or(defaults.warning_penalty),
        }
    }
}
