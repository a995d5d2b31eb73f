//! # Racquet Score
//!
//! Parser, rules engine and formatter for hand-typed racquet-sport scores
//! such as `"6-4 3-6 7-6(5)"`, `"6-4 3-6 [10-8]"` or `"6-0 3-2 RET"`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       RACQUET SCORE                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  format/         - Match format descriptors                  │
//! │  ├── descriptor.rs - Set/tiebreak/match shape + validation   │
//! │  └── presets.rs  - Common formats                            │
//! │                                                              │
//! │  rules/          - Completion rule engine (pure)             │
//! │  ├── completion.rs - Tiebreak triggers, limits, set winner   │
//! │  ├── outcome.rs  - Match completion and winner               │
//! │  └── complement.rs - Companion score prediction              │
//! │                                                              │
//! │  parser/         - Tokenizing parser                         │
//! │  ├── scanner.rs  - Character-driven state machine            │
//! │  ├── fixed.rs    - Fixed-arity fast path                     │
//! │  ├── mode.rs     - Lexical modes                             │
//! │  ├── number.rs   - Bounded numeric tokens                    │
//! │  └── ending.rs   - Irregular ending keywords                 │
//! │                                                              │
//! │  notation.rs     - Canonical score rendering                 │
//! │  entry/          - Keystroke entry helpers                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//!
//! - Parsing is total: every input yields a [`ParseResult`], never a panic
//!   or an `Err`. Check [`ParseResult::valid`] before trusting the sets.
//! - Parsing is deterministic and keeps no shared state, so a
//!   [`ScoreParser`] may be used from any number of threads.
//! - A set carries a winner only when it is complete for its format slot.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod entry;
pub mod format;
pub mod notation;
pub mod parser;
pub mod rules;
pub mod score;

// Re-export commonly used types
pub use config::ParserConfig;
pub use entry::{ComplementAdvice, ComplementRequest, DeclineReason, SmartComplement};
pub use format::{FormatError, FormatInterpreter, MatchFormat, SetCount, SetFormat, TiebreakFormat};
pub use notation::{format_sets, format_sets_for, format_with_status};
pub use parser::{parse_score, parse_score_with_code, parse_score_with_config, ScoreParser};
pub use rules::MatchOutcome;
pub use score::{MatchUpStatus, ParseResult, SetScore, Side};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
