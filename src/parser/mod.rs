//! Tokenizing Parser
//!
//! Turns a hand-typed score string into set records plus diagnostics.
//!
//! ## Paths
//!
//! - **Fast path** ([`fixed`]): exactly-N or single-set formats whose
//!   slots are all tiebreak-only or timed. Plain whitespace-separated pairs.
//! - **General path** ([`scanner`]): a character-driven state machine over
//!   the lexical [`mode::Mode`]s, consulting the completion rules for
//!   tiebreak triggers and score ceilings.
//!
//! Both paths feed the same assembly step, which applies irregular
//! endings, evaluates the match and renders the canonical score.
//!
//! Parsing never fails: problems are reported through
//! [`ParseResult::errors`] with `valid == false`.

pub mod diagnostics;
pub mod ending;
pub mod fixed;
pub mod mode;
pub mod number;
pub mod scanner;

use tracing::debug;

use crate::config::ParserConfig;
use crate::format::{FormatError, FormatInterpreter, MatchFormat};
use crate::notation::format_with_status;
use crate::rules::{evaluate_match, MatchOutcome};
use crate::score::ParseResult;

pub use diagnostics::Diagnostics;
pub use scanner::{ScanOutput, Scanner};

/// Score parser with its tunables.
///
/// Holds no per-parse state; one instance can serve any number of calls,
/// from any number of threads.
#[derive(Clone, Debug, Default)]
pub struct ScoreParser {
    config: ParserConfig,
}

impl ScoreParser {
    /// Parser using `config`.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse `text` under `format`.
    pub fn parse(&self, text: &str, format: &MatchFormat) -> ParseResult {
        debug!(input = text, "parsing score");

        if let Err(e) = format.validate() {
            return ParseResult::rejected(format!("Invalid match format: {e}"));
        }
        if text.trim().is_empty() {
            return ParseResult::rejected("No score entered");
        }

        let output = if fixed::applies(format) {
            fixed::scan(text, format)
        } else {
            Scanner::new(text, format, &self.config).run()
        };
        let result = assemble(output, format);

        debug!(
            valid = result.valid,
            sets = result.sets.len(),
            confidence = result.confidence,
            status = ?result.match_up_status,
            "parsed score"
        );
        result
    }
}

/// Parse with the default configuration.
pub fn parse_score(text: &str, format: &MatchFormat) -> ParseResult {
    ScoreParser::default().parse(text, format)
}

/// Parse with an explicit configuration.
pub fn parse_score_with_config(
    text: &str,
    format: &MatchFormat,
    config: &ParserConfig,
) -> ParseResult {
    ScoreParser::new(config.clone()).parse(text, format)
}

/// Resolve `code` through `interpreter`, then parse.
///
/// An unrecognized code short-circuits before any scanning.
pub fn parse_score_with_code<I>(text: &str, code: &str, interpreter: &I) -> ParseResult
where
    I: FormatInterpreter + ?Sized,
{
    match interpreter.interpret(code) {
        Some(format) => parse_score(text, &format),
        None => {
            debug!(code, "format code not recognized");
            ParseResult::rejected(format!("Invalid match format: {}", FormatError::Missing))
        }
    }
}

// =============================================================================
// ASSEMBLY
// =============================================================================

fn assemble(output: ScanOutput, format: &MatchFormat) -> ParseResult {
    let ScanOutput {
        mut sets,
        mut diagnostics,
        ending,
    } = output;

    let outcome = match ending {
        Some(status) => {
            if status.discards_score() {
                sets.clear();
            }
            MatchOutcome::default()
        }
        None => {
            let outcome = evaluate_match(&sets, format);
            let slots = format.max_sets() as usize;
            for set in sets.iter().take(slots) {
                if set.winning_side.is_none() {
                    diagnostics.note(
                        0,
                        format!("Set {} is not complete under the match format", set.set_number),
                    );
                }
            }
            outcome
        }
    };

    if sets.is_empty() && ending.is_none() && diagnostics.errors.is_empty() {
        diagnostics.error(0, "No set scores found");
    }

    let Diagnostics {
        errors,
        warnings,
        ambiguities,
        suggestions,
        confidence,
    } = diagnostics;

    ParseResult {
        valid: errors.is_empty(),
        formatted_score: format_with_status(&sets, ending),
        incomplete: !outcome.complete && !sets.is_empty(),
        match_complete: outcome.complete,
        winner: outcome.winner,
        sets,
        confidence,
        errors,
        warnings,
        ambiguities,
        suggestions,
        match_up_status: ending,
    }
}
