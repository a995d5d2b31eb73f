//! Score String Scanner
//!
//! Character-driven state machine for the general parsing path. Each
//! character is classified, then handled according to the current
//! [`Mode`]. Numbers are taken whole through [`take_number`], so the only
//! state carried between characters is the mode itself.

use tracing::debug;
#[cfg(feature = "debug-tracing")]
use tracing::trace;

use crate::config::ParserConfig;
use crate::format::{MatchFormat, SetFormat, TiebreakFormat};
use crate::parser::diagnostics::Diagnostics;
use crate::parser::ending::{self, EndingMatch};
use crate::parser::mode::{Games, Mode};
use crate::parser::number::{digit_run, take_number};
use crate::rules::{
    evaluate_match, format_for_index, infer_tiebreak_winner_score, max_allowed_score,
    requires_tiebreak, slot_winner,
};
use crate::score::{MatchUpStatus, SetScore, Side};

/// Target of a bracketed tiebreak found in a slot that expects games.
const FALLBACK_MATCH_TIEBREAK_TO: u32 = 10;

/// Tiebreak assumed when a tiebreak score is given in a slot without one.
const FALLBACK_SET_TIEBREAK: TiebreakFormat = TiebreakFormat::new(7);

// =============================================================================
// CHARACTER CLASSES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CharClass {
    Digit,
    Whitespace,
    PairSeparator,
    SetSeparator,
    TiebreakOpen,
    TiebreakClose,
    Other,
}

fn classify(c: char) -> CharClass {
    match c {
        '0'..='9' => CharClass::Digit,
        '-' | '/' | ':' | '\u{2013}' => CharClass::PairSeparator,
        ',' | ';' => CharClass::SetSeparator,
        '(' | '[' => CharClass::TiebreakOpen,
        ')' | ']' => CharClass::TiebreakClose,
        c if c.is_whitespace() => CharClass::Whitespace,
        _ => CharClass::Other,
    }
}

// =============================================================================
// SCANNER
// =============================================================================

/// What a scan produced, before match-level assembly.
#[derive(Debug)]
pub struct ScanOutput {
    /// Finalized sets.
    pub sets: Vec<SetScore>,
    /// Diagnostics gathered while scanning.
    pub diagnostics: Diagnostics,
    /// Irregular ending, if one stopped the scan.
    pub ending: Option<MatchUpStatus>,
}

/// Parse state for one scan. Created per call and consumed by [`Scanner::run`].
pub struct Scanner<'a> {
    chars: Vec<char>,
    pos: usize,
    format: &'a MatchFormat,
    config: &'a ParserConfig,
    mode: Mode,
    sets: Vec<SetScore>,
    diagnostics: Diagnostics,
    ending: Option<EndingMatch>,
    halted: bool,
    /// Number of set starts already checked against the format.
    announced: usize,
}

impl<'a> Scanner<'a> {
    /// Fresh scanner positioned at the start of `text`.
    pub fn new(text: &str, format: &'a MatchFormat, config: &'a ParserConfig) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            format,
            config,
            mode: Mode::start(format_for_index(0, format).is_tiebreak_only()),
            sets: Vec::new(),
            diagnostics: Diagnostics::default(),
            ending: None,
            halted: false,
            announced: 0,
        }
    }

    /// Scan the whole input.
    pub fn run(mut self) -> ScanOutput {
        while !self.halted && self.pos < self.chars.len() {
            let c = self.chars[self.pos];
            match classify(c) {
                CharClass::Digit => self.on_digit(),
                CharClass::Whitespace | CharClass::SetSeparator => {
                    self.on_boundary();
                    self.pos += 1;
                }
                CharClass::PairSeparator => {
                    self.on_pair_separator();
                    self.pos += 1;
                }
                CharClass::TiebreakOpen => {
                    self.on_open();
                    self.pos += 1;
                }
                CharClass::TiebreakClose => {
                    self.on_close();
                    self.pos += 1;
                }
                CharClass::Other => self.on_other(c),
            }
        }

        if !self.halted {
            self.on_end();
        }

        ScanOutput {
            sets: self.sets,
            diagnostics: self.diagnostics,
            ending: self.ending.map(|found| found.status),
        }
    }

    // -------------------------------------------------------------------------
    // Character handlers
    // -------------------------------------------------------------------------

    fn on_digit(&mut self) {
        if self.mode.is_fresh() {
            self.announce_set();
        }
        let slot = self.slot();

        match self.mode {
            Mode::Side1 => {
                let value = self.take(Some(self.game_ceiling(&slot)));
                self.set_mode(Mode::Side2 {
                    side1: value,
                    side2: None,
                });
            }
            Mode::Side2 { side1, side2: None } => {
                let start = self.pos;
                let value = self.take(Some(self.game_ceiling(&slot)));
                self.check_plausible((side1, value), &slot, start);
                self.set_mode(Mode::Side2 {
                    side1,
                    side2: Some(value),
                });
            }
            Mode::Side2 {
                side1,
                side2: Some(side2),
            } => {
                // Ceiling cut the pair short; the digit belongs to what follows
                self.complete_games((side1, side2));
            }
            Mode::Tiebreak1 {
                games,
                side1: None,
                bracketed,
            } => {
                if let Some(pair) = games {
                    if !bracketed && self.looks_like_new_set() {
                        self.close_without_tiebreak(pair);
                        return;
                    }
                }
                let value = self.take(None);
                self.set_mode(Mode::Tiebreak1 {
                    games,
                    side1: Some(value),
                    bracketed,
                });
            }
            Mode::Tiebreak1 { side1: Some(_), .. } => self.advance_tiebreak(),
            Mode::Tiebreak2 {
                games,
                side1,
                side2: None,
                bracketed,
            } => {
                let value = self.take(Some(self.config.tiebreak_ceiling));
                self.set_mode(Mode::Tiebreak2 {
                    games,
                    side1,
                    side2: Some(value),
                    bracketed,
                });
            }
            Mode::Tiebreak2 { side2: Some(_), .. } => self.finish_tiebreak(),
        }
    }

    fn on_boundary(&mut self) {
        match self.mode {
            Mode::Side2 {
                side1,
                side2: Some(side2),
            } => self.complete_games((side1, side2)),
            Mode::Tiebreak1 {
                side1: Some(_),
                bracketed: false,
                ..
            } => self.advance_tiebreak(),
            Mode::Tiebreak2 {
                side2: Some(_),
                bracketed: false,
                ..
            } => self.finish_tiebreak(),
            _ => {}
        }
    }

    fn on_pair_separator(&mut self) {
        match self.mode {
            Mode::Side2 {
                side1,
                side2: Some(side2),
            } => self.complete_games((side1, side2)),
            Mode::Tiebreak1 {
                games,
                side1: Some(value),
                bracketed,
            } => self.set_mode(Mode::Tiebreak2 {
                games,
                side1: value,
                side2: None,
                bracketed,
            }),
            Mode::Tiebreak2 { side2: Some(_), .. } => self.finish_tiebreak(),
            _ => {}
        }
    }

    fn on_open(&mut self) {
        if self.mode.is_fresh() {
            self.announce_set();
        }
        let position = self.pos;
        let number = self.set_number();
        let slot = self.slot();

        match self.mode {
            Mode::Side1 => {
                self.diagnostics.ambiguity(
                    format!(
                        "Bracket at position {position} opens set {number} as a match tiebreak, \
                         but the format expects games"
                    ),
                    self.config.ambiguity_penalty,
                );
                self.set_mode(Mode::Tiebreak1 {
                    games: None,
                    side1: None,
                    bracketed: true,
                });
            }
            Mode::Side2 {
                side1,
                side2: Some(side2),
            } => {
                if !requires_tiebreak(side1, side2, &slot) {
                    self.diagnostics.note(
                        position,
                        format!("Tiebreak marker after {side1}-{side2} in set {number} before a tiebreak is due"),
                    );
                    self.diagnostics.ambiguity(
                        format!("Set {number} tiebreak accepted at {side1}-{side2}"),
                        self.config.ambiguity_penalty,
                    );
                    if let Some(trigger) = slot.tiebreak_trigger() {
                        self.diagnostics.suggest(format!(
                            "Check set {number}: a tiebreak is played at {trigger}-{trigger}"
                        ));
                    }
                }
                self.set_mode(Mode::Tiebreak1 {
                    games: Some((side1, side2)),
                    side1: None,
                    bracketed: true,
                });
            }
            Mode::Tiebreak1 {
                games,
                side1: None,
                bracketed: false,
            } => self.set_mode(Mode::Tiebreak1 {
                games,
                side1: None,
                bracketed: true,
            }),
            Mode::Side2 { side2: None, .. } => self.diagnostics.warn(
                position,
                format!("Tiebreak marker before the side 2 score of set {number}; ignored"),
                self.config.warning_penalty,
            ),
            _ => self.diagnostics.warn(
                position,
                "Tiebreak marker inside a tiebreak; ignored",
                self.config.warning_penalty,
            ),
        }
    }

    fn on_close(&mut self) {
        let position = self.pos;
        match self.mode {
            Mode::Tiebreak1 { side1: Some(_), .. } | Mode::Tiebreak2 { .. } => {
                self.finish_tiebreak()
            }
            Mode::Tiebreak1 {
                games,
                side1: None,
                bracketed: true,
            } => {
                self.diagnostics.warn(
                    position,
                    "Empty tiebreak brackets ignored",
                    self.config.warning_penalty,
                );
                let next = match games {
                    Some(_) => Mode::Tiebreak1 {
                        games,
                        side1: None,
                        bracketed: false,
                    },
                    None => Mode::start(self.slot().is_tiebreak_only()),
                };
                self.set_mode(next);
            }
            _ => self.diagnostics.warn(
                position,
                format!("Unexpected closing bracket at position {position} ignored"),
                self.config.warning_penalty,
            ),
        }
    }

    fn on_other(&mut self, c: char) {
        let position = self.pos;
        let found = ending::scan_forward(&self.chars, position).filter(|found| {
            !self.chars[position..found.position]
                .iter()
                .any(char::is_ascii_digit)
        });

        match found {
            Some(found) => {
                if found.position > position {
                    let skipped: String = self.chars[position..found.position].iter().collect();
                    self.diagnostics.warn(
                        position,
                        format!("Ignored '{}' before {}", skipped.trim(), found.status),
                        self.config.warning_penalty,
                    );
                }
                debug!(status = %found.status, position = found.position, "irregular ending");
                self.ending = Some(found);
                self.pos = self.chars.len();
            }
            None => {
                let message = format!(
                    "Unrecognized character '{c}' at position {position} near \"{}\"",
                    self.context(position)
                );
                self.diagnostics.error(position, message);
                self.halted = true;
            }
        }
    }

    fn on_end(&mut self) {
        let position = self.chars.len();
        let number = self.set_number();

        match self.mode {
            Mode::Side1 => {}
            Mode::Side2 { side1, side2: None } => self.diagnostics.note(
                position,
                format!("Set {number} has no side 2 score ({side1}-?); dropped"),
            ),
            Mode::Side2 {
                side1,
                side2: Some(side2),
            } => {
                if requires_tiebreak(side1, side2, &self.slot()) {
                    self.await_tiebreak((side1, side2));
                } else {
                    self.finalize(Some((side1, side2)), None, None);
                }
            }
            Mode::Tiebreak1 {
                games,
                side1: None,
                bracketed,
            } => {
                if bracketed {
                    self.unclosed_bracket(position);
                }
                if let Some(pair) = games {
                    self.await_tiebreak(pair);
                }
            }
            Mode::Tiebreak1 { .. } | Mode::Tiebreak2 { .. } => {
                if self.mode.is_bracketed() {
                    self.unclosed_bracket(position);
                }
                self.finish_tiebreak();
            }
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Game pair is in; start a tiebreak if the pair calls for one.
    fn complete_games(&mut self, pair: Games) {
        if requires_tiebreak(pair.0, pair.1, &self.slot()) {
            self.set_mode(Mode::Tiebreak1 {
                games: Some(pair),
                side1: None,
                bracketed: false,
            });
        } else {
            self.finalize(Some(pair), None, None);
        }
    }

    /// First tiebreak value followed by a separator.
    fn advance_tiebreak(&mut self) {
        if let Mode::Tiebreak1 {
            games,
            side1: Some(value),
            bracketed,
        } = self.mode
        {
            match games {
                // "7-6 5": a lone set tiebreak value
                Some(pair) if !bracketed => self.finalize(Some(pair), Some(value), None),
                _ => self.set_mode(Mode::Tiebreak2 {
                    games,
                    side1: value,
                    side2: None,
                    bracketed,
                }),
            }
        }
    }

    fn finish_tiebreak(&mut self) {
        match self.mode {
            Mode::Tiebreak1 {
                games,
                side1: Some(value),
                ..
            } => self.finalize(games, Some(value), None),
            Mode::Tiebreak2 {
                games,
                side1,
                side2,
                ..
            } => self.finalize(games, Some(side1), side2),
            _ => {}
        }
    }

    fn close_without_tiebreak(&mut self, pair: Games) {
        let number = self.set_number();
        let (side1, side2) = pair;
        self.diagnostics.warn(
            self.pos,
            format!("Set {number} ended {side1}-{side2} with no tiebreak score"),
            self.config.warning_penalty,
        );
        self.diagnostics.ambiguity(
            format!("Digits after {side1}-{side2} read as set {}, not a tiebreak", number + 1),
            self.config.ambiguity_penalty,
        );
        self.diagnostics.suggest(format!(
            "Write set {number} as {side1}-{side2}(n) with the loser's tiebreak points"
        ));
        self.finalize(Some(pair), None, None);
    }

    fn await_tiebreak(&mut self, pair: Games) {
        let number = self.set_number();
        let (side1, side2) = pair;
        self.diagnostics.note(
            self.chars.len(),
            format!("Set {number} at {side1}-{side2} is waiting for a tiebreak score"),
        );
        self.diagnostics.suggest(format!(
            "Add the tiebreak score to set {number}, e.g. {side1}-{side2}(5)"
        ));
    }

    fn unclosed_bracket(&mut self, position: usize) {
        self.diagnostics.warn(
            position,
            format!("Set {} tiebreak bracket was never closed", self.set_number()),
            self.config.warning_penalty,
        );
    }

    /// Build a set record from what was scanned and move to the next slot.
    fn finalize(&mut self, games: Option<Games>, tiebreak1: Option<u32>, tiebreak2: Option<u32>) {
        let number = self.set_number();
        let slot = self.slot();
        let position = self.pos;

        let record = match games {
            None => match (tiebreak1, tiebreak2) {
                (Some(side1), Some(side2)) => Some(SetScore::tiebreak_only(number, side1, side2)),
                _ => {
                    self.diagnostics.note(
                        position,
                        format!("Set {number} tiebreak needs a score for both sides; dropped"),
                    );
                    None
                }
            },
            Some((side1, side2)) => {
                let set = SetScore::games(number, side1, side2);
                Some(match (tiebreak1, tiebreak2) {
                    (Some(first), Some(second)) => set.with_tiebreak(first, second),
                    (Some(loser), None) => self.infer_tiebreak(set, loser, &slot),
                    _ => set,
                })
            }
        };

        if let Some(mut set) = record {
            let rules = if set.is_tiebreak_only() && !slot.is_tiebreak_only() {
                SetFormat::tiebreak_only(FALLBACK_MATCH_TIEBREAK_TO)
            } else {
                slot
            };
            set.winning_side = slot_winner(&rules, &set);
            debug!(
                set = number,
                side1 = set.side1_score,
                side2 = set.side2_score,
                tiebreak = ?set.tiebreak_pair(),
                winner = ?set.winning_side,
                "set finalized"
            );
            self.sets.push(set);
        }

        let next = self.slot();
        self.set_mode(Mode::start(next.is_tiebreak_only()));
    }

    /// Fill in the winner's tiebreak score from the loser's.
    fn infer_tiebreak(&mut self, set: SetScore, loser: u32, slot: &SetFormat) -> SetScore {
        let number = set.set_number;
        let Some(winner) = Side::leading(set.side1_score, set.side2_score) else {
            self.diagnostics.warn(
                self.pos,
                format!("Set {number} is level on games; tiebreak score {loser} ignored"),
                self.config.warning_penalty,
            );
            return set;
        };

        let tiebreak = match slot.effective_tiebreak() {
            Some(tiebreak) => tiebreak,
            None => {
                self.diagnostics.warn(
                    self.pos,
                    format!("Set {number} format has no tiebreak; assuming a tiebreak to 7"),
                    self.config.warning_penalty,
                );
                FALLBACK_SET_TIEBREAK
            }
        };
        let won = infer_tiebreak_winner_score(loser, &tiebreak);
        match winner {
            Side::One => set.with_tiebreak(won, loser),
            Side::Two => set.with_tiebreak(loser, won),
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn set_mode(&mut self, mode: Mode) {
        #[cfg(feature = "debug-tracing")]
        trace!(from = ?self.mode, to = ?mode, position = self.pos, "mode change");
        self.mode = mode;
    }

    /// Consume a bounded number at the cursor.
    fn take(&mut self, ceiling: Option<u32>) -> u32 {
        let (value, len) = take_number(&self.chars, self.pos, ceiling);
        self.pos += len;
        value
    }

    fn slot(&self) -> SetFormat {
        format_for_index(self.sets.len(), self.format)
    }

    fn set_number(&self) -> u32 {
        self.sets.len() as u32 + 1
    }

    /// Largest game score a digit run may grow to in `slot`.
    fn game_ceiling(&self, slot: &SetFormat) -> u32 {
        match (slot.set_to, slot.tiebreak_trigger()) {
            (Some(set_to), Some(trigger)) if !slot.timed => set_to.max(trigger).saturating_add(2),
            _ => self.config.open_set_ceiling,
        }
    }

    /// Digits at the cursor followed by a pair separator, as in "6-4".
    fn looks_like_new_set(&self) -> bool {
        let run = digit_run(&self.chars, self.pos);
        self.chars
            .get(self.pos + run)
            .is_some_and(|&c| classify(c) == CharClass::PairSeparator)
    }

    fn check_plausible(&mut self, pair: Games, slot: &SetFormat, position: usize) {
        let number = self.set_number();
        for side in [Side::One, Side::Two] {
            let score = match side {
                Side::One => pair.0,
                Side::Two => pair.1,
            };
            if let Some(max) = max_allowed_score(side, pair, slot) {
                if score > max {
                    self.diagnostics.warn(
                        position,
                        format!("Set {number}: {score} is above the plausible maximum of {max}"),
                        self.config.warning_penalty,
                    );
                }
            }
        }
    }

    /// Check a set about to start fits the format.
    fn announce_set(&mut self) {
        let index = self.sets.len();
        if self.announced > index {
            return;
        }
        self.announced = index + 1;

        let max_sets = self.format.max_sets() as usize;
        if index >= max_sets {
            self.diagnostics.warn(
                self.pos,
                format!("Set {} is beyond the {max_sets} sets this format allows", index + 1),
                self.config.warning_penalty,
            );
        } else if evaluate_match(&self.sets, self.format).complete {
            self.diagnostics.warn(
                self.pos,
                format!("Set {} follows a match that was already decided", index + 1),
                self.config.warning_penalty,
            );
        }
    }

    fn context(&self, position: usize) -> String {
        let window = self.config.context_window;
        let start = position.saturating_sub(window);
        let end = (position + window + 1).min(self.chars.len());
        self.chars[start..end].iter().collect()
    }
}
