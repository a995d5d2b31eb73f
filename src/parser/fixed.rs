//! Fixed-Arity Fast Path
//!
//! Formats that play an exact number of tiebreak-only or timed sets have
//! no tiebreak trigger and no game ceiling, so their score strings are a
//! plain list of `a-b` tokens. Those are split on whitespace instead of
//! going through the scanner.

use crate::format::MatchFormat;
use crate::parser::diagnostics::Diagnostics;
use crate::parser::ending;
use crate::parser::scanner::ScanOutput;
use crate::rules::{format_for_index, slot_winner};
use crate::score::SetScore;

/// Whether `format` takes the fast path.
pub fn applies(format: &MatchFormat) -> bool {
    if !(format.is_exactly() || format.max_sets() == 1) {
        return false;
    }
    (0..format.max_sets() as usize).all(|index| {
        let slot = format_for_index(index, format);
        slot.is_tiebreak_only() || slot.timed
    })
}

/// Parse `text` as whitespace-separated pairs, one per slot.
pub fn scan(text: &str, format: &MatchFormat) -> ScanOutput {
    let chars: Vec<char> = text.chars().collect();
    let expected = format.max_sets() as usize;
    let mut sets = Vec::with_capacity(expected);
    let mut diagnostics = Diagnostics::default();
    let mut ending = None;

    for (start, token) in tokens(&chars) {
        if token.starts_with(char::is_alphabetic) {
            match ending::match_at(&chars, start) {
                Some(found) => {
                    ending = Some(found.status);
                    break;
                }
                None => {
                    diagnostics.error(start, format!("Unrecognized token '{token}' at position {start}"));
                    break;
                }
            }
        }

        if sets.len() == expected {
            diagnostics.error(
                start,
                format!("Format plays exactly {expected} sets; extra score '{token}'"),
            );
            break;
        }

        let Some((side1, side2)) = parse_pair(&token) else {
            diagnostics.error(
                start,
                format!("Expected a score such as 10-8 at position {start}, found '{token}'"),
            );
            break;
        };

        let index = sets.len();
        let slot = format_for_index(index, format);
        let number = index as u32 + 1;
        let mut set = if slot.is_tiebreak_only() {
            SetScore::tiebreak_only(number, side1, side2)
        } else {
            SetScore::games(number, side1, side2)
        };
        set.winning_side = slot_winner(&slot, &set);
        sets.push(set);
    }

    if diagnostics.errors.is_empty() && ending.is_none() && sets.len() != expected {
        diagnostics.error(
            chars.len(),
            format!("Expected exactly {expected} set scores, found {}", sets.len()),
        );
    }

    ScanOutput {
        sets,
        diagnostics,
        ending,
    }
}

/// Whitespace-separated tokens with their character offsets.
fn tokens(chars: &[char]) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut start = None;
    for (position, c) in chars.iter().enumerate() {
        match (c.is_whitespace(), start) {
            (false, None) => start = Some(position),
            (true, Some(from)) => {
                out.push((from, chars[from..position].iter().collect()));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(from) = start {
        out.push((from, chars[from..].iter().collect()));
    }
    out
}

/// `a-b`, optionally wrapped in one pair of square brackets.
fn parse_pair(token: &str) -> Option<(u32, u32)> {
    let inner = token
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(token);
    let (side1, side2) = inner.split_once('-')?;
    Some((parse_digits(side1)?, parse_digits(side2)?))
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
