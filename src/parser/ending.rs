//! Irregular Ending Keywords
//!
//! Recognizes "RET", "w/o", "in progress" and the other words that end a
//! score string early. Matching is case-insensitive and word-bounded, and
//! the longest keyword at a position wins ("inc" over "in").

use crate::score::MatchUpStatus;

/// Known spellings of every irregular ending.
const KEYWORDS: &[(&str, MatchUpStatus)] = &[
    ("retired", MatchUpStatus::Retired),
    ("ret", MatchUpStatus::Retired),
    ("walkover", MatchUpStatus::Walkover),
    ("w/o", MatchUpStatus::Walkover),
    ("wo", MatchUpStatus::Walkover),
    ("defaulted", MatchUpStatus::Defaulted),
    ("default", MatchUpStatus::Defaulted),
    ("def", MatchUpStatus::Defaulted),
    ("suspended", MatchUpStatus::Suspended),
    ("susp", MatchUpStatus::Suspended),
    ("cancelled", MatchUpStatus::Cancelled),
    ("canceled", MatchUpStatus::Cancelled),
    ("canc", MatchUpStatus::Cancelled),
    ("incomplete", MatchUpStatus::Incomplete),
    ("inc", MatchUpStatus::Incomplete),
    ("in progress", MatchUpStatus::InProgress),
    ("in-progress", MatchUpStatus::InProgress),
    ("in", MatchUpStatus::InProgress),
    ("awaiting result", MatchUpStatus::AwaitingResult),
    ("awaiting", MatchUpStatus::AwaitingResult),
    ("await", MatchUpStatus::AwaitingResult),
    ("dead rubber", MatchUpStatus::DeadRubber),
    ("dead-rubber", MatchUpStatus::DeadRubber),
    ("dr", MatchUpStatus::DeadRubber),
];

/// A keyword found in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndingMatch {
    /// Ending it denotes.
    pub status: MatchUpStatus,
    /// Character offset of the keyword.
    pub position: usize,
    /// Keyword length in characters.
    pub len: usize,
}

/// Longest keyword starting exactly at `start`.
pub fn match_at(chars: &[char], start: usize) -> Option<EndingMatch> {
    if !is_word_start(chars, start) {
        return None;
    }
    KEYWORDS
        .iter()
        .filter(|(keyword, _)| keyword_matches(chars, start, keyword))
        .max_by_key(|(keyword, _)| keyword.len())
        .map(|&(keyword, status)| EndingMatch {
            status,
            position: start,
            len: keyword.chars().count(),
        })
}

/// First keyword at or after `start`.
pub fn scan_forward(chars: &[char], start: usize) -> Option<EndingMatch> {
    (start..chars.len()).find_map(|position| match_at(chars, position))
}

fn is_word_start(chars: &[char], position: usize) -> bool {
    // Digits may run straight into a keyword ("3-2ret")
    position == 0 || chars.get(position - 1).is_some_and(|c| !c.is_alphabetic())
}

fn keyword_matches(chars: &[char], start: usize, keyword: &str) -> bool {
    let mut end = start;
    for expected in keyword.chars() {
        match chars.get(end) {
            Some(c) if c.to_ascii_lowercase() == expected => end += 1,
            _ => return false,
        }
    }
    // Must not run into a longer word ("wobble", "dr5")
    chars.get(end).map_or(true, |c| !c.is_alphanumeric())
}
