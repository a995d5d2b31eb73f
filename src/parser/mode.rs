//! Lexical Modes
//!
//! One variant per scanning mode, each carrying only the values that mode
//! can have seen. A finished number lives in its variant; there are no
//! free-floating buffers that could be filled in the wrong mode.

/// Game pair `(side1, side2)`.
pub type Games = (u32, u32);

/// Scanner mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Start of a regular set, nothing entered yet.
    Side1,
    /// Side 1 games entered, waiting for side 2.
    Side2 {
        /// Side 1 games.
        side1: u32,
        /// `Some` once the pair is complete and the scanner waits to see
        /// what follows it.
        side2: Option<u32>,
    },
    /// Expecting the first tiebreak value.
    Tiebreak1 {
        /// Game pair the tiebreak belongs to; `None` for a tiebreak-only
        /// (match tiebreak) set.
        games: Option<Games>,
        /// First tiebreak value, once taken.
        side1: Option<u32>,
        /// Opened with `(` or `[`.
        bracketed: bool,
    },
    /// Expecting the second tiebreak value.
    Tiebreak2 {
        /// Game pair the tiebreak belongs to.
        games: Option<Games>,
        /// First tiebreak value.
        side1: u32,
        /// Second tiebreak value, once taken.
        side2: Option<u32>,
        /// Opened with `(` or `[`.
        bracketed: bool,
    },
}

impl Mode {
    /// Mode at the start of a slot.
    pub fn start(tiebreak_only: bool) -> Self {
        if tiebreak_only {
            Mode::Tiebreak1 {
                games: None,
                side1: None,
                bracketed: false,
            }
        } else {
            Mode::Side1
        }
    }

    /// Nothing has been entered for the current set.
    pub fn is_fresh(&self) -> bool {
        matches!(
            self,
            Mode::Side1
                | Mode::Tiebreak1 {
                    games: None,
                    side1: None,
                    ..
                }
        )
    }

    /// Inside an explicit `(...)` or `[...]`.
    pub fn is_bracketed(&self) -> bool {
        matches!(
            self,
            Mode::Tiebreak1 {
                bracketed: true,
                ..
            } | Mode::Tiebreak2 {
                bracketed: true,
                ..
            }
        )
    }
}
