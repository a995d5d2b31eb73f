//! Interactive Score Entry
//!
//! Helpers for hosts that build a score keystroke by keystroke rather than
//! parsing a finished string.

pub mod smart_complement;

pub use smart_complement::{ComplementAdvice, ComplementRequest, DeclineReason, SmartComplement};
