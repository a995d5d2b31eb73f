//! Match Format Descriptors
//!
//! The structured description of how a match is scored. Descriptors are
//! produced by an external format-code interpreter; this crate only
//! consumes them.
//!
//! ## Module Structure
//!
//! - `descriptor`: `SetFormat`, `MatchFormat`, validation
//! - `presets`: common formats used by hosts and tests

pub mod descriptor;
pub mod presets;

// Re-export key types
pub use descriptor::{
    FormatError, FormatInterpreter, MatchFormat, SetCount, SetFormat, TiebreakFormat,
};
