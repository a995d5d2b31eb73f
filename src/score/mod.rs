//! Score Data Model
//!
//! Structured set records, irregular match endings and parse results.
//!
//! ## Module Structure
//!
//! - `set`: `Side` and `SetScore`
//! - `status`: `MatchUpStatus` (irregular endings)
//! - `result`: `ParseResult` and its diagnostics

pub mod result;
pub mod set;
pub mod status;

// Re-export key types
pub use result::ParseResult;
pub use set::{SetScore, Side};
pub use status::MatchUpStatus;
