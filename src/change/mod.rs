//! Greedy coin change.
//!
//! Breaks an amount of minor currency units into the fewest coins of a fixed
//! denomination set by repeatedly taking the largest denomination that fits.
//!
//! # Limitations
//!
//! Greedy change-making is only optimal (and only complete) for canonical
//! denomination systems such as `{25, 10, 5, 1}`. For non-canonical sets the
//! engine may use more coins than necessary, or report an amount as
//! unrepresentable even though an exact combination exists (`{4, 3}` for 6).
//! No backtracking is attempted.

mod engine;
mod types;

pub use engine::ChangeEngine;
pub use types::{ChangeResult, CoinCount, DenominationSet};
