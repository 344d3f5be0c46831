//! Combinatorial optimization routines for point-of-sale and floor
//! management.
//!
//! Three independent engines, each a set of pure functions over plain data:
//!
//! - **Change** ([`change`]): greedy coin change over a fixed denomination
//!   set, in integer minor units.
//! - **Knapsack** ([`knapsack`]): inventory selection under a capacity
//!   limit, exactly by dynamic programming or approximately by value
//!   density, optionally filtered by demand score.
//! - **Assignment** ([`assignment`]): seating customer groups at tables by
//!   a fitness score, greedily or by maximum-weight matching.
//!
//! [`ranking`] provides the rule-based ordering the engines share, and
//! [`money`] the fixed-point currency conversions. [`service`] wraps all
//! three engines behind request types that carry mode names as strings.
//!
//! # Failure model
//!
//! Engine calls never panic and never return `Err`. Malformed or
//! unsatisfiable requests come back as ordinary results tagged with a
//! [`FailureKind`]. [`OptimizeError`] is only produced while building
//! inputs, validating configuration or parsing mode names.
//!
//! # Logging
//!
//! Engines emit records through the [`log`] facade: `debug` for per-call
//! summaries, `trace` for individual decisions and `warn` for inputs that
//! were rejected or ignored. No logger is installed by this crate.

pub mod assignment;
pub mod change;
pub mod error;
pub mod knapsack;
pub mod money;
pub mod ranking;
pub mod service;

pub use error::{FailureKind, OptimizeError, Result};
