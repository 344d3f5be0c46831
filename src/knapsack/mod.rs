//! Inventory selection under a capacity constraint.
//!
//! Three entry points share the [`KnapsackResult`] shape:
//!
//! - **Exact**: 0/1 knapsack by dynamic programming over a discretized
//!   capacity axis. Continuous weights are scaled to integer units
//!   (two decimal places by default, see [`KnapsackConfig`]).
//! - **Greedy**: value-density ordering with fractional inclusion of the
//!   first item that does not fit. This is the fractional-knapsack value and
//!   therefore an *upper bound* on the 0/1 optimum, not a 0/1 solution.
//! - **Demand-filtered**: drops items below a demand-score threshold and runs
//!   the greedy path on the rest.
//!
//! Caller items are never mutated; the greedy path may return a scaled copy
//! of the last item it touches.
//!
//! # Complexity
//!
//! Exact: O(n × C) time and space, where C is the scaled capacity.
//! Greedy: O(n log n).

mod config;
mod exact;
mod greedy;
mod optimizer;
mod types;

pub use config::KnapsackConfig;
pub use optimizer::InventoryOptimizer;
pub use types::{InventoryItem, KnapsackMode, KnapsackResult};
