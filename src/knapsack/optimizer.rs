//! Entry points for inventory optimization.

use super::config::KnapsackConfig;
use super::types::{InventoryItem, KnapsackMode, KnapsackResult};
use super::{exact, greedy};
use log::debug;

/// Selects inventory under a capacity constraint.
///
/// # Examples
///
/// Exact and greedy side by side: at capacity 4.5 the greedy path reaches a
/// higher value only because it includes part of an item.
///
/// ```
/// use u_optimize::knapsack::{InventoryItem, InventoryOptimizer, KnapsackConfig};
///
/// let items = vec![
///     InventoryItem::new("a", 2.0, 3.0),
///     InventoryItem::new("b", 3.0, 4.0),
///     InventoryItem::new("c", 4.0, 5.0),
/// ];
///
/// let exact = InventoryOptimizer::solve_exact(&items, 4.5, &KnapsackConfig::default());
/// let greedy = InventoryOptimizer::solve_greedy(&items, 4.5);
///
/// assert!((exact.total_value - 5.0).abs() < 1e-9);
/// assert!(greedy.fractional);
/// assert!(greedy.total_value > exact.total_value);
/// ```
pub struct InventoryOptimizer;

impl InventoryOptimizer {
    /// Exact 0/1 selection by dynamic programming.
    ///
    /// Selected items keep their input order. Empty input or a non-positive
    /// capacity yields an empty result with an explanatory message.
    pub fn solve_exact(
        items: &[InventoryItem],
        capacity: f64,
        config: &KnapsackConfig,
    ) -> KnapsackResult {
        exact::solve(items, capacity, config)
    }

    /// Fractional greedy approximation (upper bound on the 0/1 optimum).
    pub fn solve_greedy(items: &[InventoryItem], capacity: f64) -> KnapsackResult {
        greedy::solve(items, capacity)
    }

    /// Greedy approximation over items with `demand_score >= min_demand_score`.
    pub fn solve_by_demand(
        items: &[InventoryItem],
        capacity: f64,
        min_demand_score: f64,
    ) -> KnapsackResult {
        greedy::solve_by_demand(items, capacity, min_demand_score)
    }

    /// Dispatches to the solver selected by `mode`.
    ///
    /// In [`KnapsackMode::Greedy`] a positive `min_demand_score` routes to the
    /// demand-filtered path. [`KnapsackMode::DemandFiltered`] without a
    /// threshold filters at 0.
    pub fn optimize(
        items: &[InventoryItem],
        capacity: f64,
        mode: KnapsackMode,
        min_demand_score: Option<f64>,
        config: &KnapsackConfig,
    ) -> KnapsackResult {
        let threshold = min_demand_score.unwrap_or(0.0).max(0.0);
        debug!(
            "optimize inventory: mode={mode}, {} items, capacity {capacity:.2}, min demand {threshold:.2}",
            items.len()
        );

        match mode {
            KnapsackMode::Exact => Self::solve_exact(items, capacity, config),
            KnapsackMode::Greedy if threshold > 0.0 => {
                Self::solve_by_demand(items, capacity, threshold)
            }
            KnapsackMode::Greedy => Self::solve_greedy(items, capacity),
            KnapsackMode::DemandFiltered => Self::solve_by_demand(items, capacity, threshold),
        }
    }
}
