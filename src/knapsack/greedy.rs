//! Fractional greedy approximation and its demand-filtered variant.

use super::types::{InventoryItem, KnapsackResult};
use crate::error::FailureKind;
use crate::ranking::{Ranking, RankingRule};
use log::{debug, trace};

/// Capacity below this is treated as exhausted.
const CAPACITY_EPSILON: f64 = 1e-9;

/// Highest value per unit of weight first.
struct ValueDensity;

impl RankingRule<InventoryItem> for ValueDensity {
    fn name(&self) -> &str {
        "ValueDensity"
    }

    fn score(&self, item: &InventoryItem) -> f64 {
        -item.density()
    }
}

/// Takes whole items by descending value density, then a fraction of the
/// first item that does not fit.
///
/// The total is the fractional-knapsack value, an upper bound on the 0/1
/// optimum. Items with equal density keep their input order.
pub(crate) fn solve(items: &[InventoryItem], capacity: f64) -> KnapsackResult {
    if items.is_empty() {
        return KnapsackResult::empty(
            capacity,
            Some(FailureKind::InvalidInput),
            "No items provided".into(),
        );
    }
    if capacity.is_nan() || capacity <= 0.0 {
        return KnapsackResult::empty(
            capacity,
            Some(FailureKind::InvalidInput),
            "Invalid capacity (must be > 0)".into(),
        );
    }

    let order = Ranking::new().with_rule(ValueDensity).sort_indices(items);

    let mut selected = Vec::new();
    let mut remaining = capacity;
    let mut fractional = false;

    for i in order {
        if remaining <= CAPACITY_EPSILON {
            break;
        }

        let item = &items[i];
        if item.weight <= remaining {
            trace!("greedy takes '{}' whole", item.id);
            remaining -= item.weight.max(0.0);
            selected.push(item.clone());
        } else {
            let fraction = remaining / item.weight;
            trace!("greedy takes {:.4} of '{}'", fraction, item.id);
            selected.push(InventoryItem {
                weight: remaining,
                value: item.value * fraction,
                cost: item.cost * fraction,
                ..item.clone()
            });
            fractional = true;
            break;
        }
    }

    let result = KnapsackResult::from_selection(selected, capacity, fractional, " (greedy)");

    debug!(
        "greedy knapsack: {} of {} items, value {:.2}, weight {:.2}/{:.2}, fractional={}",
        result.selected_items.len(),
        items.len(),
        result.total_value,
        result.total_weight,
        capacity,
        fractional
    );

    result
}

/// Runs [`solve`] over the items whose demand score meets `min_demand_score`.
///
/// Negative thresholds are clamped to 0.
pub(crate) fn solve_by_demand(
    items: &[InventoryItem],
    capacity: f64,
    min_demand_score: f64,
) -> KnapsackResult {
    let threshold = min_demand_score.max(0.0);

    let filtered: Vec<InventoryItem> = items
        .iter()
        .filter(|item| item.demand_score >= threshold)
        .cloned()
        .collect();

    debug!(
        "demand filter {:.2}: {} of {} items remain",
        threshold,
        filtered.len(),
        items.len()
    );

    if filtered.is_empty() {
        return KnapsackResult::empty(
            capacity,
            Some(FailureKind::Infeasible),
            format!("No items meet the minimum demand score of {threshold:.2}"),
        );
    }

    solve(&filtered, capacity)
}
