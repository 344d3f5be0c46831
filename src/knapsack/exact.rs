//! 0/1 knapsack by dynamic programming.

use super::config::KnapsackConfig;
use super::types::{InventoryItem, KnapsackResult};
use crate::error::FailureKind;
use log::{debug, warn};

/// Solves the 0/1 knapsack exactly over the discretized capacity axis.
///
/// `best[c]` holds the best value reachable with at most `c` units after the
/// items processed so far. Each item sweeps `c` from the capacity *down* to
/// its own weight, so `best[c - w]` still reflects the previous items and an
/// item can never be counted twice. `taken[i][c]` records whether item `i`
/// improved `best[c]`; walking those markers back from the full capacity
/// recovers the selection.
pub(crate) fn solve(
    items: &[InventoryItem],
    capacity: f64,
    config: &KnapsackConfig,
) -> KnapsackResult {
    if items.is_empty() {
        return KnapsackResult::empty(
            capacity,
            Some(FailureKind::InvalidInput),
            "No items provided".into(),
        );
    }
    if !capacity.is_finite() || capacity <= 0.0 {
        return KnapsackResult::empty(
            capacity,
            Some(FailureKind::InvalidInput),
            "Invalid capacity (must be > 0)".into(),
        );
    }

    let n = items.len();
    let cap_units = config.scale_capacity(capacity);
    let width = match cap_units.checked_add(1) {
        Some(width) if n.saturating_mul(width) <= config.max_table_cells => width,
        _ => {
            warn!(
                "exact knapsack rejected: {n} items x {cap_units} units exceeds {} cells",
                config.max_table_cells
            );
            return KnapsackResult::empty(
                capacity,
                Some(FailureKind::InvalidInput),
                format!(
                    "Capacity too large for exact solver ({n} items x {cap_units} units exceeds {})",
                    config.max_table_cells
                ),
            );
        }
    };

    let weights: Vec<usize> = items.iter().map(|i| config.scale_weight(i.weight)).collect();

    let mut best = vec![0.0f64; width];
    let mut taken = vec![false; n * width];

    for (i, item) in items.iter().enumerate() {
        let w = weights[i];
        if w > cap_units {
            continue;
        }
        let row = &mut taken[i * width..(i + 1) * width];
        for c in (w..=cap_units).rev() {
            let candidate = best[c - w] + item.value;
            if candidate > best[c] {
                best[c] = candidate;
                row[c] = true;
            }
        }
    }

    // Walk back from the full capacity; a marker at (i, c) implies w_i <= c.
    let mut c = cap_units;
    let mut picked = Vec::new();
    for i in (0..n).rev() {
        if taken[i * width + c] {
            picked.push(i);
            c -= weights[i];
        }
    }
    picked.reverse();

    let selected: Vec<InventoryItem> = picked.into_iter().map(|i| items[i].clone()).collect();
    let result = KnapsackResult::from_selection(selected, capacity, false, "");

    debug!(
        "exact knapsack: {} of {} items, value {:.2}, weight {:.2}/{:.2} ({} units)",
        result.selected_items.len(),
        n,
        result.total_value,
        result.total_weight,
        capacity,
        cap_units
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<InventoryItem> {
        vec![
            InventoryItem::new("a", 2.0, 3.0),
            InventoryItem::new("b", 3.0, 4.0),
            InventoryItem::new("c", 4.0, 5.0),
        ]
    }

    #[test]
    fn test_small_instance() {
        let result = solve(&abc(), 5.0, &KnapsackConfig::default());

        assert_eq!(result.selected_ids(), vec!["a", "b"]);
        assert!((result.total_value - 7.0).abs() < 1e-9);
        assert!((result.total_weight - 5.0).abs() < 1e-9);
        assert!(result.capacity_available.abs() < 1e-9);
        assert!((result.efficiency - 1.4).abs() < 1e-9);
        assert!(!result.fractional);
        assert_eq!(result.failure, None);
    }

    #[test]
    fn test_fractional_capacity() {
        let result = solve(&abc(), 4.5, &KnapsackConfig::default());
        assert_eq!(result.selected_ids(), vec!["c"]);
        assert!((result.total_value - 5.0).abs() < 1e-9);
        assert!((result.capacity_available - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_item_used_at_most_once() {
        // Unbounded knapsack would take "a" three times.
        let items = vec![
            InventoryItem::new("a", 1.0, 10.0),
            InventoryItem::new("b", 3.0, 12.0),
        ];
        let result = solve(&items, 3.0, &KnapsackConfig::default());
        assert_eq!(result.selected_ids(), vec!["b"]);
        assert!((result.total_value - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_preserves_input_order() {
        let items = vec![
            InventoryItem::new("z", 1.0, 1.0),
            InventoryItem::new("y", 1.0, 5.0),
            InventoryItem::new("x", 5.0, 1.0),
            InventoryItem::new("w", 1.0, 4.0),
        ];
        let result = solve(&items, 3.0, &KnapsackConfig::default());
        assert_eq!(result.selected_ids(), vec!["z", "y", "w"]);
    }

    #[test]
    fn test_two_decimal_weights() {
        let items = vec![
            InventoryItem::new("a", 0.29, 1.0),
            InventoryItem::new("b", 0.71, 2.0),
            InventoryItem::new("c", 0.3, 1.5),
        ];
        let result = solve(&items, 1.0, &KnapsackConfig::default());
        assert_eq!(result.selected_ids(), vec!["a", "b"]);
        assert!(result.total_weight <= 1.0 + 1e-9);
    }

    #[test]
    fn test_cost_is_summed_not_optimized() {
        let items = vec![
            InventoryItem::new("a", 1.0, 2.0).with_cost(100.0),
            InventoryItem::new("b", 1.0, 1.0).with_cost(1.0),
        ];
        let result = solve(&items, 1.0, &KnapsackConfig::default());
        assert_eq!(result.selected_ids(), vec!["a"]);
        assert!((result.total_cost - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_nothing_fits() {
        let items = vec![InventoryItem::new("big", 10.0, 3.0)];
        let result = solve(&items, 2.0, &KnapsackConfig::default());
        assert!(result.selected_items.is_empty());
        assert_eq!(result.efficiency, 0.0);
        assert!((result.capacity_available - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        let config = KnapsackConfig::default();

        let empty = solve(&[], 5.0, &config);
        assert_eq!(empty.failure, Some(FailureKind::InvalidInput));
        assert_eq!(empty.message, "No items provided");

        let zero = solve(&abc(), 0.0, &config);
        assert_eq!(zero.failure, Some(FailureKind::InvalidInput));
        assert_eq!(zero.message, "Invalid capacity (must be > 0)");

        let negative = solve(&abc(), -2.0, &config);
        assert!(negative.selected_items.is_empty());
    }

    #[test]
    fn test_table_limit() {
        let config = KnapsackConfig::default().with_max_table_cells(100);
        let result = solve(&abc(), 5.0, &config);
        assert_eq!(result.failure, Some(FailureKind::InvalidInput));
        assert!(result.message.starts_with("Capacity too large"));
    }

    #[test]
    fn test_huge_capacity_rejected() {
        let config = KnapsackConfig::default();

        let huge = solve(&abc(), 1e20, &config);
        assert_eq!(huge.failure, Some(FailureKind::InvalidInput));
        assert!(huge.message.starts_with("Capacity too large"));
        assert!(huge.selected_items.is_empty());

        // Scales past usize::MAX before the table size is checked.
        let saturated = solve(&abc(), f64::MAX, &config);
        assert_eq!(saturated.failure, Some(FailureKind::InvalidInput));
        assert!(saturated.message.starts_with("Capacity too large"));
    }

    #[test]
    fn test_non_finite_capacity_rejected() {
        let config = KnapsackConfig::default();
        for capacity in [f64::INFINITY, f64::NAN, f64::NEG_INFINITY] {
            let result = solve(&abc(), capacity, &config);
            assert_eq!(result.failure, Some(FailureKind::InvalidInput));
            assert_eq!(result.message, "Invalid capacity (must be > 0)");
        }
    }

    #[test]
    fn test_caller_items_untouched() {
        let items = abc();
        let snapshot = items.clone();
        let _ = solve(&items, 5.0, &KnapsackConfig::default());
        assert_eq!(items, snapshot);
    }
}
