//! Inventory items, knapsack results and solver modes.

use crate::error::{FailureKind, OptimizeError};
use std::fmt;
use std::str::FromStr;

/// An item that may be stocked.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryItem {
    /// Product identifier.
    pub id: String,

    /// Display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    /// Capacity units consumed (space, kg, ...). Non-negative.
    pub weight: f64,

    /// Objective contribution to maximize.
    pub value: f64,

    /// Purchase cost. Informational only, never optimized.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cost: f64,

    /// Demand score in `[0, 1]`, 1 being the highest demand.
    #[cfg_attr(feature = "serde", serde(default))]
    pub demand_score: f64,
}

impl InventoryItem {
    /// Creates an item with the given weight and value; other fields zeroed.
    pub fn new(id: impl Into<String>, weight: f64, value: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            weight,
            value,
            cost: 0.0,
            demand_score: 0.0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the cost.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Sets the demand score.
    pub fn with_demand_score(mut self, score: f64) -> Self {
        self.demand_score = score;
        self
    }

    /// Value per unit of weight; 0 for weightless items.
    pub fn density(&self) -> f64 {
        if self.weight > 0.0 {
            self.value / self.weight
        } else {
            0.0
        }
    }
}

/// Outcome of an inventory optimization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackResult {
    /// Chosen items. The exact solver preserves input order; the greedy
    /// solver lists them in the order they were taken.
    pub selected_items: Vec<InventoryItem>,

    /// Sum of selected values.
    pub total_value: f64,

    /// Sum of selected weights.
    pub total_weight: f64,

    /// Sum of selected costs.
    pub total_cost: f64,

    /// Capacity consumed (equal to `total_weight`).
    pub capacity_used: f64,

    /// Capacity left over.
    pub capacity_available: f64,

    /// `total_value / total_weight`, or 0 when nothing weighs anything.
    pub efficiency: f64,

    /// Whether the last selected item is a fractional copy.
    pub fractional: bool,

    /// Why nothing could be selected, if applicable.
    pub failure: Option<FailureKind>,

    /// Human-readable summary.
    pub message: String,
}

impl KnapsackResult {
    /// An empty selection with an explanatory message.
    pub(crate) fn empty(capacity: f64, failure: Option<FailureKind>, message: String) -> Self {
        Self {
            selected_items: Vec::new(),
            total_value: 0.0,
            total_weight: 0.0,
            total_cost: 0.0,
            capacity_used: 0.0,
            capacity_available: capacity.max(0.0),
            efficiency: 0.0,
            fractional: false,
            failure,
            message,
        }
    }

    /// Builds the totals for a selection.
    pub(crate) fn from_selection(
        selected_items: Vec<InventoryItem>,
        capacity: f64,
        fractional: bool,
        label: &str,
    ) -> Self {
        let total_value: f64 = selected_items.iter().map(|i| i.value).sum();
        let total_weight: f64 = selected_items.iter().map(|i| i.weight).sum();
        let total_cost: f64 = selected_items.iter().map(|i| i.cost).sum();
        let efficiency = if total_weight > 0.0 {
            total_value / total_weight
        } else {
            0.0
        };

        let message = format!(
            "Selected {} items{} with total value {:.2} and weight {:.2}/{:.2}",
            selected_items.len(),
            label,
            total_value,
            total_weight,
            capacity
        );

        Self {
            selected_items,
            total_value,
            total_weight,
            total_cost,
            capacity_used: total_weight,
            capacity_available: (capacity - total_weight).max(0.0),
            efficiency,
            fractional,
            failure: None,
            message,
        }
    }

    /// Ids of the selected items, in result order.
    pub fn selected_ids(&self) -> Vec<&str> {
        self.selected_items.iter().map(|i| i.id.as_str()).collect()
    }
}

/// Which inventory solver to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KnapsackMode {
    /// 0/1 dynamic programming.
    Exact,

    /// Fractional greedy approximation.
    #[default]
    Greedy,

    /// Greedy over items meeting a demand threshold.
    DemandFiltered,
}

impl KnapsackMode {
    /// Canonical name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            KnapsackMode::Exact => "dp",
            KnapsackMode::Greedy => "greedy",
            KnapsackMode::DemandFiltered => "demand",
        }
    }
}

impl fmt::Display for KnapsackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KnapsackMode {
    type Err = OptimizeError;

    /// Accepts `dp`/`exact`, `greedy` (or empty) and `demand`/`demand_filtered`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dp" | "exact" => Ok(KnapsackMode::Exact),
            "" | "greedy" => Ok(KnapsackMode::Greedy),
            "demand" | "demand_filtered" => Ok(KnapsackMode::DemandFiltered),
            _ => Err(OptimizeError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density() {
        assert!((InventoryItem::new("a", 2.0, 3.0).density() - 1.5).abs() < 1e-12);
        assert_eq!(InventoryItem::new("b", 0.0, 3.0).density(), 0.0);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("dp".parse::<KnapsackMode>().unwrap(), KnapsackMode::Exact);
        assert_eq!("EXACT".parse::<KnapsackMode>().unwrap(), KnapsackMode::Exact);
        assert_eq!("".parse::<KnapsackMode>().unwrap(), KnapsackMode::Greedy);
        assert_eq!(
            "demand_filtered".parse::<KnapsackMode>().unwrap(),
            KnapsackMode::DemandFiltered
        );
        assert!(matches!(
            "branch_and_bound".parse::<KnapsackMode>(),
            Err(OptimizeError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_mode_display_parses_back() {
        for mode in [
            KnapsackMode::Exact,
            KnapsackMode::Greedy,
            KnapsackMode::DemandFiltered,
        ] {
            assert_eq!(mode.to_string().parse::<KnapsackMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_efficiency_zero_without_weight() {
        let result = KnapsackResult::from_selection(
            vec![InventoryItem::new("free", 0.0, 4.0)],
            10.0,
            false,
            "",
        );
        assert_eq!(result.efficiency, 0.0);
        assert!((result.total_value - 4.0).abs() < 1e-12);
        assert!((result.capacity_available - 10.0).abs() < 1e-12);
    }
}
