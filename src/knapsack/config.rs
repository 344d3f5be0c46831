//! Inventory optimizer configuration.

use crate::error::{OptimizeError, Result};
use crate::money;

/// Tolerance, in scaled units, for float noise when discretizing.
///
/// `0.29 * 100.0` is `28.999999999999996` and `0.3 * 100.0` is
/// `30.000000000000004`; without the tolerance a capacity of 0.29 would floor
/// to 28 units and a weight of 0.3 would ceil to 31.
const SCALE_TOLERANCE: f64 = 1e-6;

/// Configuration for the exact (dynamic programming) solver.
///
/// # Examples
///
/// ```
/// use u_optimize::knapsack::KnapsackConfig;
///
/// let config = KnapsackConfig::default().with_decimal_places(1);
/// assert_eq!(config.decimal_places, 1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackConfig {
    /// Decimal digits of weight/capacity preserved by discretization.
    ///
    /// The DP table has `capacity × 10^decimal_places + 1` columns.
    pub decimal_places: u32,

    /// Upper bound on `items × columns` for the DP marker table.
    ///
    /// Larger problems are rejected instead of allocating unbounded memory.
    pub max_table_cells: usize,
}

impl Default for KnapsackConfig {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            max_table_cells: 50_000_000,
        }
    }
}

impl KnapsackConfig {
    /// Sets the number of preserved decimal places.
    pub fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = places;
        self
    }

    /// Sets the DP table size limit.
    pub fn with_max_table_cells(mut self, cells: usize) -> Self {
        self.max_table_cells = cells;
        self
    }

    /// Multiplier from continuous units to integer units.
    pub fn scale(&self) -> f64 {
        money::scale(self.decimal_places)
    }

    /// Capacity in integer units, rounded down.
    pub(crate) fn scale_capacity(&self, capacity: f64) -> usize {
        (capacity * self.scale() + SCALE_TOLERANCE).floor().max(0.0) as usize
    }

    /// Weight in integer units, rounded up; negative weights clamp to 0.
    ///
    /// Flooring the capacity and ceiling the weights guarantees that any set
    /// the DP accepts also fits the unscaled capacity.
    pub(crate) fn scale_weight(&self, weight: f64) -> usize {
        (weight * self.scale() - SCALE_TOLERANCE).ceil().max(0.0) as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.decimal_places > 6 {
            return Err(OptimizeError::invalid_config(format!(
                "decimal_places must be at most 6, got {}",
                self.decimal_places
            )));
        }
        if self.max_table_cells == 0 {
            return Err(OptimizeError::invalid_config(
                "max_table_cells must be positive",
            ));
        }
        Ok(())
    }
}
