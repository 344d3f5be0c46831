//! Fitness scoring configuration.

use crate::error::{OptimizeError, Result};

/// Constants of the fitness score and execution options.
///
/// The defaults reproduce the production scoring:
///
/// | utilization `size/capacity` | factor |
/// |-----------------------------|--------|
/// | `< 0.5`                     | ×0.7   |
/// | `< 0.75`                    | ×0.9   |
/// | `>= 0.75`                   | ×1.0   |
///
/// Distances are clamped to 100 units and cost up to 30% of the score.
/// Each side's priority adds up to +0.10 (`priority / 10 × 0.1`).
///
/// # Examples
///
/// ```
/// use u_optimize::assignment::AssignmentConfig;
///
/// let config = AssignmentConfig::default()
///     .with_distance_ceiling(50.0)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentConfig {
    /// Utilization below which a table counts as much too large.
    pub loose_fit_ratio: f64,

    /// Score multiplier for much-too-large tables.
    pub loose_fit_factor: f64,

    /// Utilization below which a table counts as somewhat too large.
    pub partial_fit_ratio: f64,

    /// Score multiplier for somewhat-too-large tables.
    pub partial_fit_factor: f64,

    /// Distance at which the distance penalty saturates.
    pub distance_ceiling: f64,

    /// Penalty fraction applied at `distance_ceiling` (0.3 = up to 30%).
    pub max_distance_penalty: f64,

    /// Priority value that earns the full priority bonus.
    pub max_priority: f64,

    /// Bonus for a table at `max_priority`.
    pub table_priority_bonus: f64,

    /// Bonus for a group at `max_priority`.
    pub group_priority_bonus: f64,

    /// Whether to score the optimal-mode fitness matrix in parallel using rayon.
    pub parallel: bool,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            loose_fit_ratio: 0.5,
            loose_fit_factor: 0.7,
            partial_fit_ratio: 0.75,
            partial_fit_factor: 0.9,
            distance_ceiling: 100.0,
            max_distance_penalty: 0.3,
            max_priority: 10.0,
            table_priority_bonus: 0.1,
            group_priority_bonus: 0.1,
            parallel: true,
        }
    }
}

impl AssignmentConfig {
    /// Sets the utilization tiers and their multipliers.
    pub fn with_utilization_tiers(
        mut self,
        loose_ratio: f64,
        loose_factor: f64,
        partial_ratio: f64,
        partial_factor: f64,
    ) -> Self {
        self.loose_fit_ratio = loose_ratio;
        self.loose_fit_factor = loose_factor;
        self.partial_fit_ratio = partial_ratio;
        self.partial_fit_factor = partial_factor;
        self
    }

    /// Sets the distance normalization ceiling.
    pub fn with_distance_ceiling(mut self, ceiling: f64) -> Self {
        self.distance_ceiling = ceiling;
        self
    }

    /// Sets the maximum distance penalty fraction.
    pub fn with_max_distance_penalty(mut self, penalty: f64) -> Self {
        self.max_distance_penalty = penalty;
        self
    }

    /// Sets the priority scale and both bonuses.
    pub fn with_priority_bonus(mut self, max_priority: f64, table: f64, group: f64) -> Self {
        self.max_priority = max_priority;
        self.table_priority_bonus = table;
        self.group_priority_bonus = group;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let unit = |name: &str, v: f64| {
            if (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(OptimizeError::invalid_config(format!(
                    "{name} must be in [0, 1], got {v}"
                )))
            }
        };

        unit("loose_fit_ratio", self.loose_fit_ratio)?;
        unit("partial_fit_ratio", self.partial_fit_ratio)?;
        unit("loose_fit_factor", self.loose_fit_factor)?;
        unit("partial_fit_factor", self.partial_fit_factor)?;
        unit("max_distance_penalty", self.max_distance_penalty)?;
        unit("table_priority_bonus", self.table_priority_bonus)?;
        unit("group_priority_bonus", self.group_priority_bonus)?;

        if self.loose_fit_ratio > self.partial_fit_ratio {
            return Err(OptimizeError::invalid_config(
                "loose_fit_ratio must not exceed partial_fit_ratio",
            ));
        }
        if self.distance_ceiling.is_nan() || self.distance_ceiling <= 0.0 {
            return Err(OptimizeError::invalid_config(
                "distance_ceiling must be positive",
            ));
        }
        if self.max_priority.is_nan() || self.max_priority <= 0.0 {
            return Err(OptimizeError::invalid_config("max_priority must be positive"));
        }
        Ok(())
    }
}
