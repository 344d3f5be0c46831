//! Request-level facade over the three engines.
//!
//! [`Optimizer`] accepts the loosely typed requests a front end decodes
//! (major-unit money, mode names as strings) and turns them into engine
//! calls. Mode names are the only thing that can fail here; every other
//! problem with a request comes back inside the engine's result.

use crate::assignment::{
    AssignmentConfig, AssignmentEngine, AssignmentMode, AssignmentResult, CustomerGroup,
    TableResource,
};
use crate::change::{ChangeEngine, ChangeResult, DenominationSet};
use crate::error::{FailureKind, OptimizeError, Result};
use crate::knapsack::{
    InventoryItem, InventoryOptimizer, KnapsackConfig, KnapsackMode, KnapsackResult,
};
use crate::money;
use log::debug;

/// A payment to make change for, in major currency units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangeRequest {
    pub amount_paid: f64,
    pub total_cost: f64,
}

/// Change owed for a payment together with its coin breakdown.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaymentChange {
    /// `amount_paid - total_cost` in minor units; 0 when the payment was
    /// rejected.
    pub change_due: i64,

    /// Breakdown of `change_due`.
    pub result: ChangeResult,
}

/// An inventory selection request.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryRequest {
    pub items: Vec<InventoryItem>,
    pub max_capacity: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_demand_score: Option<f64>,
    /// `"dp"`, `"greedy"` (or empty) or `"demand"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub algorithm: String,
}

/// A table assignment request.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentRequest {
    pub tables: Vec<TableResource>,
    pub groups: Vec<CustomerGroup>,
    /// `"greedy"` (or empty) or `"optimal"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub method: String,
}

/// Holds the denomination set and solver configuration shared by all calls.
///
/// # Examples
///
/// ```
/// use u_optimize::service::{ChangeRequest, Optimizer};
///
/// let optimizer = Optimizer::default();
/// let change = optimizer.calculate_payment_change(&ChangeRequest {
///     amount_paid: 20.0,
///     total_cost: 12.63,
/// });
///
/// assert_eq!(change.change_due, 737);
/// assert!(change.result.success);
/// assert_eq!(change.result.count_of(500), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Optimizer {
    denominations: DenominationSet,
    decimal_places: u32,
    knapsack: KnapsackConfig,
    assignment: AssignmentConfig,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self {
            denominations: DenominationSet::default(),
            decimal_places: 2,
            knapsack: KnapsackConfig::default(),
            assignment: AssignmentConfig::default(),
        }
    }
}

impl Optimizer {
    /// Creates an optimizer over `denominations` with default solver settings.
    pub fn new(denominations: DenominationSet) -> Self {
        Self {
            denominations,
            ..Self::default()
        }
    }

    /// Sets the currency precision used to convert payments.
    pub fn with_decimal_places(mut self, places: u32) -> Result<Self> {
        if places > 6 {
            return Err(OptimizeError::invalid_config("decimal_places must be at most 6"));
        }
        self.decimal_places = places;
        Ok(self)
    }

    /// Replaces the knapsack settings after validating them.
    pub fn with_knapsack_config(mut self, config: KnapsackConfig) -> Result<Self> {
        config.validate()?;
        self.knapsack = config;
        Ok(self)
    }

    /// Replaces the assignment settings after validating them.
    pub fn with_assignment_config(mut self, config: AssignmentConfig) -> Result<Self> {
        config.validate()?;
        self.assignment = config;
        Ok(self)
    }

    /// The denominations change is made from, largest first.
    pub fn denominations(&self) -> &DenominationSet {
        &self.denominations
    }

    /// Denominations formatted as currency labels, e.g. `"$0.25"`.
    pub fn available_coins(&self) -> Vec<String> {
        self.denominations
            .values()
            .iter()
            .map(|&d| money::format_minor_units(d, self.decimal_places))
            .collect()
    }

    /// Breaks an amount already in minor units into coins.
    pub fn calculate_change(&self, amount_minor: i64) -> ChangeResult {
        ChangeEngine::calculate(&self.denominations, amount_minor)
    }

    /// Computes the change owed for a payment and breaks it into coins.
    ///
    /// Negative amounts and payments that do not cover the cost are reported
    /// as [`FailureKind::InvalidInput`].
    pub fn calculate_payment_change(&self, request: &ChangeRequest) -> PaymentChange {
        if request.amount_paid < 0.0 || request.total_cost < 0.0 {
            return PaymentChange {
                change_due: 0,
                result: rejected_payment("Amounts cannot be negative"),
            };
        }

        let due = money::change_due(request.amount_paid, request.total_cost, self.decimal_places);
        if due < 0 {
            debug!("payment short by {} minor units", -due);
            return PaymentChange {
                change_due: 0,
                result: rejected_payment("Insufficient payment amount"),
            };
        }

        PaymentChange {
            change_due: due,
            result: self.calculate_change(due),
        }
    }

    /// Runs the knapsack solver named by `request.algorithm`.
    pub fn optimize_inventory(&self, request: &InventoryRequest) -> Result<KnapsackResult> {
        let mode: KnapsackMode = request.algorithm.parse()?;
        Ok(InventoryOptimizer::optimize(
            &request.items,
            request.max_capacity,
            mode,
            request.min_demand_score,
            &self.knapsack,
        ))
    }

    /// Runs the assignment mode named by `request.method`.
    pub fn assign_tables(&self, request: &AssignmentRequest) -> Result<AssignmentResult> {
        let mode: AssignmentMode = request.method.parse()?;
        Ok(AssignmentEngine::assign(
            &request.tables,
            &request.groups,
            mode,
            &self.assignment,
        ))
    }
}

fn rejected_payment(message: &str) -> ChangeResult {
    ChangeResult::failed(FailureKind::InvalidInput, 0, message.into())
}
