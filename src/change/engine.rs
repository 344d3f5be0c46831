//! Greedy change computation.

use super::types::{ChangeResult, CoinCount, DenominationSet};
use crate::error::FailureKind;
use log::{debug, trace};

/// Computes coin breakdowns for a [`DenominationSet`].
///
/// # Examples
///
/// ```
/// use u_optimize::change::{ChangeEngine, DenominationSet};
///
/// let set = DenominationSet::new(&[25, 10, 5, 1]).unwrap();
/// let result = ChangeEngine::calculate(&set, 37);
///
/// assert!(result.success);
/// assert_eq!(result.total_coins, 4);
/// assert_eq!(result.count_of(25), 1);
/// assert_eq!(result.count_of(10), 1);
/// assert_eq!(result.count_of(1), 2);
/// ```
pub struct ChangeEngine;

impl ChangeEngine {
    /// Breaks `amount` (minor units) into coins, largest first.
    ///
    /// - Negative amounts are rejected as [`FailureKind::InvalidInput`].
    /// - Zero returns an empty, successful breakdown.
    /// - If a residual is left after the pass, the amount is
    ///   [`FailureKind::Infeasible`] for this set and `remaining` holds it.
    pub fn calculate(denominations: &DenominationSet, amount: i64) -> ChangeResult {
        if amount < 0 {
            debug!("change rejected: negative amount {amount}");
            return ChangeResult::failed(
                FailureKind::InvalidInput,
                0,
                "Amount cannot be negative".into(),
            );
        }

        if amount == 0 {
            return ChangeResult {
                breakdown: Vec::new(),
                total_coins: 0,
                remaining: 0,
                success: true,
                failure: None,
                message: "No change needed".into(),
            };
        }

        let mut remaining = amount;
        let mut breakdown = Vec::new();

        for &denomination in denominations.values() {
            let quantity = remaining / denomination;
            if quantity > 0 {
                trace!("taking {quantity} x {denomination}");
                breakdown.push(CoinCount {
                    denomination,
                    count: quantity,
                });
                remaining -= quantity * denomination;
            }
            if remaining == 0 {
                break;
            }
        }

        if remaining > 0 {
            debug!("amount {amount} not representable, residual {remaining}");
            return ChangeResult::failed(
                FailureKind::Infeasible,
                remaining,
                format!("Cannot make exact change. Remaining: {remaining}"),
            );
        }

        let total_coins: i64 = breakdown.iter().map(|c| c.count).sum();
        debug!("change for {amount}: {total_coins} coins");

        ChangeResult {
            breakdown,
            total_coins,
            remaining: 0,
            success: true,
            failure: None,
            message: format!("Change calculated with {total_coins} coins"),
        }
    }
}
