//! Denomination sets and change results.

use crate::error::{FailureKind, OptimizeError, Result};

/// Common coin and bill denominations in cents, from $50 down to $0.01.
const STANDARD_DENOMINATIONS: [i64; 11] = [5000, 2000, 1000, 500, 200, 100, 50, 25, 10, 5, 1];

/// An ordered set of positive denominations in minor currency units.
///
/// Values are deduplicated and kept in descending order, which is the
/// iteration order the greedy engine relies on.
///
/// With the `serde` feature the set is encoded as a plain array and decoding
/// goes through [`DenominationSet::new`], so invalid sets are rejected.
///
/// # Examples
///
/// ```
/// use u_optimize::change::DenominationSet;
///
/// let set = DenominationSet::new(&[1, 25, 5, 10, 25]).unwrap();
/// assert_eq!(set.values(), &[25, 10, 5, 1]);
///
/// assert!(DenominationSet::new(&[10, 0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<i64>", into = "Vec<i64>")
)]
pub struct DenominationSet {
    values: Vec<i64>,
}

impl DenominationSet {
    /// Builds a set from arbitrary-order values.
    ///
    /// Fails if `values` is empty or contains a zero or negative entry.
    pub fn new(values: &[i64]) -> Result<Self> {
        if values.is_empty() {
            return Err(OptimizeError::invalid_input("denomination set is empty"));
        }
        if let Some(&bad) = values.iter().find(|&&v| v <= 0) {
            return Err(OptimizeError::invalid_input(format!(
                "denominations must be positive, got {bad}"
            )));
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();
        Ok(Self { values: sorted })
    }

    /// Denominations in descending order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of distinct denominations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for DenominationSet {
    /// The standard US set, `$50` down to `$0.01`, in cents.
    fn default() -> Self {
        Self {
            values: STANDARD_DENOMINATIONS.to_vec(),
        }
    }
}

impl TryFrom<Vec<i64>> for DenominationSet {
    type Error = OptimizeError;

    fn try_from(values: Vec<i64>) -> Result<Self> {
        Self::new(&values)
    }
}

impl From<DenominationSet> for Vec<i64> {
    fn from(set: DenominationSet) -> Self {
        set.values
    }
}

/// How many coins of one denomination a breakdown uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoinCount {
    /// Denomination value in minor units.
    pub denomination: i64,
    /// Number of coins of this denomination (always > 0).
    pub count: i64,
}

/// Outcome of a change calculation.
///
/// When `success` is true, `Σ denomination × count` equals the requested
/// amount exactly and `remaining` is 0.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangeResult {
    /// Coins used, largest denomination first. Empty on failure.
    pub breakdown: Vec<CoinCount>,

    /// Total number of coins in the breakdown.
    pub total_coins: i64,

    /// Amount left over that the denominations could not cover.
    pub remaining: i64,

    /// Whether an exact breakdown was found.
    pub success: bool,

    /// Why the calculation failed, if it did.
    pub failure: Option<FailureKind>,

    /// Human-readable summary.
    pub message: String,
}

impl ChangeResult {
    /// Sum of `denomination × count` over the breakdown.
    pub fn total_value(&self) -> i64 {
        self.breakdown
            .iter()
            .map(|c| c.denomination * c.count)
            .sum()
    }

    /// Number of coins used for `denomination`, 0 if absent.
    pub fn count_of(&self, denomination: i64) -> i64 {
        self.breakdown
            .iter()
            .find(|c| c.denomination == denomination)
            .map_or(0, |c| c.count)
    }

    pub(crate) fn failed(kind: FailureKind, remaining: i64, message: String) -> Self {
        Self {
            breakdown: Vec::new(),
            total_coins: 0,
            remaining,
            success: false,
            failure: Some(kind),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_sorted_and_deduplicated() {
        let set = DenominationSet::new(&[5, 1, 10, 5, 25]).unwrap();
        assert_eq!(set.values(), &[25, 10, 5, 1]);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_set_rejects_non_positive() {
        assert!(DenominationSet::new(&[]).is_err());
        assert!(DenominationSet::new(&[5, 0]).is_err());
        assert!(DenominationSet::new(&[-1, 5]).is_err());
    }

    #[test]
    fn test_try_from_validates() {
        let set = DenominationSet::try_from(vec![1, 10, 5, 10]).unwrap();
        assert_eq!(set.values(), &[10, 5, 1]);
        assert!(DenominationSet::try_from(vec![0]).is_err());
        assert_eq!(Vec::from(set), vec![10, 5, 1]);
    }

    #[test]
    fn test_default_set() {
        let set = DenominationSet::default();
        assert_eq!(set.values()[0], 5000);
        assert_eq!(set.values().last(), Some(&1));
        assert_eq!(set.len(), 11);
        assert!(set.values().windows(2).all(|w| w[0] > w[1]));
    }
}
