//! Sequential rule composition.

use super::types::RankingRule;
use log::trace;
use std::cmp::Ordering;

/// Orders items by a sequence of [`RankingRule`]s.
///
/// Scores are compared exactly with [`f64::total_cmp`], so the order is
/// total for any input, NaN included (NaN ranks after every number).
///
/// # Examples
///
/// ```
/// use u_optimize::ranking::{Ranking, RankingRule};
///
/// struct Ascending;
/// impl RankingRule<i32> for Ascending {
///     fn name(&self) -> &str { "Ascending" }
///     fn score(&self, item: &i32) -> f64 { *item as f64 }
/// }
///
/// let ranking = Ranking::new().with_rule(Ascending);
/// assert_eq!(ranking.sort_indices(&[3, 1, 2]), vec![1, 2, 0]);
/// ```
pub struct Ranking<T> {
    rules: Vec<Box<dyn RankingRule<T>>>,
}

impl<T> Ranking<T> {
    /// Creates a ranking with no rules (identity order).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. Earlier rules dominate later ones.
    pub fn with_rule<R: RankingRule<T> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns indices into `items` in ranked order.
    ///
    /// The sort is stable: items with equal scores on every rule keep their
    /// input order.
    pub fn sort_indices(&self, items: &[T]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();
        if self.rules.is_empty() {
            return indices;
        }

        trace!(
            "ranking {} items by [{}]",
            items.len(),
            self.rules
                .iter()
                .map(|r| r.name())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let scores: Vec<Vec<f64>> = items
            .iter()
            .map(|item| self.rules.iter().map(|r| r.score(item)).collect())
            .collect();

        indices.sort_by(|&a, &b| {
            scores[a]
                .iter()
                .zip(&scores[b])
                .map(|(va, vb)| va.total_cmp(vb))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        });

        indices
    }
}

impl<T> Default for Ranking<T> {
    fn default() -> Self {
        Self::new()
    }
}
