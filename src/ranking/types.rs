//! Core trait for ranking rules.

/// A scoring rule used to order candidates.
///
/// Lower scores rank first. Rules that prefer larger quantities negate them.
///
/// # Examples
///
/// ```
/// use u_optimize::ranking::RankingRule;
///
/// struct LargestFirst;
///
/// impl RankingRule<u32> for LargestFirst {
///     fn name(&self) -> &str { "LargestFirst" }
///     fn score(&self, item: &u32) -> f64 { -(*item as f64) }
/// }
///
/// assert!(LargestFirst.score(&5) < LargestFirst.score(&2));
/// ```
pub trait RankingRule<T>: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes the ranking score for an item. Lower ranks first.
    fn score(&self, item: &T) -> f64;
}
