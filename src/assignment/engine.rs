//! Assignment entry points.

use super::config::AssignmentConfig;
use super::types::{AssignmentMode, AssignmentResult, CustomerGroup, TableResource};
use super::{greedy, optimal};
use log::debug;

/// Assigns tables to customer groups.
///
/// Callers own both slices; neither is reordered or modified.
///
/// # Examples
///
/// ```
/// use u_optimize::assignment::{
///     AssignmentConfig, AssignmentEngine, AssignmentMode, CustomerGroup, TableResource,
/// };
///
/// let tables = vec![
///     TableResource::new("t1", 2, 0.0, 0.0),
///     TableResource::new("t2", 4, 5.0, 0.0),
/// ];
/// let groups = vec![
///     CustomerGroup::new("couple", 2),
///     CustomerGroup::new("family", 4).with_priority(5),
/// ];
///
/// let result = AssignmentEngine::assign(
///     &tables,
///     &groups,
///     AssignmentMode::Optimal,
///     &AssignmentConfig::default(),
/// );
///
/// assert_eq!(result.tables_used, 2);
/// assert_eq!(result.customers_served, 6);
/// assert_eq!(result.assignment_for("family").unwrap().table_id, "t2");
/// ```
pub struct AssignmentEngine;

impl AssignmentEngine {
    /// Serves groups in priority order, each taking its best free table.
    pub fn assign_greedy(
        tables: &[TableResource],
        groups: &[CustomerGroup],
        config: &AssignmentConfig,
    ) -> AssignmentResult {
        greedy::assign(tables, groups, config)
    }

    /// Maximum-weight matching: seats as many groups as possible, then
    /// maximizes total fitness among those seatings.
    pub fn assign_optimal(
        tables: &[TableResource],
        groups: &[CustomerGroup],
        config: &AssignmentConfig,
    ) -> AssignmentResult {
        optimal::assign(tables, groups, config)
    }

    /// Dispatches to the matcher selected by `mode`.
    pub fn assign(
        tables: &[TableResource],
        groups: &[CustomerGroup],
        mode: AssignmentMode,
        config: &AssignmentConfig,
    ) -> AssignmentResult {
        debug!(
            "assign tables: mode={mode}, {} tables, {} groups",
            tables.len(),
            groups.len()
        );

        match mode {
            AssignmentMode::Greedy => Self::assign_greedy(tables, groups, config),
            AssignmentMode::Optimal => Self::assign_optimal(tables, groups, config),
        }
    }
}
