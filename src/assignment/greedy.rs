//! Priority-ordered greedy matching.

use super::config::AssignmentConfig;
use super::fitness::fitness_score;
use super::matching::{make_assignment, prepare, service_order, summarize};
use super::types::{AssignmentResult, CustomerGroup, TableResource};
use log::{debug, trace};
use std::collections::HashSet;

/// Seats groups one at a time in service order.
///
/// Each group takes the free table with the strictly highest positive
/// score; on equal scores the table listed first wins. Once a table id is
/// taken every entry carrying that id is skipped. Groups with no
/// positive-scoring table are reported unassigned.
pub(crate) fn assign(
    tables: &[TableResource],
    groups: &[CustomerGroup],
    config: &AssignmentConfig,
) -> AssignmentResult {
    let eligible = match prepare(tables, groups) {
        Ok(eligible) => eligible,
        Err(result) => return result,
    };

    let mut taken: HashSet<&str> = HashSet::new();
    let mut seated = Vec::new();
    let mut unassigned = Vec::new();

    for gi in service_order(groups) {
        let group = &groups[gi];

        let mut best: Option<(usize, f64)> = None;
        for (ti, table) in eligible.iter().enumerate() {
            if taken.contains(table.id.as_str()) {
                continue;
            }
            let score = fitness_score(table, group, config);
            if score > 0.0 && best.is_none_or(|(_, b)| score > b) {
                best = Some((ti, score));
            }
        }

        match best {
            Some((ti, score)) => {
                trace!(
                    "group '{}' -> table '{}' ({:.3})",
                    group.id,
                    eligible[ti].id,
                    score
                );
                taken.insert(eligible[ti].id.as_str());
                seated.push((make_assignment(eligible[ti], group, score), group.size));
            }
            None => {
                trace!("group '{}' has no fitting table", group.id);
                unassigned.push(group.id.clone());
            }
        }
    }

    let result = summarize(seated, unassigned, groups.len());
    debug!(
        "greedy assignment: {} of {} groups seated, total fitness {:.3}",
        result.tables_used,
        groups.len(),
        result.total_fitness
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    fn config() -> AssignmentConfig {
        AssignmentConfig::default()
    }

    #[test]
    fn test_group_larger_than_every_table() {
        let tables = vec![TableResource::new("t1", 2, 0.0, 0.0)];
        let groups = vec![CustomerGroup::new("g1", 4)];

        let result = assign(&tables, &groups, &config());

        assert!(result.assignments.is_empty());
        assert_eq!(result.unassigned_groups, vec!["g1"]);
        assert_eq!(result.tables_used, 0);
        assert_eq!(result.average_fitness, 0.0);
        assert_eq!(result.failure, None);
    }

    #[test]
    fn test_prefers_snug_table() {
        let tables = vec![
            TableResource::new("big", 10, 0.0, 0.0),
            TableResource::new("snug", 4, 0.0, 0.0),
        ];
        let groups = vec![CustomerGroup::new("g1", 4)];

        let result = assign(&tables, &groups, &config());
        assert_eq!(result.assignments[0].table_id, "snug");
        assert!((result.assignments[0].capacity_utilization - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tie_goes_to_first_listed_table() {
        let tables = vec![
            TableResource::new("first", 4, 0.0, 0.0),
            TableResource::new("second", 4, 0.0, 0.0),
        ];
        let groups = vec![CustomerGroup::new("g1", 4)];

        let result = assign(&tables, &groups, &config());
        assert_eq!(result.assignments[0].table_id, "first");
    }

    #[test]
    fn test_priority_groups_served_first() {
        let tables = vec![TableResource::new("only", 4, 0.0, 0.0)];
        let groups = vec![
            CustomerGroup::new("walk-in", 4),
            CustomerGroup::new("vip", 2).with_priority(8),
        ];

        let result = assign(&tables, &groups, &config());
        assert_eq!(result.assignments[0].group_id, "vip");
        assert_eq!(result.unassigned_groups, vec!["walk-in"]);
        assert_eq!(result.customers_served, 2);
    }

    #[test]
    fn test_larger_group_first_at_equal_priority() {
        let tables = vec![TableResource::new("only", 6, 0.0, 0.0)];
        let groups = vec![CustomerGroup::new("pair", 2), CustomerGroup::new("party", 6)];

        let result = assign(&tables, &groups, &config());
        assert_eq!(result.assignments[0].group_id, "party");
        assert_eq!(result.unassigned_groups, vec!["pair"]);
    }

    #[test]
    fn test_each_table_used_once() {
        let tables = vec![
            TableResource::new("t1", 4, 0.0, 0.0),
            TableResource::new("t2", 4, 0.0, 0.0),
        ];
        let groups = vec![
            CustomerGroup::new("g1", 4),
            CustomerGroup::new("g2", 4),
            CustomerGroup::new("g3", 4),
        ];

        let result = assign(&tables, &groups, &config());
        assert_eq!(result.tables_used, 2);
        assert_ne!(result.assignments[0].table_id, result.assignments[1].table_id);
        assert_eq!(result.unassigned_groups, vec!["g3"]);
        assert_eq!(result.customers_served, 8);
        assert_eq!(
            result.message,
            "Assigned 2 tables to 3 customer groups (66.7% success rate)"
        );
    }

    #[test]
    fn test_distance_preference_and_limit() {
        let tables = vec![
            TableResource::new("far", 4, 90.0, 0.0),
            TableResource::new("near", 4, 10.0, 0.0),
        ];
        let groups = vec![
            CustomerGroup::new("g1", 4).with_preferred(0.0, 0.0),
            CustomerGroup::new("g2", 4)
                .with_preferred(0.0, 0.0)
                .with_max_distance(20.0),
        ];

        let result = assign(&tables, &groups, &config());
        // g1 is served first (input order) and takes the nearer table,
        // leaving g2 with only a table beyond its limit.
        let g1 = result.assignment_for("g1").unwrap();
        assert_eq!(g1.table_id, "near");
        assert!((g1.distance - 10.0).abs() < 1e-12);
        assert_eq!(result.unassigned_groups, vec!["g2"]);
    }

    #[test]
    fn test_unavailable_tables_ignored() {
        let tables = vec![
            TableResource::new("busy", 4, 0.0, 0.0).with_occupied(true),
            TableResource::new("closed", 4, 0.0, 0.0).with_available(false),
        ];
        let groups = vec![CustomerGroup::new("g1", 2)];

        let result = assign(&tables, &groups, &config());
        assert_eq!(result.failure, Some(FailureKind::Infeasible));
        assert_eq!(result.unassigned_groups, vec!["g1"]);
    }

    #[test]
    fn test_duplicate_ids_seat_once() {
        let tables = vec![
            TableResource::new("t1", 4, 0.0, 0.0),
            TableResource::new("t1", 8, 0.0, 0.0),
        ];
        let groups = vec![CustomerGroup::new("g1", 6), CustomerGroup::new("g2", 4)];

        let result = assign(&tables, &groups, &config());
        let g1 = result.assignment_for("g1").unwrap();
        assert_eq!(g1.table_id, "t1");
        assert!((g1.capacity_utilization - 0.75).abs() < 1e-12);
        assert_eq!(result.tables_used, 1);
        assert_eq!(result.unassigned_groups, vec!["g2"]);
    }
}
