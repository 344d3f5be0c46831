//! Maximum-weight matching over the fitness matrix.

use super::config::AssignmentConfig;
use super::hungarian;
use super::matching::{
    fitness_matrix, id_slots, make_assignment, prepare, service_order, summarize,
};
use super::types::{AssignmentResult, CustomerGroup, TableResource};
use log::debug;

/// Seats groups to maximize first the number seated, then total fitness.
///
/// Every feasible pair is weighted `bonus + fitness` with `bonus` larger
/// than the most fitness any matching can collect, so seating one more
/// group always outweighs any fitness gain. Pairs scoring 0 keep weight 0
/// and are never reported as assignments. Entries sharing a table id form
/// one column, where each group is offered its best-scoring entry (first
/// listed on ties), so no id is seated twice. Results are listed in the
/// same service order as the greedy mode.
pub(crate) fn assign(
    tables: &[TableResource],
    groups: &[CustomerGroup],
    config: &AssignmentConfig,
) -> AssignmentResult {
    let eligible = match prepare(tables, groups) {
        Ok(eligible) => eligible,
        Err(result) => return result,
    };

    let order = service_order(groups);
    let scores = fitness_matrix(&eligible, groups, &order, config);
    let slots = id_slots(&eligible);

    // (entry, score) of the best entry per slot, for every row.
    let best: Vec<Vec<(usize, f64)>> = scores
        .iter()
        .map(|row| {
            slots
                .iter()
                .map(|entries| {
                    entries.iter().fold((entries[0], row[entries[0]]), |acc, &ti| {
                        if row[ti] > acc.1 {
                            (ti, row[ti])
                        } else {
                            acc
                        }
                    })
                })
                .collect()
        })
        .collect();

    let bonus = groups.len().min(slots.len()) as f64 + 1.0;
    let weights: Vec<Vec<f64>> = best
        .iter()
        .map(|row| {
            row.iter()
                .map(|&(_, s)| if s > 0.0 { bonus + s } else { 0.0 })
                .collect()
        })
        .collect();

    let matched = hungarian::maximize(&weights, slots.len());

    let mut seated = Vec::new();
    let mut unassigned = Vec::new();

    for (row, &gi) in order.iter().enumerate() {
        let group = &groups[gi];
        match matched[row] {
            Some(slot) if best[row][slot].1 > 0.0 => {
                let (ti, score) = best[row][slot];
                seated.push((make_assignment(eligible[ti], group, score), group.size));
            }
            _ => unassigned.push(group.id.clone()),
        }
    }

    let result = summarize(seated, unassigned, groups.len());
    debug!(
        "optimal assignment: {} of {} groups seated over {} tables, total fitness {:.3}",
        result.tables_used,
        groups.len(),
        eligible.len(),
        result.total_fitness
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::greedy;

    fn config() -> AssignmentConfig {
        AssignmentConfig::default()
    }

    #[test]
    fn test_seats_more_groups_than_greedy() {
        // Greedy serves the VIP pair first and gives it the 4-top (1.0
        // against 0.95 for the distant 2-top), stranding the foursome.
        let tables = vec![
            TableResource::new("four", 4, 0.0, 0.0),
            TableResource::new("two", 2, 50.0, 0.0),
        ];
        let groups = vec![
            CustomerGroup::new("pair", 2)
                .with_priority(10)
                .with_preferred(0.0, 0.0),
            CustomerGroup::new("foursome", 4),
        ];

        let greedy = greedy::assign(&tables, &groups, &config());
        assert_eq!(greedy.tables_used, 1);
        assert_eq!(greedy.unassigned_groups, vec!["foursome"]);

        let optimal = assign(&tables, &groups, &config());
        assert_eq!(optimal.tables_used, 2);
        assert!(optimal.unassigned_groups.is_empty());
        assert_eq!(optimal.assignment_for("pair").unwrap().table_id, "two");
        assert_eq!(optimal.assignment_for("foursome").unwrap().table_id, "four");
    }

    #[test]
    fn test_higher_total_fitness_than_greedy() {
        let tables = vec![
            TableResource::new("a", 4, 0.0, 0.0),
            TableResource::new("b", 4, 100.0, 0.0),
        ];
        let groups = vec![
            CustomerGroup::new("g1", 4).with_priority(2),
            CustomerGroup::new("g2", 4).with_preferred(0.0, 0.0),
        ];

        let greedy = greedy::assign(&tables, &groups, &config());
        let optimal = assign(&tables, &groups, &config());

        assert_eq!(greedy.tables_used, 2);
        assert_eq!(optimal.tables_used, 2);
        assert!(optimal.total_fitness > greedy.total_fitness + 0.1);
        assert_eq!(optimal.assignment_for("g2").unwrap().table_id, "a");
    }

    #[test]
    fn test_infeasible_pairs_never_assigned() {
        let tables = vec![TableResource::new("t1", 2, 0.0, 0.0)];
        let groups = vec![CustomerGroup::new("g1", 4)];

        let result = assign(&tables, &groups, &config());
        assert!(result.assignments.is_empty());
        assert_eq!(result.unassigned_groups, vec!["g1"]);
    }

    #[test]
    fn test_output_in_service_order() {
        let tables = vec![
            TableResource::new("t1", 2, 0.0, 0.0),
            TableResource::new("t2", 4, 0.0, 0.0),
        ];
        let groups = vec![
            CustomerGroup::new("regular", 2),
            CustomerGroup::new("vip", 4).with_priority(9),
        ];

        let result = assign(&tables, &groups, &config().with_parallel(false));
        let ids: Vec<&str> = result.assignments.iter().map(|a| a.group_id.as_str()).collect();
        assert_eq!(ids, vec!["vip", "regular"]);
    }

    #[test]
    fn test_duplicate_ids_seat_once() {
        // Both groups fit t1; g1 only fits the 8-seat entry and scores 1.0
        // there, beating 0.9 for g2 at the 4-seat entry.
        let tables = vec![
            TableResource::new("t1", 4, 0.0, 0.0),
            TableResource::new("t1", 8, 0.0, 0.0),
        ];
        let groups = vec![CustomerGroup::new("g1", 6), CustomerGroup::new("g2", 2)];

        let result = assign(&tables, &groups, &config());
        let g1 = result.assignment_for("g1").unwrap();
        assert_eq!(g1.table_id, "t1");
        assert!((g1.capacity_utilization - 0.75).abs() < 1e-12);
        assert_eq!(result.unassigned_groups, vec!["g2"]);
        assert_eq!(result.tables_used, 1);
    }
}
