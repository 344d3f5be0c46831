//! Steps shared by the greedy and optimal matchers.

use super::config::AssignmentConfig;
use super::fitness::fitness_score;
use super::types::{Assignment, AssignmentResult, CustomerGroup, TableResource};
use crate::error::FailureKind;
use crate::ranking::{Ranking, RankingRule};
use log::debug;
use rayon::prelude::*;
use std::collections::HashMap;

/// Higher customer priority first.
struct HighPriorityFirst;

impl RankingRule<CustomerGroup> for HighPriorityFirst {
    fn name(&self) -> &str {
        "HighPriorityFirst"
    }

    fn score(&self, group: &CustomerGroup) -> f64 {
        -(group.priority as f64)
    }
}

/// Larger groups first.
struct LargestGroupFirst;

impl RankingRule<CustomerGroup> for LargestGroupFirst {
    fn name(&self) -> &str {
        "LargestGroupFirst"
    }

    fn score(&self, group: &CustomerGroup) -> f64 {
        -(group.size as f64)
    }
}

/// Indices of `groups` in service order: priority descending, then size
/// descending, then input order.
pub(crate) fn service_order(groups: &[CustomerGroup]) -> Vec<usize> {
    Ranking::new()
        .with_rule(HighPriorityFirst)
        .with_rule(LargestGroupFirst)
        .sort_indices(groups)
}

/// Validates the batch and returns the eligible tables.
///
/// Tables that are unavailable or occupied are dropped. Entries sharing an
/// id are all kept; the matchers hand each id out at most once. Returns the
/// finished result instead when nothing can be assigned.
pub(crate) fn prepare<'a>(
    tables: &'a [TableResource],
    groups: &[CustomerGroup],
) -> Result<Vec<&'a TableResource>, AssignmentResult> {
    if tables.is_empty() {
        return Err(AssignmentResult::none_assigned(
            groups,
            FailureKind::InvalidInput,
            "No tables available",
        ));
    }
    if groups.is_empty() {
        return Err(AssignmentResult::none_assigned(
            groups,
            FailureKind::InvalidInput,
            "No customer groups to assign",
        ));
    }

    let eligible: Vec<&TableResource> = tables.iter().filter(|t| t.is_eligible()).collect();

    if eligible.is_empty() {
        debug!("all {} tables are unavailable or occupied", tables.len());
        return Err(AssignmentResult::none_assigned(
            groups,
            FailureKind::Infeasible,
            "No available tables",
        ));
    }

    Ok(eligible)
}

/// Groups eligible table indices by id, in order of first appearance.
pub(crate) fn id_slots(tables: &[&TableResource]) -> Vec<Vec<usize>> {
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut slots: Vec<Vec<usize>> = Vec::new();
    for (ti, table) in tables.iter().enumerate() {
        let slot = *position.entry(table.id.as_str()).or_insert_with(|| {
            slots.push(Vec::new());
            slots.len() - 1
        });
        slots[slot].push(ti);
    }
    slots
}

/// Builds the assignment record for a seated group.
pub(crate) fn make_assignment(
    table: &TableResource,
    group: &CustomerGroup,
    score: f64,
) -> Assignment {
    let distance = group
        .preferred
        .as_ref()
        .map_or(0.0, |p| table.location.distance_to(p));

    Assignment {
        table_id: table.id.clone(),
        table_code: table.code.clone(),
        group_id: group.id.clone(),
        distance,
        fitness_score: score,
        capacity_utilization: group.size as f64 / table.capacity as f64,
    }
}

/// Aggregates seated groups into a result.
///
/// `seated` pairs each assignment with the size of its group.
pub(crate) fn summarize(
    seated: Vec<(Assignment, i32)>,
    unassigned_groups: Vec<String>,
    group_count: usize,
) -> AssignmentResult {
    let customers_served: i64 = seated.iter().map(|(_, size)| *size as i64).sum();
    let assignments: Vec<Assignment> = seated.into_iter().map(|(a, _)| a).collect();

    let total_fitness: f64 = assignments.iter().map(|a| a.fitness_score).sum();
    let average_fitness = if assignments.is_empty() {
        0.0
    } else {
        total_fitness / assignments.len() as f64
    };

    let success_rate = if group_count > 0 {
        assignments.len() as f64 / group_count as f64 * 100.0
    } else {
        0.0
    };

    AssignmentResult {
        message: format!(
            "Assigned {} tables to {} customer groups ({:.1}% success rate)",
            assignments.len(),
            group_count,
            success_rate
        ),
        tables_used: assignments.len(),
        assignments,
        unassigned_groups,
        total_fitness,
        average_fitness,
        customers_served,
        failure: None,
    }
}

/// Scores every (group, table) pair; rows follow `order`.
pub(crate) fn fitness_matrix(
    tables: &[&TableResource],
    groups: &[CustomerGroup],
    order: &[usize],
    config: &AssignmentConfig,
) -> Vec<Vec<f64>> {
    let row = |&gi: &usize| -> Vec<f64> {
        tables
            .iter()
            .map(|t| fitness_score(t, &groups[gi], config))
            .collect()
    };

    if config.parallel {
        order.par_iter().map(row).collect()
    } else {
        order.iter().map(row).collect()
    }
}
