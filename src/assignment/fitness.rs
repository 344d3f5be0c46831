//! Table/group fitness scoring.

use super::config::AssignmentConfig;
use super::types::{CustomerGroup, Point, TableResource};

/// Euclidean distance between two points.
pub fn distance(a: &Point, b: &Point) -> f64 {
    a.distance_to(b)
}

/// Scores how well `table` suits `group`, in `[0, 1]`.
///
/// 0 is a hard reject: the table is too small, or the group set a positive
/// `max_distance` and the table lies beyond it. Otherwise the score starts at
/// 1.0, is multiplied by the utilization tier factor and the distance
/// penalty, gains both priority bonuses and is clamped to `[0, 1]`.
///
/// # Examples
///
/// ```
/// use u_optimize::assignment::{fitness_score, AssignmentConfig, CustomerGroup, TableResource};
///
/// let config = AssignmentConfig::default();
/// let table = TableResource::new("t1", 2, 0.0, 0.0);
///
/// assert_eq!(fitness_score(&table, &CustomerGroup::new("g1", 4), &config), 0.0);
/// assert!((fitness_score(&table, &CustomerGroup::new("g2", 2), &config) - 1.0).abs() < 1e-12);
/// ```
pub fn fitness_score(
    table: &TableResource,
    group: &CustomerGroup,
    config: &AssignmentConfig,
) -> f64 {
    if table.capacity <= 0 || table.capacity < group.size {
        return 0.0;
    }

    let mut score = 1.0;

    let utilization = group.size as f64 / table.capacity as f64;
    if utilization < config.loose_fit_ratio {
        score *= config.loose_fit_factor;
    } else if utilization < config.partial_fit_ratio {
        score *= config.partial_fit_factor;
    }

    if let Some(preferred) = &group.preferred {
        let d = distance(&table.location, preferred);
        if group.max_distance > 0.0 && d > group.max_distance {
            return 0.0;
        }
        let normalized = d.min(config.distance_ceiling) / config.distance_ceiling;
        score *= 1.0 - normalized * config.max_distance_penalty;
    }

    score += priority_bonus(table.priority, config.max_priority, config.table_priority_bonus);
    score += priority_bonus(group.priority, config.max_priority, config.group_priority_bonus);

    score.clamp(0.0, 1.0)
}

/// `bonus × priority / max_priority`, with the ratio capped at 1.
///
/// Negative priorities are not floored and lower the score.
fn priority_bonus(priority: i32, max_priority: f64, bonus: f64) -> f64 {
    (priority as f64 / max_priority).min(1.0) * bonus
}
