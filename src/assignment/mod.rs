//! Table assignment for customer groups.
//!
//! Matches physical resources (tables) to competing demands (customer
//! groups) using a fitness score in `[0, 1]` that combines capacity fit,
//! distance from a preferred location and both sides' priorities.
//!
//! Two modes are provided:
//!
//! - **Greedy**: groups are served in priority order (then largest first);
//!   each takes the best-scoring free table. Ties go to the table listed
//!   first. O(n × m).
//! - **Optimal**: a maximum-weight bipartite matching (Hungarian algorithm)
//!   that first maximizes the number of groups seated, then the total
//!   fitness. O(k³) with k = max(n, m).
//!
//! A group is never seated at a table smaller than itself, nor farther than
//! its `max_distance`; such groups are reported as unassigned rather than
//! failing the batch.

mod config;
mod engine;
mod fitness;
mod greedy;
mod hungarian;
mod matching;
mod optimal;
mod types;

pub use config::AssignmentConfig;
pub use engine::AssignmentEngine;
pub use fitness::{distance, fitness_score};
pub use types::{
    Assignment, AssignmentMode, AssignmentResult, CustomerGroup, Point, TableResource,
};
