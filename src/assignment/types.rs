//! Tables, customer groups and assignment results.

use crate::error::{FailureKind, OptimizeError};
use std::fmt;
use std::str::FromStr;

/// A position on the floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate, in floor-plan units.
    pub x: f64,
    /// Vertical coordinate, in floor-plan units.
    pub y: f64,
}

impl Point {
    /// Creates a point at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A table that can be assigned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableResource {
    /// Table identifier. Assigned at most once per call, even when several
    /// entries share it.
    pub id: String,

    /// Display code, e.g. `"MESA-01"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub code: String,

    /// Seats at the table.
    pub capacity: i32,

    /// Floor-plan location.
    pub location: Point,

    /// Whether the table is open for assignment.
    pub is_available: bool,

    /// Whether the table is currently occupied.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_occupied: bool,

    /// Desirability of the table (window seat, ...), nominally 0–10.
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority: i32,
}

impl TableResource {
    /// An available, unoccupied table with priority 0; the code defaults to the id.
    pub fn new(id: impl Into<String>, capacity: i32, x: f64, y: f64) -> Self {
        let id = id.into();
        Self {
            code: id.clone(),
            id,
            capacity,
            location: Point::new(x, y),
            is_available: true,
            is_occupied: false,
            priority: 0,
        }
    }

    /// Sets the display code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the table priority, which earns a fitness bonus.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Marks the table open or closed.
    pub fn with_available(mut self, available: bool) -> Self {
        self.is_available = available;
        self
    }

    /// Marks the table occupied or free.
    pub fn with_occupied(mut self, occupied: bool) -> Self {
        self.is_occupied = occupied;
        self
    }

    /// Available and not occupied.
    pub fn is_eligible(&self) -> bool {
        self.is_available && !self.is_occupied
    }
}

/// A group of customers asking for a table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerGroup {
    /// Group identifier.
    pub id: String,

    /// Number of people.
    pub size: i32,

    /// Customer priority (VIP, regular, ...), nominally 0–10.
    #[cfg_attr(feature = "serde", serde(default))]
    pub priority: i32,

    /// Where the group would like to sit, if anywhere.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferred: Option<Point>,

    /// Farthest acceptable distance from `preferred`; 0 means unconstrained.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_distance: f64,
}

impl CustomerGroup {
    /// A group of `size` people with priority 0 and no location preference.
    pub fn new(id: impl Into<String>, size: i32) -> Self {
        Self {
            id: id.into(),
            size,
            priority: 0,
            preferred: None,
            max_distance: 0.0,
        }
    }

    /// Sets the customer priority, which orders service and earns a bonus.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the preferred location.
    pub fn with_preferred(mut self, x: f64, y: f64) -> Self {
        self.preferred = Some(Point::new(x, y));
        self
    }

    /// Sets the hard distance limit; only applies with a preferred location.
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }
}

/// One table given to one group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// Id of the table given out.
    pub table_id: String,

    /// Display code of that table.
    pub table_code: String,

    /// Id of the seated group.
    pub group_id: String,

    /// Distance from the group's preferred location, 0 if none was given.
    pub distance: f64,

    /// Fitness score in `(0, 1]`.
    pub fitness_score: f64,

    /// `group size / table capacity`.
    pub capacity_utilization: f64,
}

/// Outcome of an assignment run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentResult {
    /// Assignments in the order groups were served.
    pub assignments: Vec<Assignment>,

    /// Ids of groups that could not be seated.
    pub unassigned_groups: Vec<String>,

    /// Sum of assignment fitness scores.
    pub total_fitness: f64,

    /// Mean assignment fitness, 0 when nothing was assigned.
    pub average_fitness: f64,

    /// Number of tables handed out.
    pub tables_used: usize,

    /// Total people seated.
    pub customers_served: i64,

    /// Set when the whole batch could not be processed.
    pub failure: Option<FailureKind>,

    /// Human-readable summary.
    pub message: String,
}

impl AssignmentResult {
    /// A result in which no group is seated.
    pub(crate) fn none_assigned(
        groups: &[CustomerGroup],
        failure: FailureKind,
        message: &str,
    ) -> Self {
        Self {
            assignments: Vec::new(),
            unassigned_groups: groups.iter().map(|g| g.id.clone()).collect(),
            total_fitness: 0.0,
            average_fitness: 0.0,
            tables_used: 0,
            customers_served: 0,
            failure: Some(failure),
            message: message.to_string(),
        }
    }

    /// The assignment for `group_id`, if it was seated.
    pub fn assignment_for(&self, group_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.group_id == group_id)
    }
}

/// Which matching procedure to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AssignmentMode {
    /// Priority-ordered greedy matching.
    #[default]
    Greedy,

    /// Maximum-weight bipartite matching.
    Optimal,
}

impl AssignmentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentMode::Greedy => "greedy",
            AssignmentMode::Optimal => "optimal",
        }
    }
}

impl fmt::Display for AssignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssignmentMode {
    type Err = OptimizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "greedy" => Ok(AssignmentMode::Greedy),
            "optimal" | "hungarian" => Ok(AssignmentMode::Optimal),
            _ => Err(OptimizeError::UnknownMode(s.to_string())),
        }
    }
}
