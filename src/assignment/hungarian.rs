//! Hungarian algorithm (Kuhn–Munkres) for maximum-weight assignment.
//!
//! Shortest augmenting path formulation with row/column potentials,
//! O(k³) for a k×k problem. Rectangular inputs are padded with zero-weight
//! dummy cells.
//!
//! # References
//!
//! - Kuhn, H. W. (1955). "The Hungarian method for the assignment problem",
//!   *Naval Research Logistics Quarterly* 2, 83-97.
//! - Munkres, J. (1957). "Algorithms for the Assignment and Transportation
//!   Problems", *J. SIAM* 5(1), 32-38.

/// Finds a row→column assignment maximizing the total weight.
///
/// `weights` is row-major with `cols` columns per row. Every row is matched
/// to at most one column and vice versa; entry `i` of the result is the
/// column given to row `i`, or `None` if the row was matched to a padding
/// column. Callers treat zero-weight matches as "not matched".
pub(crate) fn maximize(weights: &[Vec<f64>], cols: usize) -> Vec<Option<usize>> {
    let rows = weights.len();
    let n = rows.max(cols);
    if rows == 0 || cols == 0 {
        return vec![None; rows];
    }

    // Minimize the negated weights; padding cells cost 0.
    let cost = |i: usize, j: usize| -> f64 {
        if i < rows && j < cols {
            -weights[i][j]
        } else {
            0.0
        }
    };

    // 1-based: index 0 is the virtual source column.
    let mut u = vec![0.0f64; n + 1];
    let mut v = vec![0.0f64; n + 1];
    let mut owner = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];

    for i in 1..=n {
        owner[0] = i;
        let mut j0 = 0usize;
        let mut min_slack = vec![f64::INFINITY; n + 1];
        let mut visited = vec![false; n + 1];

        loop {
            visited[j0] = true;
            let i0 = owner[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = 0usize;

            for j in 1..=n {
                if visited[j] {
                    continue;
                }
                let slack = cost(i0 - 1, j - 1) - u[i0] - v[j];
                if slack < min_slack[j] {
                    min_slack[j] = slack;
                    way[j] = j0;
                }
                if min_slack[j] < delta {
                    delta = min_slack[j];
                    j1 = j;
                }
            }

            for j in 0..=n {
                if visited[j] {
                    u[owner[j]] += delta;
                    v[j] -= delta;
                } else {
                    min_slack[j] -= delta;
                }
            }

            j0 = j1;
            if owner[j0] == 0 {
                break;
            }
        }

        // Flip the augmenting path.
        loop {
            let j1 = way[j0];
            owner[j0] = owner[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![None; rows];
    for j in 1..=cols {
        let i = owner[j];
        if (1..=rows).contains(&i) {
            assignment[i - 1] = Some(j - 1);
        }
    }
    assignment
}
