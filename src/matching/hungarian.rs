//! Kuhn–Munkres (Hungarian) minimum-cost perfect assignment on a square
//! cost matrix, O(n^3). Classic potential/shortest-augmenting-path
//! formulation; kept dependency-free since it is a closed, well-tested
//! algorithm rather than ambient infrastructure.

/// Solve the assignment problem for a square `n x n` cost matrix.
///
/// Returns, for each row, the assigned column index. Panics if `cost`
/// is not square and non-empty — callers are expected to pad to a
/// square matrix before calling this.
pub fn solve(cost: &[Vec<f64>]) -> Vec<usize> {
    let n = cost.len();
    if n == 0 {
        return Vec::new();
    }
    assert!(cost.iter().all(|row| row.len() == n), "hungarian::solve requires a square matrix");

    let inf = f64::INFINITY;
    let mut u = vec![0.0_f64; n + 1];
    let mut v = vec![0.0_f64; n + 1];
    let mut p = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];

    for i in 1..=n {
        p[0] = i;
        let mut j0 = 0usize;
        let mut minv = vec![inf; n + 1];
        let mut used = vec![false; n + 1];

        loop {
            used[j0] = true;
            let i0 = p[j0];
            let mut delta = inf;
            let mut j1 = 0usize;

            for j in 1..=n {
                if used[j] {
                    continue;
                }
                let cur = cost[i0 - 1][j - 1] - u[i0] - v[j];
                if cur < minv[j] {
                    minv[j] = cur;
                    way[j] = j0;
                }
                if minv[j] < delta {
                    delta = minv[j];
                    j1 = j;
                }
            }

            for j in 0..=n {
                if used[j] {
                    u[p[j]] += delta;
                    v[j] -= delta;
                } else {
                    minv[j] -= delta;
                }
            }

            j0 = j1;
            if p[j0] == 0 {
                break;
            }
        }

        loop {
            let j1 = way[j0];
            p[j0] = p[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut result = vec![0usize; n];
    for (j, &row) in p.iter().enumerate().skip(1) {
        if row > 0 {
            result[row - 1] = j - 1;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_obvious_diagonal() {
        let cost = vec![vec![1.0, 10.0], vec![10.0, 1.0]];
        assert_eq!(solve(&cost), vec![0, 1]);
    }

    #[test]
    fn picks_the_cheaper_cross_assignment() {
        let cost = vec![vec![10.0, 1.0], vec![1.0, 10.0]];
        assert_eq!(solve(&cost), vec![1, 0]);
    }

    #[test]
    fn single_cell_matrix() {
        assert_eq!(solve(&[vec![5.0]]), vec![0]);
    }

    #[test]
    fn empty_matrix_returns_empty() {
        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(solve(&empty).is_empty());
    }

    #[test]
    fn assignment_is_a_bijection() {
        let cost = vec![
            vec![4.0, 1.0, 3.0],
            vec![2.0, 0.0, 5.0],
            vec![3.0, 2.0, 2.0],
        ];
        let assignment = solve(&cost);
        let mut seen = assignment.clone();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2]);
    }
}
