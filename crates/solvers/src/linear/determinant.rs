use super::Matrix;

/// Computes the determinant by LU factorisation with partial pivoting.
///
/// Runs in `O(n³)`. An exactly zero pivot column yields `0.0`.
#[must_use]
pub fn determinant(matrix: &Matrix) -> f64 {
    let n = matrix.size();
    let mut lu: Vec<Vec<f64>> = matrix.rows().map(<[f64]>::to_vec).collect();
    let mut det = 1.0;

    for k in 0..n {
        let pivot_row = (k..n)
            .max_by(|&a, &b| lu[a][k].abs().total_cmp(&lu[b][k].abs()))
            .unwrap_or(k);

        if lu[pivot_row][k] == 0.0 {
            return 0.0;
        }
        if pivot_row != k {
            lu.swap(pivot_row, k);
            det = -det;
        }

        let pivot = lu[k][k];
        det *= pivot;

        for i in (k + 1)..n {
            let factor = lu[i][k] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in k..n {
                lu[i][j] -= factor * lu[k][j];
            }
        }
    }

    det
}
