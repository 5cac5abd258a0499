//! Gauss and Gauss-Jordan elimination on an augmented matrix.

mod augmented;
mod config;

#[cfg(test)]
mod tests;

use std::fmt;

pub use augmented::AugmentedMatrix;
pub use config::{EliminationConfig, Pivoting};

use super::{Error, System, check_solution};

/// One elementary row operation, with 0-based row indices.
///
/// [`Display`](fmt::Display) renders rows 1-based, as they are written by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowOperation {
    /// Exchange two rows to bring a better pivot onto the diagonal.
    Swap { first: usize, second: usize },

    /// Divide a row by its pivot.
    Scale { row: usize, pivot: f64 },

    /// Subtract `factor` times the `source` row from the `target` row.
    Eliminate {
        target: usize,
        source: usize,
        factor: f64,
    },

    /// Solve for one unknown during back substitution.
    BackSubstitute { row: usize, value: f64 },
}

impl fmt::Display for RowOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Swap { first, second } => write!(f, "Swap R{} <-> R{}", first + 1, second + 1),
            Self::Scale { row, pivot } => {
                write!(f, "R{r} = R{r} / {pivot:.6}", r = row + 1)
            }
            Self::Eliminate {
                target,
                source,
                factor,
            } => write!(
                f,
                "R{t} = R{t} - ({factor:.6}) * R{s}",
                t = target + 1,
                s = source + 1
            ),
            Self::BackSubstitute { row, value } => write!(f, "x{} = {value:.6}", row + 1),
        }
    }
}

/// The result of an elimination solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elimination {
    /// Solution vector, one entry per unknown.
    pub solution: Vec<f64>,
    /// Row operations in the order they were applied.
    pub operations: Vec<RowOperation>,
    /// The augmented matrix after elimination.
    pub reduced: AugmentedMatrix,
}

/// Solves the system by Gaussian elimination and back substitution.
///
/// # Errors
///
/// Returns [`Error::SingularPivot`] if no acceptable pivot exists in some
/// column under the configured pivoting strategy, or
/// [`Error::NonFiniteResult`] if the elimination overflows.
pub fn gauss(system: &System, config: &EliminationConfig) -> Result<Elimination, Error> {
    let n = system.size();
    let thresholds = pivot_thresholds(system, config);
    let mut matrix = AugmentedMatrix::new(system);
    let mut operations = Vec::new();

    for k in 0..n {
        let pivot = select_pivot(&mut matrix, k, &thresholds, config, &mut operations)?;
        for target in (k + 1)..n {
            let factor = matrix.get(target, k) / pivot;
            matrix.eliminate(target, k, factor);
            operations.push(RowOperation::Eliminate {
                target,
                source: k,
                factor,
            });
        }
    }

    let mut solution = vec![0.0; n];
    for row in (0..n).rev() {
        let known: f64 = ((row + 1)..n)
            .map(|j| matrix.get(row, j) * solution[j])
            .sum();
        let value = (matrix.constant(row) - known) / matrix.get(row, row);
        solution[row] = value;
        operations.push(RowOperation::BackSubstitute { row, value });
    }
    check_solution(&solution)?;

    Ok(Elimination {
        solution,
        operations,
        reduced: matrix,
    })
}

/// Solves the system by Gauss-Jordan reduction.
///
/// Each pivot row is normalised and the pivot column is cleared in every
/// other row, leaving the solution in the constants column.
///
/// # Errors
///
/// Returns [`Error::SingularPivot`] if no acceptable pivot exists in some
/// column under the configured pivoting strategy, or
/// [`Error::NonFiniteResult`] if the reduction overflows.
pub fn gauss_jordan(system: &System, config: &EliminationConfig) -> Result<Elimination, Error> {
    let n = system.size();
    let thresholds = pivot_thresholds(system, config);
    let mut matrix = AugmentedMatrix::new(system);
    let mut operations = Vec::new();

    for k in 0..n {
        let pivot = select_pivot(&mut matrix, k, &thresholds, config, &mut operations)?;
        matrix.scale(k, pivot);
        operations.push(RowOperation::Scale { row: k, pivot });

        for target in (0..n).filter(|&row| row != k) {
            let factor = matrix.get(target, k);
            matrix.eliminate(target, k, factor);
            operations.push(RowOperation::Eliminate {
                target,
                source: k,
                factor,
            });
        }
    }

    let solution: Vec<f64> = (0..n).map(|row| matrix.constant(row)).collect();
    check_solution(&solution)?;

    Ok(Elimination {
        solution,
        operations,
        reduced: matrix,
    })
}

/// Scales the pivot tolerance by the largest magnitude in each column of `A`.
fn pivot_thresholds(system: &System, config: &EliminationConfig) -> Vec<f64> {
    let matrix = system.matrix();
    (0..system.size())
        .map(|column| config.pivot_tol() * matrix.column_max_abs(column))
        .collect()
}

/// Moves the chosen pivot for `column` onto the diagonal and returns it.
fn select_pivot(
    matrix: &mut AugmentedMatrix,
    column: usize,
    thresholds: &[f64],
    config: &EliminationConfig,
    operations: &mut Vec<RowOperation>,
) -> Result<f64, Error> {
    let row = match config.pivoting() {
        Pivoting::Naive => column,
        Pivoting::Partial => matrix.largest_in_column(column),
    };

    if row != column {
        matrix.swap(row, column);
        operations.push(RowOperation::Swap {
            first: column,
            second: row,
        });
    }

    let pivot = matrix.get(column, column);
    if pivot.abs() <= thresholds[column] {
        return Err(Error::SingularPivot { column, pivot });
    }
    Ok(pivot)
}
