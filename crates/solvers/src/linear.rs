//! Solvers for square linear systems `A · x = b`.
//!
//! # Direct methods
//!
//! - [`cramer`]: ratios of determinants, with [`determinant`] computed by LU
//!   factorisation
//! - [`gauss`]: forward elimination and back substitution
//! - [`gauss_jordan`]: full reduction to the identity
//!
//! Both elimination methods take an [`EliminationConfig`] that selects the
//! pivoting strategy and report every row operation they perform. A direct
//! solve whose arithmetic overflows fails with a numeric-instability error
//! instead of returning NaN or infinite components.
//!
//! # Iterative methods
//!
//! - [`jacobi`]: every component updated from the previous sweep
//! - [`gauss_seidel`]: components updated in place as soon as they are known
//!
//! These emit a [`Sweep`] per pass to an observer and report non-convergence
//! through [`Status`](crate::Status).

mod cramer;
mod determinant;
mod elimination;
mod error;
mod iterative;
mod matrix;
mod system;

pub use cramer::{CramerSolution, SINGULAR_DETERMINANT, cramer};
pub use determinant::determinant;
pub use elimination::{
    AugmentedMatrix, Elimination, EliminationConfig, Pivoting, RowOperation, gauss,
    gauss_jordan,
};
pub use error::{ConfigError, Error};
pub use iterative::{
    IterativeConfig, IterativeSolution, Sweep, gauss_seidel, gauss_seidel_unobserved, jacobi,
    jacobi_unobserved,
};
pub use matrix::Matrix;
pub use system::System;

/// Control actions supported by the iterative linear solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current sweep and return its iterate.
    StopEarly,
}

/// Rejects a direct solution with a non-finite component.
fn check_solution(solution: &[f64]) -> Result<(), Error> {
    match solution.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(Error::NonFiniteResult {
            index,
            value: solution[index],
        }),
        None => Ok(()),
    }
}
