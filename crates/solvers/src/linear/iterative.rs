//! Jacobi and Gauss-Seidel iteration.
//!
//! Both update each unknown from its own equation,
//!
//! ```text
//! x_i = (b_i − Σ_{j≠i} a_ij · x_j) / a_ii
//! ```
//!
//! and differ only in which values of `x_j` they read. Jacobi uses the
//! previous sweep for every `j`; Gauss-Seidel uses components already
//! updated in the current sweep.

use std::fmt;

use numer_core::Observer;

use crate::Status;

use super::{Action, ConfigError, Error, System};

/// Configuration for the iterative linear solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterativeConfig {
    tolerance: f64,
    max_iters: usize,
}

impl Default for IterativeConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iters: 100,
        }
    }
}

impl IterativeConfig {
    /// Creates a config with an absolute per-component tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not finite and positive,
    /// or if `max_iters` is zero.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(Self {
            tolerance,
            max_iters,
        })
    }

    /// Returns the largest change per component that counts as converged.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

/// The iterate produced by one sweep over all equations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sweep {
    /// Sweep counter (1-based).
    pub iter: usize,
    /// The iterate after this sweep.
    pub x: Vec<f64>,
    /// Largest `|x_i_new − x_i_old|` over all components.
    pub max_delta: f64,
}

impl fmt::Display for Sweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iteration {}: ", self.iter)?;
        for (i, value) in self.x.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "x{} = {value:.6}", i + 1)?;
        }
        Ok(())
    }
}

/// The result of an iterative linear solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterativeSolution {
    pub status: Status,
    /// The latest finite iterate.
    pub x: Vec<f64>,
    /// One record per sweep, in order.
    pub sweeps: Vec<Sweep>,
}

impl IterativeSolution {
    #[must_use]
    pub fn iters(&self) -> usize {
        self.sweeps.len()
    }
}

#[derive(Clone, Copy)]
enum Update {
    Jacobi,
    GaussSeidel,
}

/// Solves the system by Jacobi iteration from `initial`.
///
/// # Errors
///
/// Returns an error if `initial` has the wrong length, contains a
/// non-finite value, or if any diagonal entry is zero.
pub fn jacobi<Obs>(
    system: &System,
    initial: &[f64],
    config: &IterativeConfig,
    observer: Obs,
) -> Result<IterativeSolution, Error>
where
    Obs: Observer<Sweep, Action>,
{
    iterate(system, initial, config, observer, Update::Jacobi)
}

/// Runs Jacobi iteration without observation.
///
/// # Errors
///
/// See [`jacobi`].
pub fn jacobi_unobserved(
    system: &System,
    initial: &[f64],
    config: &IterativeConfig,
) -> Result<IterativeSolution, Error> {
    jacobi(system, initial, config, ())
}

/// Solves the system by Gauss-Seidel iteration from `initial`.
///
/// # Errors
///
/// Returns an error if `initial` has the wrong length, contains a
/// non-finite value, or if any diagonal entry is zero.
pub fn gauss_seidel<Obs>(
    system: &System,
    initial: &[f64],
    config: &IterativeConfig,
    observer: Obs,
) -> Result<IterativeSolution, Error>
where
    Obs: Observer<Sweep, Action>,
{
    iterate(system, initial, config, observer, Update::GaussSeidel)
}

/// Runs Gauss-Seidel iteration without observation.
///
/// # Errors
///
/// See [`gauss_seidel`].
pub fn gauss_seidel_unobserved(
    system: &System,
    initial: &[f64],
    config: &IterativeConfig,
) -> Result<IterativeSolution, Error> {
    gauss_seidel(system, initial, config, ())
}

fn iterate<Obs>(
    system: &System,
    initial: &[f64],
    config: &IterativeConfig,
    mut observer: Obs,
    update: Update,
) -> Result<IterativeSolution, Error>
where
    Obs: Observer<Sweep, Action>,
{
    system.check_len("initial guess", initial)?;
    if let Some((index, &value)) = initial.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(Error::NonFiniteGuess { index, value });
    }

    let matrix = system.matrix();
    let constants = system.constants();
    let n = system.size();
    if let Some(row) = (0..n).find(|&i| matrix.get(i, i) == 0.0) {
        return Err(Error::ZeroDiagonal { row });
    }

    let mut x = initial.to_vec();
    let mut sweeps = Vec::new();

    for iter in 1..=config.max_iters() {
        let old = x.clone();
        for i in 0..n {
            let source = match update {
                Update::Jacobi => &old,
                Update::GaussSeidel => &x,
            };
            let off_diagonal: f64 = matrix
                .row(i)
                .iter()
                .zip(source)
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, (a, x))| a * x)
                .sum();
            x[i] = (constants[i] - off_diagonal) / matrix.get(i, i);
        }

        if x.iter().any(|value| !value.is_finite()) {
            return Ok(IterativeSolution {
                status: Status::Diverged,
                x: old,
                sweeps,
            });
        }

        let max_delta = x
            .iter()
            .zip(&old)
            .map(|(new, old)| (new - old).abs())
            .fold(0.0, f64::max);

        let sweep = Sweep {
            iter,
            x: x.clone(),
            max_delta,
        };
        let action = observer.observe(&sweep);
        sweeps.push(sweep);

        let status = match action {
            Some(Action::StopEarly) => Some(Status::StoppedByObserver),
            None if max_delta < config.tolerance() => Some(Status::Converged),
            None => None,
        };
        if let Some(status) = status {
            return Ok(IterativeSolution { status, x, sweeps });
        }
    }

    Ok(IterativeSolution {
        status: Status::MaxIters,
        x,
        sweeps,
    })
}
