//! Root finding for functions of one variable.
//!
//! # Solvers
//!
//! - [`bisection`]: halves a sign-change bracket
//! - [`false_position`]: shrinks a sign-change bracket along the chord
//! - [`newton`]: Newton-Raphson tangent steps using the derivative
//! - [`secant`]: secant steps through the last two estimates
//! - [`one_point`]: fixed-point iteration `x = g(x)`
//! - [`graphical`]: samples a range to locate roots and brackets
//!
//! # Termination
//!
//! The iterative solvers share one contract. The relative percent error at
//! each step is `|x_new − x_old| / |x_new| · 100`, the first iteration always
//! runs, and the loop ends once the error is at or below
//! [`Config::tolerance`]. Every solver is also capped by
//! [`Config::max_iters`]; reaching the cap returns [`Status::MaxIters`] with
//! the last estimate rather than an error.
//!
//! # Observers
//!
//! Each solver emits every [`Iteration`] record to an observer, which can
//! return [`Action::StopEarly`] to cancel the loop. The `*_unobserved`
//! variants use the no-op `()` observer.

mod bracket;
mod config;
mod error;
mod iteration;
mod solution;

pub mod bisection;
pub mod false_position;
pub mod graphical;
pub mod newton;
pub mod one_point;
pub mod secant;

pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use iteration::{Estimate, Iteration, relative_error};
pub use solution::Solution;

pub use crate::Status;

use numer_core::Observer;

/// Control actions supported by the root finders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the latest estimate.
    StopEarly,
}

/// Appends an iteration record and decides whether the loop is finished.
///
/// The observer sees the record before the convergence check, so a
/// `StopEarly` on the converging iteration still reports
/// [`Status::StoppedByObserver`].
fn push<Obs>(
    iterations: &mut Vec<Iteration>,
    iteration: Iteration,
    converged: bool,
    observer: &mut Obs,
) -> Option<Status>
where
    Obs: Observer<Iteration, Action>,
{
    let action = observer.observe(&iteration);
    iterations.push(iteration);

    match action {
        Some(Action::StopEarly) => Some(Status::StoppedByObserver),
        None if converged => Some(Status::Converged),
        None => None,
    }
}

/// Rejects a non-finite starting estimate.
fn check_guess(value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteGuess { value })
    }
}
