//! Newton-Raphson iteration.
//!
//! Each step follows the tangent at the current estimate:
//!
//! ```text
//! x_new = x − f(x) / f'(x)
//! ```
//!
//! The derivative is supplied by the caller, typically from an expression
//! engine's symbolic differentiation.

use numer_core::{Function, Observer};

use crate::evaluate::evaluate;

use super::{
    Action, Config, Error, Estimate, Iteration, Solution, Status, check_guess, push,
    relative_error,
};

/// Finds a root of `f` starting from `guess`, using its derivative `df`.
///
/// # Errors
///
/// Returns an error if the guess is non-finite, if evaluating `f` or `df`
/// fails, if the derivative is zero at an estimate, or if a step produces a
/// non-finite estimate.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    guess: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
    Obs: Observer<Iteration, Action>,
{
    let mut x = check_guess(guess)?;
    let mut iterations = Vec::new();

    for iter in 1..=config.max_iters() {
        let fx = evaluate(f, x)?;
        let slope = evaluate(df, x)?;
        if slope == 0.0 {
            return Err(Error::ZeroDerivative { x });
        }

        let next = x - fx / slope;
        if !next.is_finite() {
            return Err(Error::NonFiniteStep { x, next });
        }

        let error = relative_error(x, next);
        let iteration = Iteration {
            iter,
            estimate: Estimate::Tangent { x, fx, slope, next },
            error,
        };
        x = next;

        if let Some(status) = push(
            &mut iterations,
            iteration,
            error <= config.tolerance(),
            &mut observer,
        ) {
            return Ok(Solution {
                status,
                root: x,
                iterations,
            });
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        root: x,
        iterations,
    })
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, D>(f: &F, df: &D, guess: f64, config: &Config) -> Result<Solution, Error>
where
    F: Function,
    D: Function,
{
    solve(f, df, guess, config, ())
}
