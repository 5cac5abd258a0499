//! Secant iteration.
//!
//! Replaces the derivative in Newton's step with the slope through the last
//! two estimates:
//!
//! ```text
//! x_new = x1 − f(x1) · (x1 − x0) / (f(x1) − f(x0))
//! ```
//!
//! after which the pair shifts to `(x1, x_new)`.

use numer_core::{Function, Observer};

use crate::evaluate::evaluate;

use super::{
    Action, Config, Error, Estimate, Iteration, Solution, Status, check_guess, push,
    relative_error,
};

/// Finds a root of `f` starting from the two estimates in `guesses`.
///
/// # Errors
///
/// Returns an error if either guess is non-finite, if evaluating `f` fails,
/// if `f` takes the same value at both estimates, or if a step produces a
/// non-finite estimate.
pub fn solve<F, Obs>(
    f: &F,
    guesses: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Iteration, Action>,
{
    let mut x0 = check_guess(guesses[0])?;
    let mut x1 = check_guess(guesses[1])?;
    let mut f0 = evaluate(f, x0)?;
    let mut iterations = Vec::new();

    for iter in 1..=config.max_iters() {
        let f1 = evaluate(f, x1)?;

        #[allow(clippy::float_cmp)]
        if f1 == f0 {
            return Err(Error::FlatSecant { x0, x1, fx: f1 });
        }

        let next = x1 - f1 * (x1 - x0) / (f1 - f0);
        if !next.is_finite() {
            return Err(Error::NonFiniteStep { x: x1, next });
        }

        let error = relative_error(x1, next);
        let iteration = Iteration {
            iter,
            estimate: Estimate::Secant { x0, x1, next },
            error,
        };

        x0 = x1;
        f0 = f1;
        x1 = next;

        if let Some(status) = push(
            &mut iterations,
            iteration,
            error <= config.tolerance(),
            &mut observer,
        ) {
            return Ok(Solution {
                status,
                root: x1,
                iterations,
            });
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        root: x1,
        iterations,
    })
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function>(
    f: &F,
    guesses: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, guesses, config, ())
}
