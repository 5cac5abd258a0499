//! One-point (fixed-point) iteration.
//!
//! Rewrites `f(x) = 0` as `x = g(x)` and iterates `x_new = g(x)`. Whether the
//! sequence converges depends entirely on `g`, so the loop is always capped
//! and a non-finite iterate is reported as [`Status::Diverged`].

use numer_core::{Function, Observer};

use crate::evaluate::call;

use super::{
    Action, Config, Error, Estimate, Iteration, Solution, Status, check_guess, push,
    relative_error,
};

/// Iterates `x = g(x)` from `guess`.
///
/// If `g` returns a non-finite value the run ends with [`Status::Diverged`]
/// and the last finite estimate as the root.
///
/// # Errors
///
/// Returns an error if the guess is non-finite or if calling `g` fails.
pub fn solve<G, Obs>(
    g: &G,
    guess: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    G: Function,
    Obs: Observer<Iteration, Action>,
{
    let mut x = check_guess(guess)?;
    let mut iterations = Vec::new();

    for iter in 1..=config.max_iters() {
        let next = call(g, x)?;
        if !next.is_finite() {
            return Ok(Solution {
                status: Status::Diverged,
                root: x,
                iterations,
            });
        }

        let error = relative_error(x, next);
        let iteration = Iteration {
            iter,
            estimate: Estimate::FixedPoint { x, next },
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

/// Runs one-point iteration without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<G: Function>(
    g: &G,
    guess: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(g, guess, config, ())
}
