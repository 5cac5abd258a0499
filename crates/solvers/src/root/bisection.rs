//! Bisection over a sign-change bracket.
//!
//! Each step evaluates the midpoint `xm = (xl + xr) / 2`. If `f(xm)` has the
//! same sign as `f(xr)` the right bound moves to `xm`, otherwise the left
//! bound does. The relative error compares `xm` with the prior value of the
//! bound it replaced.

use numer_core::{Function, Observer};

use crate::evaluate::evaluate;

use super::{
    Action, Config, Error, Estimate, Iteration, Solution, Status,
    bracket::{Bracket, Endpoints, Side},
    push, relative_error,
};

/// Finds a root of `f` inside `bracket` using bisection.
///
/// The bracket may be given in either order. An endpoint where `f` is
/// exactly zero is returned immediately with no iterations.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite or zero width, if `f` has
/// the same sign at both ends, or if evaluating `f` fails or is non-finite.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Iteration, Action>,
{
    let mut bracket = match Bracket::evaluate(f, bracket)? {
        Endpoints::Root(root) => return Ok(Solution::exact(root)),
        Endpoints::Bracket(bracket) => bracket,
    };

    let mut iterations = Vec::new();
    let mut root = bracket.midpoint();

    for iter in 1..=config.max_iters() {
        let [left, right] = bracket.bounds();
        let [_, f_right] = bracket.values();

        let mid = bracket.midpoint();
        let f_mid = evaluate(f, mid)?;

        let side = if f_mid * f_right > 0.0 {
            Side::Right
        } else {
            Side::Left
        };
        let replaced = bracket.replace(side, mid, f_mid);
        let error = relative_error(replaced, mid);
        root = mid;

        let iteration = Iteration {
            iter,
            estimate: Estimate::Bracket {
                left,
                mid,
                right,
                f_mid,
            },
            error,
        };

        let converged = f_mid == 0.0 || error <= config.tolerance();
        if let Some(status) = push(&mut iterations, iteration, converged, &mut observer) {
            return Ok(Solution {
                status,
                root,
                iterations,
            });
        }
    }

    Ok(Solution {
        status: Status::MaxIters,
        root,
        iterations,
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, bracket, config, ())
}
