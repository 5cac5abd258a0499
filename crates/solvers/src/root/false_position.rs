//! False position (regula falsi) over a sign-change bracket.
//!
//! Each step intersects the chord through `(xl, f(xl))` and `(xr, f(xr))`
//! with the x axis:
//!
//! ```text
//! xm = xr − f(xr) · (xl − xr) / (f(xl) − f(xr))
//! ```
//!
//! and moves whichever bound shares the sign of `f(xm)`. The relative error
//! compares `xm` with the previous estimate; on the first step there is no
//! previous estimate, so the replaced bound is used.

use numer_core::{Function, Observer};

use crate::evaluate::evaluate;

use super::{
    Action, Config, Error, Estimate, Iteration, Solution, Status,
    bracket::{Bracket, Endpoints},
    push, relative_error,
};

/// Finds a root of `f` inside `bracket` using false position.
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
    let mut previous: Option<f64> = None;
    let mut root = bracket.midpoint();

    for iter in 1..=config.max_iters() {
        let [left, right] = bracket.bounds();
        let [f_left, f_right] = bracket.values();

        // The values have opposite signs, so the denominator is non-zero.
        let mid = right - f_right * (left - right) / (f_left - f_right);
        if !mid.is_finite() {
            return Err(Error::NonFiniteStep { x: right, next: mid });
        }
        let f_mid = evaluate(f, mid)?;

        let side = bracket.side_sharing_sign(f_mid);
        let replaced = bracket.replace(side, mid, f_mid);
        let error = relative_error(previous.unwrap_or(replaced), mid);
        previous = Some(mid);
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

/// Runs false position without observation.
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
