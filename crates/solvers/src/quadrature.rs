//! Composite Newton-Cotes quadrature over `n` equal segments.
//!
//! - [`trapezoid`]: `h/2 · (f(a) + 2Σ f(a + ih) + f(b))`
//! - [`simpson`]: `h/3 · (f(a) + 4f(x_1) + 2f(x_2) + … + 4f(x_{n−1}) + f(b))`,
//!   `n` even
//!
//! Both report the nodes and weights they used so the integrand can be
//! plotted with the sampled points.

use std::fmt;

use thiserror::Error;

use numer_core::{ErrorKind, Function};

use crate::{EvalError, evaluate::evaluate};

/// Errors that can occur while integrating.
#[derive(Debug, Error)]
pub enum Error {
    #[error("number of segments must be at least one")]
    ZeroSegments,

    #[error("Simpson's rule needs an even number of segments, got {n}")]
    OddSegments { n: usize },

    #[error("integration bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Returns the failure category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroSegments | Self::OddSegments { .. } | Self::NonFiniteBound { .. } => {
                ErrorKind::Domain
            }
            Self::Eval(error) => error.kind(),
        }
    }
}

/// A node of a quadrature rule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    /// Multiplier of `f(x)` in the weighted sum.
    pub weight: f64,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x = {:.6}, f(x) = {:.6}, weight = {}",
            self.x, self.y, self.weight
        )
    }
}

/// The result of a composite rule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quadrature {
    /// Approximate integral.
    pub value: f64,
    /// Segment width `(b − a) / n`.
    pub h: f64,
    /// Weighted sum `Σ w_i f(x_i)` before scaling by `h`.
    pub sum: f64,
    /// Nodes in order from `a` to `b`.
    pub samples: Vec<Sample>,
}

/// Integrates `f` over `[a, b]` with the composite trapezoidal rule.
///
/// Reversed bounds give the negated integral.
///
/// # Errors
///
/// Returns an error if `n` is zero, a bound is non-finite, or evaluating
/// `f` fails or is non-finite.
pub fn trapezoid<F: Function>(f: &F, bounds: [f64; 2], n: usize) -> Result<Quadrature, Error> {
    integrate(f, bounds, n, |i| if i == 0 || i == n { 1.0 } else { 2.0 }, 2.0)
}

/// Integrates `f` over `[a, b]` with the composite Simpson's 1/3 rule.
///
/// # Errors
///
/// Returns an error if `n` is zero or odd, a bound is non-finite, or
/// evaluating `f` fails or is non-finite.
pub fn simpson<F: Function>(f: &F, bounds: [f64; 2], n: usize) -> Result<Quadrature, Error> {
    if n % 2 == 1 {
        return Err(Error::OddSegments { n });
    }
    integrate(
        f,
        bounds,
        n,
        |i| {
            if i == 0 || i == n {
                1.0
            } else if i % 2 == 1 {
                4.0
            } else {
                2.0
            }
        },
        3.0,
    )
}

/// Evaluates `h / divisor · Σ weight(i) · f(a + i·h)` over `n + 1` nodes.
fn integrate<F, W>(
    f: &F,
    [a, b]: [f64; 2],
    n: usize,
    weight: W,
    divisor: f64,
) -> Result<Quadrature, Error>
where
    F: Function,
    W: Fn(usize) -> f64,
{
    if n == 0 {
        return Err(Error::ZeroSegments);
    }
    if let Some(&value) = [a, b].iter().find(|v| !v.is_finite()) {
        return Err(Error::NonFiniteBound { value });
    }

    #[allow(clippy::cast_precision_loss)]
    let h = (b - a) / n as f64;

    let samples = (0..=n)
        .map(|i| -> Result<Sample, Error> {
            #[allow(clippy::cast_precision_loss)]
            let x = if i == n { b } else { a + i as f64 * h };
            let y = evaluate(f, x)?;
            Ok(Sample {
                x,
                y,
                weight: weight(i),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let sum: f64 = samples.iter().map(|s| s.weight * s.y).sum();

    Ok(Quadrature {
        value: h / divisor * sum,
        h,
        sum,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn trapezoid_is_exact_for_lines() {
        let result = trapezoid(&|x: f64| 3.0 * x + 1.0, [0.0, 2.0], 1).expect("valid");

        assert_relative_eq!(result.value, 8.0);
        assert_relative_eq!(result.h, 2.0);
        assert_eq!(result.samples.len(), 2);
    }

    #[test]
    fn trapezoid_weights_interior_nodes_twice() {
        let result = trapezoid(&|x: f64| x * x, [0.0, 2.0], 4).expect("valid");

        let weights: Vec<f64> = result.samples.iter().map(|s| s.weight).collect();
        assert_eq!(weights, vec![1.0, 2.0, 2.0, 2.0, 1.0]);
        // h/2 · (0 + 2(0.25 + 1 + 2.25) + 4) = 0.25 · 11 = 2.75
        assert_relative_eq!(result.sum, 11.0, epsilon = 1e-12);
        assert_relative_eq!(result.value, 2.75, epsilon = 1e-12);
    }

    #[test]
    fn simpson_is_exact_for_cubics() {
        let result = simpson(&|x: f64| x.powi(3) - x, [0.0, 2.0], 2).expect("valid");

        assert_relative_eq!(result.value, 2.0, epsilon = 1e-12);
        let weights: Vec<f64> = result.samples.iter().map(|s| s.weight).collect();
        assert_eq!(weights, vec![1.0, 4.0, 1.0]);
    }

    #[test]
    fn simpson_beats_trapezoid_on_parabola() {
        let f = |x: f64| x * x;
        let exact = 8.0 / 3.0;

        let t = trapezoid(&f, [0.0, 2.0], 10).expect("valid");
        let s = simpson(&f, [0.0, 2.0], 10).expect("valid");

        assert!((s.value - exact).abs() < (t.value - exact).abs());
        assert_relative_eq!(s.value, exact, epsilon = 1e-12);
    }

    #[test]
    fn zero_width_interval_integrates_to_zero() {
        let result = simpson(&|x: f64| x.exp(), [1.0, 1.0], 4).expect("valid");
        assert_relative_eq!(result.value, 0.0);
    }

    #[test]
    fn reversed_bounds_negate() {
        let forward = trapezoid(&|x: f64| x * x, [0.0, 1.0], 8).expect("valid");
        let backward = trapezoid(&|x: f64| x * x, [1.0, 0.0], 8).expect("valid");
        assert_relative_eq!(forward.value, -backward.value, epsilon = 1e-12);
    }

    #[test]
    fn rejects_bad_segment_counts() {
        let f = |x: f64| x;

        assert!(matches!(trapezoid(&f, [0.0, 1.0], 0), Err(Error::ZeroSegments)));
        assert!(matches!(simpson(&f, [0.0, 1.0], 0), Err(Error::ZeroSegments)));
        let error = simpson(&f, [0.0, 1.0], 3).unwrap_err();
        assert!(matches!(error, Error::OddSegments { n: 3 }));
        assert_eq!(error.kind(), ErrorKind::Domain);
    }

    #[test]
    fn rejects_non_finite_bound() {
        let result = trapezoid(&|x: f64| x, [0.0, f64::INFINITY], 4);
        assert!(matches!(result, Err(Error::NonFiniteBound { .. })));
    }

    #[test]
    fn rejects_non_finite_integrand() {
        let result = trapezoid(&|x: f64| 1.0 / x, [0.0, 1.0], 4);
        assert!(matches!(result, Err(Error::Eval(EvalError::NonFinite { .. }))));
    }
}
