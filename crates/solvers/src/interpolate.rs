//! Polynomial and spline interpolation through a set of points.
//!
//! - [`newton_divided_difference`]: Newton form of the interpolating polynomial
//! - [`lagrange`]: Lagrange form of the same polynomial
//! - [`cubic_spline`]: natural cubic spline, piecewise between sorted points
//!
//! All three take validated [`Points`] and a target `x`, and report the
//! intermediate quantities behind the value so callers can show their work.

mod error;
mod lagrange;
mod newton;
mod points;
mod spline;

use std::fmt;

pub use error::Error;
pub use lagrange::lagrange;
pub use newton::{NewtonPolynomial, newton_divided_difference};
pub use points::Points;
pub use spline::{CubicSpline, Piece, SplineInterpolation, cubic_spline};

/// An interpolated value and the terms that sum to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interpolation {
    pub value: f64,
    pub terms: Vec<Term>,
}

/// One additive term of a polynomial interpolant at the target.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Term {
    /// `coefficient · product`, where `coefficient` is the divided difference
    /// `f[x_0, …, x_order]` and `product` is `Π_{j<order} (x − x_j)`.
    Newton {
        order: usize,
        coefficient: f64,
        product: f64,
    },

    /// `y · basis`, where `basis` is the Lagrange basis polynomial `L_index(x)`.
    Lagrange { index: usize, y: f64, basis: f64 },
}

impl Term {
    /// Returns this term's contribution to the interpolated value.
    #[must_use]
    pub fn value(&self) -> f64 {
        match *self {
            Self::Newton {
                coefficient,
                product,
                ..
            } => coefficient * product,
            Self::Lagrange { y, basis, .. } => y * basis,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Newton {
                order,
                coefficient,
                product,
            } => write!(
                f,
                "b{order} = {coefficient:.6}, product = {product:.6}, term = {:.6}",
                self.value()
            ),
            Self::Lagrange { index, y, basis } => write!(
                f,
                "L{index}(x) = {basis:.6}, y{index} = {y:.6}, term = {:.6}",
                self.value()
            ),
        }
    }
}

/// Rejects a non-finite interpolation target.
fn check_target(x: f64) -> Result<(), Error> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteTarget { x })
    }
}
