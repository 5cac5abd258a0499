use thiserror::Error;

use numer_core::Function;

use crate::evaluate::evaluate;

use super::Error;

/// Errors that can occur when validating bracket bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
}

/// Ordered finite bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    pub(super) left: f64,
    pub(super) right: f64,
}

impl Bounds {
    /// Validates and orders the endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bounds: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bounds;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }
}

/// Which end of a bracket to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Side {
    Left,
    Right,
}

/// The result of evaluating a candidate bracket.
pub(super) enum Endpoints {
    /// One endpoint is an exact root.
    Root(f64),
    /// The endpoints enclose a sign change.
    Bracket(Bracket),
}

/// Current bracket bounds and the function values there.
///
/// The function values always have opposite signs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    f_left: f64,
    f_right: f64,
}

impl Bracket {
    /// Evaluates the function at both ends of `bounds` and checks for a sign change.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are invalid, if evaluation fails,
    /// or if the function has the same sign at both ends.
    pub(super) fn evaluate<F: Function>(f: &F, bounds: [f64; 2]) -> Result<Endpoints, Error> {
        let Bounds { left, right } = Bounds::new(bounds)?;

        let f_left = evaluate(f, left)?;
        if f_left == 0.0 {
            return Ok(Endpoints::Root(left));
        }

        let f_right = evaluate(f, right)?;
        if f_right == 0.0 {
            return Ok(Endpoints::Root(right));
        }

        if f_left.signum() == f_right.signum() {
            return Err(Error::NoSignChange {
                left,
                right,
                f_left,
                f_right,
            });
        }

        Ok(Endpoints::Bracket(Self {
            left,
            right,
            f_left,
            f_right,
        }))
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub(super) fn bounds(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the function values at the bounds.
    #[must_use]
    pub(super) fn values(&self) -> [f64; 2] {
        [self.f_left, self.f_right]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns the side whose function value has the same sign as `fx`.
    #[must_use]
    pub(super) fn side_sharing_sign(&self, fx: f64) -> Side {
        if fx.signum() == self.f_left.signum() {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Moves one end of the bracket to `x` and returns the replaced bound.
    pub(super) fn replace(&mut self, side: Side, x: f64, fx: f64) -> f64 {
        match side {
            Side::Left => {
                let previous = self.left;
                self.left = x;
                self.f_left = fx;
                previous
            }
            Side::Right => {
                let previous = self.right;
                self.right = x;
                self.f_right = fx;
                previous
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn bracket(f: impl Fn(f64) -> f64, bounds: [f64; 2]) -> Bracket {
        match Bracket::evaluate(&f, bounds).expect("valid bracket") {
            Endpoints::Bracket(bracket) => bracket,
            Endpoints::Root(x) => panic!("unexpected exact root at {x}"),
        }
    }

    #[test]
    fn bounds_reorders_bracket() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bracket");
        assert_relative_eq!(bounds.left, 1.0);
        assert_relative_eq!(bounds.right, 3.0);
    }

    #[test]
    fn bounds_rejects_non_finite() {
        assert_eq!(Bounds::new([f64::NAN, 1.0]), Err(BracketError::NonFinite));
        assert_eq!(
            Bounds::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite)
        );
    }

    #[test]
    fn bounds_rejects_zero_width() {
        assert_eq!(Bounds::new([2.0, 2.0]), Err(BracketError::ZeroWidth));
    }

    #[test]
    fn detects_exact_root_at_endpoint() {
        let result = Bracket::evaluate(&|x: f64| x - 2.0, [2.0, 5.0]).expect("valid");
        assert!(matches!(result, Endpoints::Root(x) if x == 2.0));
    }

    #[test]
    fn rejects_same_sign_endpoints() {
        let result = Bracket::evaluate(&|x: f64| x * x + 1.0, [-1.0, 1.0]);
        assert!(matches!(result, Err(Error::NoSignChange { .. })));
    }

    #[test]
    fn replace_moves_the_requested_side() {
        let mut bracket = bracket(|x| x - 1.5, [0.0, 2.0]);

        let side = bracket.side_sharing_sign(-0.5);
        assert_eq!(side, Side::Left);
        assert_relative_eq!(bracket.replace(side, 1.0, -0.5), 0.0);
        assert_eq!(bracket.bounds(), [1.0, 2.0]);

        let side = bracket.side_sharing_sign(0.25);
        assert_eq!(side, Side::Right);
        assert_relative_eq!(bracket.replace(side, 1.75, 0.25), 2.0);
        assert_eq!(bracket.bounds(), [1.0, 1.75]);
        assert_eq!(bracket.values(), [-0.5, 0.25]);
    }
}
