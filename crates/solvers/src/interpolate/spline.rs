use std::fmt;

use crate::linear::{EliminationConfig, System, gauss};

use super::{Error, Points, check_target};

/// One cubic piece `S(x) = a + b·t + c·t² + d·t³` with `t = x − x0`,
/// valid on `[x0, x1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub x0: f64,
    pub x1: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Piece {
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let t = x - self.x0;
        self.a + t * (self.b + t * (self.c + t * self.d))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.6}, {:.6}]: a = {:.6}, b = {:.6}, c = {:.6}, d = {:.6}",
            self.x0, self.x1, self.a, self.b, self.c, self.d
        )
    }
}

/// A natural cubic spline: second derivative zero at both ends.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicSpline {
    pieces: Vec<Piece>,
}

impl CubicSpline {
    /// Fits a natural cubic spline through `points`, in order of increasing x.
    ///
    /// The coefficients `c_i` solve the tridiagonal continuity system
    ///
    /// ```text
    /// h_{i−1} c_{i−1} + 2 (h_{i−1} + h_i) c_i + h_i c_{i+1}
    ///     = 3 (a_{i+1} − a_i) / h_i − 3 (a_i − a_{i−1}) / h_{i−1}
    /// ```
    ///
    /// with `c_0 = c_{n−1} = 0`, where `a_i = y_i` and `h_i = x_{i+1} − x_i`.
    ///
    /// # Errors
    ///
    /// Returns an error if the continuity system cannot be solved.
    pub fn natural(points: &Points) -> Result<Self, Error> {
        let sorted = points.sorted();
        let n = sorted.len();
        let x: Vec<f64> = sorted.iter().map(|p| p.x).collect();
        let a: Vec<f64> = sorted.iter().map(|p| p.y).collect();
        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();

        let mut rows = vec![vec![0.0; n]; n];
        let mut rhs = vec![0.0; n];
        rows[0][0] = 1.0;
        rows[n - 1][n - 1] = 1.0;
        for i in 1..n - 1 {
            rows[i][i - 1] = h[i - 1];
            rows[i][i] = 2.0 * (h[i - 1] + h[i]);
            rows[i][i + 1] = h[i];
            rhs[i] = 3.0 / h[i] * (a[i + 1] - a[i]) - 3.0 / h[i - 1] * (a[i] - a[i - 1]);
        }

        let system = System::from_rows(&rows, &rhs)?;
        let c = gauss(&system, &EliminationConfig::default())?.solution;

        let pieces = (0..n - 1)
            .map(|i| Piece {
                x0: x[i],
                x1: x[i + 1],
                a: a[i],
                b: (a[i + 1] - a[i]) / h[i] - h[i] * (c[i + 1] + 2.0 * c[i]) / 3.0,
                c: c[i],
                d: (c[i + 1] - c[i]) / (3.0 * h[i]),
            })
            .collect();

        Ok(Self { pieces })
    }

    /// Returns the pieces in order of increasing x.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns the index of the first piece whose closed interval contains `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `x` lies outside the fitted points.
    pub fn interval(&self, x: f64) -> Result<usize, Error> {
        self.pieces
            .iter()
            .position(|piece| piece.x0 <= x && x <= piece.x1)
            .ok_or_else(|| Error::OutOfRange {
                x,
                min: self.pieces.first().map_or(f64::NAN, |p| p.x0),
                max: self.pieces.last().map_or(f64::NAN, |p| p.x1),
            })
    }

    /// Evaluates the spline at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `x` lies outside the fitted points.
    pub fn evaluate(&self, x: f64) -> Result<f64, Error> {
        let index = self.interval(x)?;
        Ok(self.pieces[index].evaluate(x))
    }
}

/// A spline value together with the piece that produced it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplineInterpolation {
    pub value: f64,
    /// Index into `pieces` of the interval containing the target.
    pub interval: usize,
    pub pieces: Vec<Piece>,
}

/// Interpolates at `x` with a natural cubic spline.
///
/// # Errors
///
/// Returns an error if `x` is non-finite or outside the range of the points,
/// or if the spline system cannot be solved.
pub fn cubic_spline(points: &Points, x: f64) -> Result<SplineInterpolation, Error> {
    check_target(x)?;
    let spline = CubicSpline::natural(points)?;
    let interval = spline.interval(x)?;

    Ok(SplineInterpolation {
        value: spline.pieces[interval].evaluate(x),
        interval,
        pieces: spline.pieces,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn knots() -> Points {
        Points::try_from(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0)]).expect("valid")
    }

    #[test]
    fn passes_through_knots() {
        let spline = CubicSpline::natural(&knots()).expect("solvable");

        for point in knots().as_slice() {
            let y = spline.evaluate(point.x).expect("in range");
            assert_relative_eq!(y, point.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn is_natural_and_continuous() {
        let spline = CubicSpline::natural(&knots()).expect("solvable");
        let pieces = spline.pieces();

        assert_relative_eq!(pieces[0].c, 0.0, epsilon = 1e-12);
        let last = pieces[pieces.len() - 1];
        let h = last.x1 - last.x0;
        // S''(x_n) = 2c + 6d·h must vanish.
        assert_relative_eq!(2.0 * last.c + 6.0 * last.d * h, 0.0, epsilon = 1e-12);

        for pair in pieces.windows(2) {
            let [left, right] = [pair[0], pair[1]];
            let h = left.x1 - left.x0;
            let slope_left = left.b + 2.0 * left.c * h + 3.0 * left.d * h * h;
            assert_relative_eq!(slope_left, right.b, epsilon = 1e-12);
        }
    }

    #[test]
    fn two_points_give_a_line() {
        let points = Points::try_from(vec![(1.0, 2.0), (3.0, 6.0)]).expect("valid");

        let result = cubic_spline(&points, 2.5).expect("in range");

        assert_relative_eq!(result.value, 5.0, epsilon = 1e-12);
        assert_eq!(result.interval, 0);
    }

    #[test]
    fn sorts_unordered_points() {
        let points = Points::try_from(vec![(2.0, 0.0), (0.0, 0.0), (3.0, 1.0), (1.0, 1.0)])
            .expect("valid");

        let result = cubic_spline(&points, 1.5).expect("in range");
        let expected = cubic_spline(&knots(), 1.5).expect("in range");

        assert_relative_eq!(result.value, expected.value, epsilon = 1e-12);
        assert_eq!(result.interval, 1);
    }

    #[test]
    fn closely_spaced_knots_are_solvable() {
        let points = Points::try_from(vec![(0.0, 0.0), (1e-13, 1.0), (2e-13, 2.0), (3e-13, 3.0)])
            .expect("valid");

        let result = cubic_spline(&points, 1.5e-13).expect("well-posed at small scale");

        assert_relative_eq!(result.value, 1.5, max_relative = 1e-9);
        assert_eq!(result.interval, 1);
    }

    #[test]
    fn shared_knot_uses_first_interval() {
        let result = cubic_spline(&knots(), 1.0).expect("in range");
        assert_eq!(result.interval, 0);
    }

    #[test]
    fn rejects_target_outside_points() {
        let error = cubic_spline(&knots(), 3.5).unwrap_err();

        assert_eq!(error, Error::OutOfRange {
            x: 3.5,
            min: 0.0,
            max: 3.0
        });
        assert_eq!(error.kind(), numer_core::ErrorKind::Domain);
    }
}
