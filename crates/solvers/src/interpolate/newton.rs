use super::{Error, Interpolation, Points, Term, check_target};

/// The interpolating polynomial in Newton form,
///
/// ```text
/// P(x) = b0 + b1 (x − x0) + b2 (x − x0)(x − x1) + …
/// ```
///
/// where `b_k = f[x_0, …, x_k]` is the k-th divided difference.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonPolynomial {
    xs: Vec<f64>,
    coefficients: Vec<f64>,
}

impl NewtonPolynomial {
    /// Builds the divided-difference coefficients for `points`.
    #[must_use]
    pub fn fit(points: &Points) -> Self {
        let xs = points.xs();
        let mut coefficients = points.ys();
        let n = xs.len();

        // After pass `order`, entry i holds f[x_{i−order}, …, x_i].
        for order in 1..n {
            for i in (order..n).rev() {
                coefficients[i] =
                    (coefficients[i] - coefficients[i - 1]) / (xs[i] - xs[i - order]);
            }
        }

        Self { xs, coefficients }
    }

    /// Returns the divided differences `b_0, …, b_{n−1}`.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Evaluates the polynomial at `x` by nested multiplication.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.coefficients.len();
        (0..n - 1)
            .rev()
            .fold(self.coefficients[n - 1], |acc, k| {
                self.coefficients[k] + (x - self.xs[k]) * acc
            })
    }

    /// Returns each term `b_k · Π_{j<k} (x − x_j)` at `x`.
    #[must_use]
    pub fn terms(&self, x: f64) -> Vec<Term> {
        let mut product = 1.0;
        self.coefficients
            .iter()
            .zip(&self.xs)
            .enumerate()
            .map(|(order, (&coefficient, &x_k))| {
                let term = Term::Newton {
                    order,
                    coefficient,
                    product,
                };
                product *= x - x_k;
                term
            })
            .collect()
    }
}

/// Interpolates at `x` with Newton's divided differences.
///
/// # Errors
///
/// Returns an error if `x` is not finite.
pub fn newton_divided_difference(points: &Points, x: f64) -> Result<Interpolation, Error> {
    check_target(x)?;
    let polynomial = NewtonPolynomial::fit(points);

    Ok(Interpolation {
        value: polynomial.evaluate(x),
        terms: polynomial.terms(x),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn cubic_samples() -> Points {
        // y = x³ − 2x + 1
        Points::try_from(vec![(-1.0, 2.0), (0.0, 1.0), (1.0, 0.0), (2.0, 5.0)]).expect("valid")
    }

    #[test]
    fn reproduces_cubic() {
        let result = newton_divided_difference(&cubic_samples(), 1.5).expect("finite target");

        assert_relative_eq!(result.value, 1.5_f64.powi(3) - 3.0 + 1.0, epsilon = 1e-12);
    }

    #[test]
    fn coefficients_are_divided_differences() {
        let polynomial = NewtonPolynomial::fit(&cubic_samples());

        // f[x0] = 2, f[x0,x1] = −1, f[x0,x1,x2] = 0, f[x0..x3] = 1.
        let expected = [2.0, -1.0, 0.0, 1.0];
        for (b, e) in polynomial.coefficients().iter().zip(expected) {
            assert_relative_eq!(*b, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn terms_sum_to_value() {
        let result = newton_divided_difference(&cubic_samples(), 0.5).expect("finite target");

        let total: f64 = result.terms.iter().map(Term::value).sum();
        assert_eq!(result.terms.len(), 4);
        assert_relative_eq!(total, result.value, epsilon = 1e-12);
    }

    #[test]
    fn passes_through_every_point() {
        let points = cubic_samples();
        let polynomial = NewtonPolynomial::fit(&points);

        for point in points.as_slice() {
            assert_relative_eq!(polynomial.evaluate(point.x), point.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn two_points_give_a_line() {
        let points = Points::try_from(vec![(0.0, 1.0), (2.0, 5.0)]).expect("valid");

        let result = newton_divided_difference(&points, 1.0).expect("finite target");

        assert_relative_eq!(result.value, 3.0);
    }

    #[test]
    fn rejects_non_finite_target() {
        let result = newton_divided_difference(&cubic_samples(), f64::NAN);

        assert!(matches!(result, Err(Error::NonFiniteTarget { .. })));
    }
}
