use log::debug;

use numer_core::ExpressionEvaluator;
use numer_solvers::{
    Status,
    interpolate::{self, Interpolation, Piece, Points, Term},
};

use crate::{Answer, Calculation, CalculationLogger, Calculator, Error, Method};

fn describe(points: &Points, x: f64) -> String {
    let listed: Vec<String> = points
        .as_slice()
        .iter()
        .map(|p| format!("({}, {})", p.x, p.y))
        .collect();
    format!("{} at x = {x}", listed.join(", "))
}

fn polynomial(method: Method, result: Interpolation) -> Calculation<Term> {
    Calculation::traced(
        method,
        Answer::Scalar(result.value),
        Status::Converged,
        result.terms,
    )
}

impl<E, L> Calculator<'_, E, L>
where
    E: ExpressionEvaluator,
    L: CalculationLogger,
{
    /// Interpolates at `x` with Newton's divided-difference polynomial.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is not finite.
    pub fn newton_interpolation(
        &self,
        points: &Points,
        x: f64,
    ) -> Result<Calculation<Term>, Error> {
        debug!("Newton interpolation through {} points at {x}", points.len());
        let result = interpolate::newton_divided_difference(points, x)?;
        let calculation = polynomial(Method::NewtonInterpolation, result);
        Ok(self.finish(describe(points, x), calculation))
    }

    /// Interpolates at `x` with the Lagrange polynomial.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is not finite.
    pub fn lagrange_interpolation(
        &self,
        points: &Points,
        x: f64,
    ) -> Result<Calculation<Term>, Error> {
        debug!("Lagrange interpolation through {} points at {x}", points.len());
        let result = interpolate::lagrange(points, x)?;
        let calculation = polynomial(Method::LagrangeInterpolation, result);
        Ok(self.finish(describe(points, x), calculation))
    }

    /// Evaluates the natural cubic spline through `points` at `x`.
    ///
    /// The records are the spline pieces; the trace ends with the piece
    /// that contains `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than two points or `x` lies outside
    /// their range.
    pub fn spline_interpolation(
        &self,
        points: &Points,
        x: f64,
    ) -> Result<Calculation<Piece>, Error> {
        debug!("cubic spline through {} points at {x}", points.len());
        let result = interpolate::cubic_spline(points, x)?;

        let calculation = Calculation::traced(
            Method::SplineInterpolation,
            Answer::Scalar(result.value),
            Status::Converged,
            result.pieces,
        )
        .with_line(format!("x = {x} lies in piece {}", result.interval + 1));
        Ok(self.finish(describe(points, x), calculation))
    }
}
