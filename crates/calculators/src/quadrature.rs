use log::debug;

use numer_core::ExpressionEvaluator;
use numer_solvers::{
    Status,
    quadrature::{self, Quadrature, Sample},
};

use crate::{Answer, Calculation, CalculationLogger, Calculator, Error, Method};

fn calculation(method: Method, result: Quadrature) -> Calculation<Sample> {
    let summary = format!("h = {:.6}, sum = {:.6}", result.h, result.sum);
    Calculation::traced(
        method,
        Answer::Scalar(result.value),
        Status::Converged,
        result.samples,
    )
    .with_line(summary)
}

impl<E, L> Calculator<'_, E, L>
where
    E: ExpressionEvaluator,
    L: CalculationLogger,
{
    /// Integrates `equation` over `bounds` with the composite trapezoidal rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the equation does not parse, `n` is zero, or the
    /// integrand cannot be evaluated.
    pub fn trapezoid(
        &self,
        equation: &str,
        bounds: [f64; 2],
        n: usize,
    ) -> Result<Calculation<Sample>, Error> {
        debug!("trapezoidal rule on `{equation}` over {bounds:?} with {n} segments");
        let f = self.function(equation)?;
        let result = quadrature::trapezoid(&f, bounds, n)?;
        Ok(self.finish(equation.to_owned(), calculation(Method::Trapezoid, result)))
    }

    /// Integrates `equation` over `bounds` with composite Simpson's 1/3 rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the equation does not parse, `n` is zero or odd, or
    /// the integrand cannot be evaluated.
    pub fn simpson(
        &self,
        equation: &str,
        bounds: [f64; 2],
        n: usize,
    ) -> Result<Calculation<Sample>, Error> {
        debug!("Simpson's rule on `{equation}` over {bounds:?} with {n} segments");
        let f = self.function(equation)?;
        let result = quadrature::simpson(&f, bounds, n)?;
        Ok(self.finish(equation.to_owned(), calculation(Method::Simpson, result)))
    }
}
