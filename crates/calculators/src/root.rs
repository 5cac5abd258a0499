use log::debug;

use numer_core::ExpressionEvaluator;
use numer_solvers::{
    Point, Status,
    root::{
        Config, Iteration, Solution, bisection, false_position, graphical, newton, one_point,
        secant,
    },
};

use crate::{Answer, Calculation, CalculationLogger, Calculator, Error, Method};

fn calculation(method: Method, solution: Solution) -> Calculation<Iteration> {
    Calculation::traced(
        method,
        Answer::Scalar(solution.root),
        solution.status,
        solution.iterations,
    )
}

impl<E, L> Calculator<'_, E, L>
where
    E: ExpressionEvaluator,
    L: CalculationLogger,
{
    /// Finds a root of `equation` in `bracket` by bisection.
    ///
    /// # Errors
    ///
    /// Returns an error if the equation does not parse or the solver fails.
    pub fn bisection(
        &self,
        equation: &str,
        bracket: [f64; 2],
        config: &Config,
    ) -> Result<Calculation<Iteration>, Error> {
        debug!("bisection on `{equation}` over {bracket:?}");
        let f = self.function(equation)?;
        let solution = bisection::solve_unobserved(&f, bracket, config)?;
        Ok(self.finish(equation.to_owned(), calculation(Method::Bisection, solution)))
    }

    /// Finds a root of `equation` in `bracket` by false position.
    ///
    /// # Errors
    ///
    /// Returns an error if the equation does not parse or the solver fails.
    pub fn false_position(
        &self,
        equation: &str,
        bracket: [f64; 2],
        config: &Config,
    ) -> Result<Calculation<Iteration>, Error> {
        debug!("false position on `{equation}` over {bracket:?}");
        let f = self.function(equation)?;
        let solution = false_position::solve_unobserved(&f, bracket, config)?;
        Ok(self.finish(equation.to_owned(), calculation(Method::FalsePosition, solution)))
    }

    /// Finds a root of `equation` by Newton-Raphson from `guess`.
    ///
    /// If `derivative` is `None` the evaluator is asked to differentiate the
    /// equation.
    ///
    /// # Errors
    ///
    /// Returns an error if either expression does not parse, if
    /// differentiation is needed and unsupported, or if the solver fails.
    pub fn newton_raphson(
        &self,
        equation: &str,
        derivative: Option<&str>,
        guess: f64,
        config: &Config,
    ) -> Result<Calculation<Iteration>, Error> {
        debug!("Newton-Raphson on `{equation}` from {guess}");
        let f = self.function(equation)?;
        let df = match derivative {
            Some(derivative) => self.function(derivative)?,
            None => f.derivative().map_err(|source| Error::Differentiate {
                expression: equation.to_owned(),
                source: Box::new(source),
            })?,
        };
        debug!("using derivative `{}`", df.expression());

        let solution = newton::solve_unobserved(&f, &df, guess, config)?;
        Ok(self.finish(equation.to_owned(), calculation(Method::NewtonRaphson, solution)))
    }

    /// Finds a root of `equation` by the secant method from two guesses.
    ///
    /// # Errors
    ///
    /// Returns an error if the equation does not parse or the solver fails.
    pub fn secant(
        &self,
        equation: &str,
        guesses: [f64; 2],
        config: &Config,
    ) -> Result<Calculation<Iteration>, Error> {
        debug!("secant on `{equation}` from {guesses:?}");
        let f = self.function(equation)?;
        let solution = secant::solve_unobserved(&f, guesses, config)?;
        Ok(self.finish(equation.to_owned(), calculation(Method::Secant, solution)))
    }

    /// Iterates `x = g(x)` where `g` is given by `equation`.
    ///
    /// # Errors
    ///
    /// Returns an error if the equation does not parse or evaluation fails.
    pub fn one_point(
        &self,
        equation: &str,
        guess: f64,
        config: &Config,
    ) -> Result<Calculation<Iteration>, Error> {
        debug!("one-point iteration on `{equation}` from {guess}");
        let g = self.function(equation)?;
        let solution = one_point::solve_unobserved(&g, guess, config)?;
        Ok(self.finish(equation.to_owned(), calculation(Method::OnePoint, solution)))
    }

    /// Tabulates `equation` over `range` to locate roots.
    ///
    /// The answer lists the sampled near-roots. The records are the samples,
    /// for plotting, and the trace names each sign-change interval.
    ///
    /// # Errors
    ///
    /// Returns an error if the equation does not parse, the range or step is
    /// invalid, or evaluation fails.
    pub fn graphical(
        &self,
        equation: &str,
        range: [f64; 2],
        step: f64,
        tolerance: f64,
    ) -> Result<Calculation<Point>, Error> {
        debug!("graphical scan of `{equation}` over {range:?} with step {step}");
        let f = self.function(equation)?;
        let scan = graphical::scan(&f, range, step, tolerance)?;

        let trace = scan
            .roots
            .iter()
            .map(|x| format!("f({x:.6}) is within {tolerance} of zero"))
            .chain(
                scan.sign_changes
                    .iter()
                    .map(|[a, b]| format!("sign change in [{a:.6}, {b:.6}]")),
            )
            .collect();

        let calculation = Calculation {
            method: Method::Graphical,
            result: Answer::Vector(scan.roots),
            status: Status::Converged,
            iterations: scan.samples,
            trace,
        };
        Ok(self.finish(equation.to_owned(), calculation))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use numer_core::ErrorKind;

    use crate::testing::Table;

    use super::*;

    #[test]
    fn bisection_reports_iterations_and_trace() {
        let calculator = Calculator::new(&Table);

        let result = calculator
            .bisection("x^4 - 13", [1.5, 2.0], &Config::default())
            .expect("solves");

        assert_eq!(result.method, Method::Bisection);
        assert_eq!(result.status, Status::Converged);
        assert_eq!(result.trace.len(), result.iterations.len());
        assert!(result.trace[0].starts_with("  1: xl = 1.500000, xm = 1.750000"));
        match result.result {
            Answer::Scalar(root) => {
                assert_relative_eq!(root, 13.0_f64.powf(0.25), max_relative = 1e-6);
            }
            Answer::Vector(_) => panic!("expected a scalar root"),
        }
    }

    #[test]
    fn unknown_equation_is_a_parse_error() {
        let calculator = Calculator::new(&Table);

        let error = calculator
            .secant("x +", [0.0, 1.0], &Config::default())
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Parse);
    }

    #[test]
    fn newton_uses_symbolic_derivative_when_missing() {
        let calculator = Calculator::new(&Table);

        let result = calculator
            .newton_raphson("x^4 - 13", None, 2.0, &Config::default())
            .expect("table differentiates x^4 - 13");

        assert_eq!(result.status, Status::Converged);
    }

    #[test]
    fn newton_reports_unsupported_derivative() {
        let calculator = Calculator::new(&Table);

        let error = calculator
            .newton_raphson("cos(x) - x", None, 1.0, &Config::default())
            .unwrap_err();

        assert!(matches!(error, Error::Differentiate { .. }));

        let result = calculator
            .newton_raphson("cos(x) - x", Some("-sin(x) - 1"), 1.0, &Config::default())
            .expect("explicit derivative");
        assert_eq!(result.status, Status::Converged);
    }

    #[test]
    fn one_point_hitting_cap_is_still_a_result() {
        let calculator = Calculator::new(&Table);
        let config = Config::new(1e-5, 5).expect("valid config");

        let result = calculator
            .one_point("2*x + 1", 1.0, &config)
            .expect("runs");

        assert_eq!(result.status, Status::MaxIters);
        assert_eq!(result.iterations.len(), 5);
    }

    #[test]
    fn graphical_lists_sign_changes() {
        let calculator = Calculator::new(&Table);

        let result = calculator
            .graphical("x^2 - 2", [-3.0, 3.0], 0.5, 1e-5)
            .expect("scans");

        assert_eq!(result.iterations.len(), 13);
        assert_eq!(result.result, Answer::Vector(vec![]));
        assert_eq!(result.trace.len(), 2);
    }
}
