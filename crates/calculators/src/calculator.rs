use log::{info, warn};

use numer_core::{ExprFunction, ExpressionEvaluator};
use numer_solvers::Status;

use crate::{
    Calculation, CalculationLog, CalculationLogger, Error,
    logger::report,
};

/// The name of the free variable in every equation.
pub const VARIABLE: &str = "x";

/// Runs the calculators against one expression evaluator and history sink.
///
/// Every calculator method takes already-parsed numeric inputs plus, where
/// relevant, equation text in the free variable [`VARIABLE`]. On success it
/// reports one [`CalculationLog`] to the logger; logger failures are logged
/// and otherwise ignored.
#[derive(Debug, Clone)]
pub struct Calculator<'a, E, L = ()> {
    evaluator: &'a E,
    logger: L,
}

impl<'a, E: ExpressionEvaluator> Calculator<'a, E> {
    /// Creates a calculator that does not record history.
    pub fn new(evaluator: &'a E) -> Self {
        Self {
            evaluator,
            logger: (),
        }
    }
}

impl<'a, E, L> Calculator<'a, E, L>
where
    E: ExpressionEvaluator,
    L: CalculationLogger,
{
    /// Replaces the history sink.
    pub fn with_logger<M: CalculationLogger>(self, logger: M) -> Calculator<'a, E, M> {
        Calculator {
            evaluator: self.evaluator,
            logger,
        }
    }

    /// Checks that `equation` parses and wraps it as a function of [`VARIABLE`].
    pub(crate) fn function(&self, equation: &str) -> Result<ExprFunction<'a, E>, Error> {
        self.evaluator
            .validate(equation)
            .map_err(|source| Error::Parse {
                expression: equation.to_owned(),
                source: Box::new(source),
            })?;
        Ok(ExprFunction::new(self.evaluator, equation, VARIABLE))
    }

    /// Logs the outcome and reports it to the history sink.
    pub(crate) fn finish<I>(
        &self,
        equation: String,
        calculation: Calculation<I>,
    ) -> Calculation<I> {
        let method = calculation.method;
        match calculation.status {
            Status::Converged => info!("{method} finished: {}", calculation.result),
            status => warn!(
                "{method} stopped with status {status:?} after {} steps: {}",
                calculation.iterations.len(),
                calculation.result
            ),
        }

        report(
            &self.logger,
            &CalculationLog {
                equation,
                method,
                result: calculation.result.clone(),
            },
        );
        calculation
    }
}
