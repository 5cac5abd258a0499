use log::debug;

use numer_core::ExpressionEvaluator;
use numer_solvers::{
    Status,
    linear::{
        self, AugmentedMatrix, Elimination, EliminationConfig, IterativeConfig,
        IterativeSolution, RowOperation, Sweep, System,
    },
};

use crate::{Answer, Calculation, CalculationLogger, Calculator, Error, Method};

/// Renders `[A | b]` as the equation text for history.
fn describe(system: &System) -> String {
    AugmentedMatrix::new(system).to_string()
}

fn elimination(method: Method, result: Elimination) -> Calculation<RowOperation> {
    let reduced = result.reduced.to_string();
    Calculation::traced(
        method,
        Answer::Vector(result.solution),
        Status::Converged,
        result.operations,
    )
    .with_line(reduced)
}

fn iterative(method: Method, result: IterativeSolution) -> Calculation<Sweep> {
    Calculation::traced(method, Answer::Vector(result.x), result.status, result.sweeps)
}

impl<E, L> Calculator<'_, E, L>
where
    E: ExpressionEvaluator,
    L: CalculationLogger,
{
    /// Solves `system` by Cramer's rule.
    ///
    /// The records are the determinants `det(A_i)` for each unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is singular or a determinant overflows.
    pub fn cramer(&self, system: &System) -> Result<Calculation<f64>, Error> {
        debug!("Cramer's rule on {} unknowns", system.size());
        let result = linear::cramer(system)?;

        let mut trace = vec![format!("det(A) = {:.6}", result.determinant)];
        trace.extend(
            result
                .determinants
                .iter()
                .zip(&result.solution)
                .enumerate()
                .map(|(i, (det_i, x_i))| {
                    format!("det(A{n}) = {det_i:.6}, x{n} = {x_i:.6}", n = i + 1)
                }),
        );

        let calculation = Calculation {
            method: Method::Cramer,
            result: Answer::Vector(result.solution),
            status: Status::Converged,
            iterations: result.determinants,
            trace,
        };
        Ok(self.finish(describe(system), calculation))
    }

    /// Solves `system` by Gaussian elimination.
    ///
    /// # Errors
    ///
    /// Returns an error if a pivot is unusable under `config` or the solution
    /// overflows.
    pub fn gauss(
        &self,
        system: &System,
        config: &EliminationConfig,
    ) -> Result<Calculation<RowOperation>, Error> {
        debug!(
            "Gauss elimination on {} unknowns with {:?} pivoting",
            system.size(),
            config.pivoting()
        );
        let result = linear::gauss(system, config)?;
        Ok(self.finish(describe(system), elimination(Method::Gauss, result)))
    }

    /// Solves `system` by Gauss-Jordan reduction.
    ///
    /// # Errors
    ///
    /// Returns an error if a pivot is unusable under `config` or the solution
    /// overflows.
    pub fn gauss_jordan(
        &self,
        system: &System,
        config: &EliminationConfig,
    ) -> Result<Calculation<RowOperation>, Error> {
        debug!(
            "Gauss-Jordan on {} unknowns with {:?} pivoting",
            system.size(),
            config.pivoting()
        );
        let result = linear::gauss_jordan(system, config)?;
        Ok(self.finish(describe(system), elimination(Method::GaussJordan, result)))
    }

    /// Solves `system` by Jacobi iteration from `initial`.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial` is invalid or a diagonal entry is zero.
    pub fn jacobi(
        &self,
        system: &System,
        initial: &[f64],
        config: &IterativeConfig,
    ) -> Result<Calculation<Sweep>, Error> {
        debug!("Jacobi iteration on {} unknowns from {initial:?}", system.size());
        let result = linear::jacobi_unobserved(system, initial, config)?;
        Ok(self.finish(describe(system), iterative(Method::Jacobi, result)))
    }

    /// Solves `system` by Gauss-Seidel iteration from `initial`.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial` is invalid or a diagonal entry is zero.
    pub fn gauss_seidel(
        &self,
        system: &System,
        initial: &[f64],
        config: &IterativeConfig,
    ) -> Result<Calculation<Sweep>, Error> {
        debug!("Gauss-Seidel iteration on {} unknowns from {initial:?}", system.size());
        let result = linear::gauss_seidel_unobserved(system, initial, config)?;
        Ok(self.finish(describe(system), iterative(Method::GaussSeidel, result)))
    }
}
