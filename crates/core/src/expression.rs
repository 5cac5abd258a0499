use std::collections::HashMap;

use crate::Function;

/// Named variable values used when evaluating an expression.
pub type Bindings = HashMap<String, f64>;

/// An external engine that parses and evaluates textual expressions.
///
/// The numerical core only needs this capability, not its implementation.
/// Implementations report malformed syntax, unbound variables, and unsupported
/// operations through their own `Error` type.
pub trait ExpressionEvaluator {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Checks that `expression` is well formed without evaluating it.
    ///
    /// Callers use this to tell syntax errors apart from failures during
    /// evaluation. The default accepts everything.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression cannot be parsed.
    fn validate(&self, expression: &str) -> Result<(), Self::Error> {
        let _ = expression;
        Ok(())
    }

    /// Evaluates `expression` with the given variable bindings.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression cannot be parsed or evaluated.
    fn evaluate(&self, expression: &str, bindings: &Bindings) -> Result<f64, Self::Error>;

    /// Returns the symbolic derivative of `expression` with respect to `variable`.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression cannot be parsed or differentiated.
    fn differentiate(&self, expression: &str, variable: &str) -> Result<String, Self::Error>;
}

/// A [`Function`] backed by an expression and an [`ExpressionEvaluator`].
///
/// Each call binds the free variable to `x` on top of any fixed bindings and
/// asks the evaluator for the value.
#[derive(Debug, Clone)]
pub struct ExprFunction<'a, E> {
    evaluator: &'a E,
    expression: String,
    variable: String,
    bindings: Bindings,
}

impl<'a, E: ExpressionEvaluator> ExprFunction<'a, E> {
    /// Creates a function of `variable` from `expression`.
    pub fn new(
        evaluator: &'a E,
        expression: impl Into<String>,
        variable: impl Into<String>,
    ) -> Self {
        Self {
            evaluator,
            expression: expression.into(),
            variable: variable.into(),
            bindings: Bindings::new(),
        }
    }

    /// Adds fixed bindings for the other named variables in the expression.
    #[must_use]
    pub fn with_bindings(mut self, bindings: Bindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Returns the expression text.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Returns the name of the free variable.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Returns the derivative with respect to the free variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the evaluator cannot differentiate the expression.
    pub fn derivative(&self) -> Result<Self, E::Error> {
        let expression = self
            .evaluator
            .differentiate(&self.expression, &self.variable)?;

        Ok(Self {
            evaluator: self.evaluator,
            expression,
            variable: self.variable.clone(),
            bindings: self.bindings.clone(),
        })
    }
}

impl<E: ExpressionEvaluator> Function for ExprFunction<'_, E> {
    type Error = E::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        let mut bindings = self.bindings.clone();
        bindings.insert(self.variable.clone(), x);
        self.evaluator.evaluate(&self.expression, &bindings)
    }
}
