use std::error::Error as StdError;

use thiserror::Error;

use numer_core::{ErrorKind, Function};

/// Errors that can occur when evaluating a function inside a solver.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The function call failed.
    #[error("function call failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The function returned NaN or an infinity.
    #[error("function returned non-finite value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },
}

impl EvalError {
    /// Returns the failure category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Function { .. } => ErrorKind::Evaluation,
            Self::NonFinite { .. } => ErrorKind::NumericInstability,
        }
    }
}

/// Calls the function, passing non-finite values through.
pub(crate) fn call<F: Function>(f: &F, x: f64) -> Result<f64, EvalError> {
    f.call(x).map_err(|error| EvalError::Function {
        x,
        source: Box::new(error),
    })
}

/// Calls the function and rejects non-finite values.
pub(crate) fn evaluate<F: Function>(f: &F, x: f64) -> Result<f64, EvalError> {
    let value = call(f, x)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { x, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn evaluate_returns_finite_values() {
        let value = evaluate(&|x: f64| x + 1.0, 2.0).expect("finite");
        assert_relative_eq!(value, 3.0);
    }

    #[test]
    fn evaluate_rejects_non_finite_values() {
        let err = evaluate(&|x: f64| 1.0 / x, 0.0).unwrap_err();
        assert!(matches!(err, EvalError::NonFinite { x, .. } if x == 0.0));
        assert_eq!(err.kind(), ErrorKind::NumericInstability);
    }

    #[test]
    fn call_passes_non_finite_values_through() {
        let value = call(&|x: f64| x.ln(), -1.0).expect("no function error");
        assert!(value.is_nan());
    }
}
