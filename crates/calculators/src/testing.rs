//! A fixed-table expression evaluator for unit tests.

use thiserror::Error;

use numer_core::{Bindings, ExpressionEvaluator};

#[derive(Debug, Error)]
#[error("unknown expression `{0}`")]
pub(crate) struct Unknown(String);

/// Evaluates only the expressions listed in [`Table::lookup`].
pub(crate) struct Table;

impl Table {
    fn lookup(expression: &str) -> Option<fn(f64) -> f64> {
        let f: fn(f64) -> f64 = match expression {
            "x^4 - 13" => |x| x.powi(4) - 13.0,
            "4*x^3" => |x| 4.0 * x.powi(3),
            "cos(x) - x" => |x| x.cos() - x,
            "-sin(x) - 1" => |x| -x.sin() - 1.0,
            "2*x + 1" => |x| 2.0 * x + 1.0,
            "x^2 - 2" => |x| x * x - 2.0,
            "x^2" => |x| x * x,
            _ => return None,
        };
        Some(f)
    }
}

impl ExpressionEvaluator for Table {
    type Error = Unknown;

    fn validate(&self, expression: &str) -> Result<(), Self::Error> {
        Self::lookup(expression)
            .map(|_| ())
            .ok_or_else(|| Unknown(expression.to_owned()))
    }

    fn evaluate(&self, expression: &str, bindings: &Bindings) -> Result<f64, Self::Error> {
        let f = Self::lookup(expression).ok_or_else(|| Unknown(expression.to_owned()))?;
        let x = bindings
            .get("x")
            .copied()
            .ok_or_else(|| Unknown("x".to_owned()))?;
        Ok(f(x))
    }

    fn differentiate(&self, expression: &str, _variable: &str) -> Result<String, Self::Error> {
        match expression {
            "x^4 - 13" => Ok("4*x^3".to_owned()),
            other => Err(Unknown(other.to_owned())),
        }
    }
}
