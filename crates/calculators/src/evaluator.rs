//! An [`ExpressionEvaluator`] backed by the `evalexpr` crate.
//!
//! Expressions use `evalexpr` syntax (`^` is exponentiation) with the usual
//! math functions available unprefixed, so `cos(x) - x` and `exp(-x) - x`
//! work as typed. The constants `pi` and `e` are always bound.
//!
//! Integer literals are read as floats, so `1/2` is `0.5` rather than
//! `evalexpr`'s integer quotient `0`.

use std::f64::consts;

use evalexpr::{
    ContextWithMutableFunctions, ContextWithMutableVariables, EvalexprResult, Function,
    HashMapContext, Node, Value, build_operator_tree,
};
use thiserror::Error;

use numer_core::{Bindings, ErrorKind, ExpressionEvaluator};

/// Errors reported by [`EvalexprEvaluator`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("cannot parse `{expression}`: {message}")]
    Parse { expression: String, message: String },

    #[error("cannot evaluate `{expression}`: {message}")]
    Evaluation { expression: String, message: String },

    #[error("{operation} is not supported by evalexpr")]
    Unsupported { operation: &'static str },
}

impl ExprError {
    /// Returns the failure category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Evaluation { .. } | Self::Unsupported { .. } => ErrorKind::Evaluation,
        }
    }
}

/// Evaluates equations with `evalexpr`.
///
/// `evalexpr` has no symbolic differentiation, so Newton-Raphson needs an
/// explicit derivative expression with this evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalexprEvaluator;

impl EvalexprEvaluator {
    /// Creates the evaluator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Rewrites integer literals such as `2` as `2.0`.
///
/// Digits attached to an identifier (`log10`, `x2`) and literals that are
/// already floats (`1.5`, `1e-3`) are left alone.
fn float_literals(expression: &str) -> String {
    let bytes = expression.as_bytes();
    let mut rewritten = String::with_capacity(expression.len() + 8);
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        let attached = i > 0
            && (bytes[i - 1].is_ascii_alphanumeric() || matches!(bytes[i - 1], b'_' | b'.'));
        if !bytes[i].is_ascii_digit() || attached {
            i += 1;
            continue;
        }

        i = skip_digits(bytes, i);
        let mut float = false;
        if bytes.get(i) == Some(&b'.') {
            float = true;
            i = skip_digits(bytes, i + 1);
        }
        if let Some(end) = exponent_end(bytes, i) {
            float = true;
            i = end;
        }

        let followed = bytes
            .get(i)
            .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_');
        if !float && !followed {
            rewritten.push_str(&expression[copied..i]);
            rewritten.push_str(".0");
            copied = i;
        }
    }

    rewritten.push_str(&expression[copied..]);
    rewritten
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    i
}

/// Returns the end of an exponent suffix like `e-5` that starts at `i`.
fn exponent_end(bytes: &[u8], i: usize) -> Option<usize> {
    if !matches!(bytes.get(i), Some(b'e' | b'E')) {
        return None;
    }
    let digits = if matches!(bytes.get(i + 1), Some(b'+' | b'-')) {
        i + 2
    } else {
        i + 1
    };
    bytes
        .get(digits)
        .is_some_and(u8::is_ascii_digit)
        .then(|| skip_digits(bytes, digits))
}

fn parse(expression: &str) -> Result<Node, ExprError> {
    build_operator_tree(&float_literals(expression)).map_err(|error| ExprError::Parse {
        expression: expression.to_owned(),
        message: error.to_string(),
    })
}

/// Builds a one-argument math function for the context.
fn unary(f: fn(f64) -> f64) -> Function {
    Function::new(move |argument: &Value| -> EvalexprResult<Value> {
        Ok(Value::Float(f(argument.as_number()?)))
    })
}

fn context(bindings: &Bindings) -> EvalexprResult<HashMapContext> {
    let mut context = HashMapContext::new();

    for (name, f) in [
        ("sin", f64::sin as fn(f64) -> f64),
        ("cos", f64::cos),
        ("tan", f64::tan),
        ("asin", f64::asin),
        ("acos", f64::acos),
        ("atan", f64::atan),
        ("sinh", f64::sinh),
        ("cosh", f64::cosh),
        ("tanh", f64::tanh),
        ("exp", f64::exp),
        ("ln", f64::ln),
        ("log", f64::ln),
        ("log10", f64::log10),
        ("sqrt", f64::sqrt),
        ("cbrt", f64::cbrt),
        ("abs", f64::abs),
    ] {
        context.set_function(name.to_owned(), unary(f))?;
    }

    context.set_value("pi".to_owned(), Value::Float(consts::PI))?;
    context.set_value("e".to_owned(), Value::Float(consts::E))?;
    for (name, &value) in bindings {
        context.set_value(name.clone(), Value::Float(value))?;
    }
    Ok(context)
}

impl ExpressionEvaluator for EvalexprEvaluator {
    type Error = ExprError;

    fn validate(&self, expression: &str) -> Result<(), Self::Error> {
        parse(expression).map(|_| ())
    }

    fn evaluate(&self, expression: &str, bindings: &Bindings) -> Result<f64, Self::Error> {
        let node = parse(expression)?;

        context(bindings)
            .and_then(|context| node.eval_number_with_context(&context))
            .map_err(|error| ExprError::Evaluation {
                expression: expression.to_owned(),
                message: error.to_string(),
            })
    }

    fn differentiate(&self, _expression: &str, _variable: &str) -> Result<String, Self::Error> {
        Err(ExprError::Unsupported {
            operation: "symbolic differentiation",
        })
    }
}
