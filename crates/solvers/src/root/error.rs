use thiserror::Error;

use numer_core::ErrorKind;

use crate::EvalError;

use super::{BracketError, ConfigError};

/// Errors that can occur while finding a root.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("no sign change in bracket: f({left}) = {f_left}, f({right}) = {f_right}")]
    NoSignChange {
        left: f64,
        right: f64,
        f_left: f64,
        f_right: f64,
    },

    #[error("initial estimate is not finite: {value}")]
    NonFiniteGuess { value: f64 },

    #[error("scan step must be finite, positive, and yield a bounded grid: {step}")]
    InvalidStep { step: f64 },

    #[error("derivative is zero at x = {x}")]
    ZeroDerivative { x: f64 },

    #[error("secant is flat: f({x0}) = f({x1}) = {fx}")]
    FlatSecant { x0: f64, x1: f64, fx: f64 },

    #[error("step from x = {x} produced non-finite estimate {next}")]
    NonFiniteStep { x: f64, next: f64 },

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Returns the failure category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidBracket(_)
            | Self::NoSignChange { .. }
            | Self::NonFiniteGuess { .. }
            | Self::InvalidStep { .. } => ErrorKind::Domain,
            Self::InvalidConfig(_) => ErrorKind::InvalidConfig,
            Self::ZeroDerivative { .. } | Self::FlatSecant { .. } | Self::NonFiniteStep { .. } => {
                ErrorKind::NumericInstability
            }
            Self::Eval(error) => error.kind(),
        }
    }
}
