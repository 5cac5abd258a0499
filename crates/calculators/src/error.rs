use std::error::Error as StdError;

use thiserror::Error;

use numer_core::ErrorKind;
use numer_solvers::{interpolate, linear, quadrature, root};

/// Errors returned by the calculators.
#[derive(Debug, Error)]
pub enum Error {
    /// The equation text could not be parsed.
    #[error("cannot parse `{expression}`")]
    Parse {
        expression: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The evaluator could not differentiate the equation.
    #[error("cannot differentiate `{expression}`")]
    Differentiate {
        expression: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error(transparent)]
    Root(#[from] root::Error),

    #[error(transparent)]
    Linear(#[from] linear::Error),

    #[error(transparent)]
    Interpolate(#[from] interpolate::Error),

    #[error(transparent)]
    Quadrature(#[from] quadrature::Error),
}

impl Error {
    /// Returns the failure category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Differentiate { .. } => ErrorKind::Evaluation,
            Self::Root(error) => error.kind(),
            Self::Linear(error) => error.kind(),
            Self::Interpolate(error) => error.kind(),
            Self::Quadrature(error) => error.kind(),
        }
    }
}
