use thiserror::Error;

use numer_core::ErrorKind;

use crate::linear;

/// Errors that can occur while interpolating.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("at least two points are required, found {found}")]
    TooFewPoints { found: usize },

    #[error("point {index} is not finite: ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },

    #[error("x = {x} appears more than once")]
    DuplicateX { x: f64 },

    #[error("{points} points but {flags} selection flags")]
    SelectionMismatch { points: usize, flags: usize },

    #[error("target x = {x} is not finite")]
    NonFiniteTarget { x: f64 },

    #[error("target x = {x} is outside [{min}, {max}]")]
    OutOfRange { x: f64, min: f64, max: f64 },

    #[error("spline system could not be solved: {0}")]
    Linear(#[from] linear::Error),
}

impl Error {
    /// Returns the failure category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TooFewPoints { .. }
            | Self::NonFinite { .. }
            | Self::DuplicateX { .. }
            | Self::NonFiniteTarget { .. }
            | Self::OutOfRange { .. } => ErrorKind::Domain,
            Self::SelectionMismatch { .. } => ErrorKind::DimensionMismatch,
            Self::Linear(error) => error.kind(),
        }
    }
}
