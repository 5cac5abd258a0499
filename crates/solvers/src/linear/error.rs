use thiserror::Error;

use numer_core::ErrorKind;

/// Errors that can occur while building or solving a linear system.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("system has no equations")]
    Empty,

    #[error("{what} has length {found}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("matrix entry ({row}, {column}) is not finite: {value}")]
    NonFiniteEntry {
        row: usize,
        column: usize,
        value: f64,
    },

    #[error("constant {index} is not finite: {value}")]
    NonFiniteConstant { index: usize, value: f64 },

    #[error("initial guess {index} is not finite: {value}")]
    NonFiniteGuess { index: usize, value: f64 },

    #[error("matrix is singular: determinant {determinant} is too close to zero")]
    SingularDeterminant { determinant: f64 },

    #[error("matrix is singular: pivot {pivot} in column {column} is too small")]
    SingularPivot { column: usize, pivot: f64 },

    #[error("determinant overflowed to {value}")]
    NonFiniteDeterminant { value: f64 },

    #[error("solution component {index} is not finite: {value}")]
    NonFiniteResult { index: usize, value: f64 },

    #[error("diagonal entry in row {row} is zero")]
    ZeroDiagonal { row: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl Error {
    /// Returns the failure category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Empty | Self::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            Self::NonFiniteEntry { .. }
            | Self::NonFiniteConstant { .. }
            | Self::NonFiniteGuess { .. } => ErrorKind::Domain,
            Self::SingularDeterminant { .. }
            | Self::SingularPivot { .. }
            | Self::ZeroDiagonal { .. } => ErrorKind::SingularSystem,
            Self::NonFiniteDeterminant { .. } | Self::NonFiniteResult { .. } => {
                ErrorKind::NumericInstability
            }
            Self::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }
}

/// Errors that can occur when validating a linear solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("pivot tolerance must be finite and non-negative")]
    PivotTolerance,

    #[error("max_iters must be at least one")]
    MaxIters,
}
