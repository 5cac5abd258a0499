use std::fmt;

/// Failure categories shared by every error in the workspace.
///
/// Errors from the solvers and calculators expose a `kind()` method returning
/// one of these, so the surrounding application can decide how to present a
/// failure without matching on each module's error enum.
///
/// Non-convergence is not listed: reaching an iteration cap is reported as
/// solver status data rather than as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The expression could not be parsed.
    Parse,
    /// The function or expression failed while being evaluated.
    Evaluation,
    /// A solver configuration value is out of range.
    InvalidConfig,
    /// Matrix and vector sizes are inconsistent.
    DimensionMismatch,
    /// The system has a zero (or near-zero) pivot or determinant.
    SingularSystem,
    /// An input lies outside the domain of the method.
    Domain,
    /// A division by zero or a non-finite value appeared mid-computation.
    NumericInstability,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Parse => "parse error",
            Self::Evaluation => "evaluation error",
            Self::InvalidConfig => "invalid configuration",
            Self::DimensionMismatch => "dimension mismatch",
            Self::SingularSystem => "singular system",
            Self::Domain => "domain error",
            Self::NumericInstability => "numeric instability",
        };
        f.write_str(name)
    }
}
