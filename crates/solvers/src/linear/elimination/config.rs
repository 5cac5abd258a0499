use crate::linear::ConfigError;

/// How elimination chooses the pivot for each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pivoting {
    /// Swap in the row with the largest magnitude in the pivot column.
    #[default]
    Partial,

    /// Always use the diagonal entry, failing if it is unusable.
    Naive,
}

/// Configuration for Gauss and Gauss-Jordan elimination.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EliminationConfig {
    pivoting: Pivoting,
    pivot_tol: f64,
}

impl Default for EliminationConfig {
    fn default() -> Self {
        Self {
            pivoting: Pivoting::Partial,
            pivot_tol: 1e-12,
        }
    }
}

impl EliminationConfig {
    /// Creates a config with the given pivoting strategy and pivot tolerance.
    ///
    /// A pivot in column `k` with `|p| <= pivot_tol · max_i |a_ik|` is
    /// treated as zero, so the test does not depend on the scale of `A`.
    ///
    /// # Errors
    ///
    /// Returns an error if `pivot_tol` is negative or non-finite.
    pub fn new(pivoting: Pivoting, pivot_tol: f64) -> Result<Self, ConfigError> {
        if !pivot_tol.is_finite() || pivot_tol < 0.0 {
            return Err(ConfigError::PivotTolerance);
        }
        Ok(Self {
            pivoting,
            pivot_tol,
        })
    }

    /// Diagonal pivots that fail only on an exact zero.
    #[must_use]
    pub fn naive() -> Self {
        Self {
            pivoting: Pivoting::Naive,
            pivot_tol: 0.0,
        }
    }

    #[must_use]
    pub fn pivoting(&self) -> Pivoting {
        self.pivoting
    }

    #[must_use]
    pub fn pivot_tol(&self) -> f64 {
        self.pivot_tol
    }
}
