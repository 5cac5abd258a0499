use super::{Error, Matrix};

/// A square linear system `A · x = b`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct System {
    matrix: Matrix,
    constants: Vec<f64>,
}

impl System {
    /// Pairs a coefficient matrix with its constants.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of constants differs from the matrix
    /// size or if any constant is non-finite.
    pub fn new(matrix: Matrix, constants: Vec<f64>) -> Result<Self, Error> {
        if constants.len() != matrix.size() {
            return Err(Error::DimensionMismatch {
                what: "constants",
                expected: matrix.size(),
                found: constants.len(),
            });
        }
        if let Some((index, &value)) = constants.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(Error::NonFiniteConstant { index, value });
        }

        Ok(Self { matrix, constants })
    }

    /// Validates rows and constants together.
    ///
    /// # Errors
    ///
    /// See [`Matrix::from_rows`] and [`System::new`].
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R], constants: &[f64]) -> Result<Self, Error> {
        Self::new(Matrix::from_rows(rows)?, constants.to_vec())
    }

    /// Returns the number of unknowns.
    #[must_use]
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    #[must_use]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    #[must_use]
    pub fn constants(&self) -> &[f64] {
        &self.constants
    }

    /// Returns `A · x − b`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` does not have one entry per unknown.
    pub fn residual(&self, x: &[f64]) -> Result<Vec<f64>, Error> {
        self.check_len("solution", x)?;
        Ok(self
            .matrix
            .mul_vec(x)
            .into_iter()
            .zip(&self.constants)
            .map(|(ax, b)| ax - b)
            .collect())
    }

    pub(super) fn check_len(&self, what: &'static str, values: &[f64]) -> Result<(), Error> {
        if values.len() == self.size() {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                what,
                expected: self.size(),
                found: values.len(),
            })
        }
    }
}
