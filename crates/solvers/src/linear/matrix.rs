use std::fmt;

use super::Error;

/// A square matrix of finite entries stored row-major.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    size: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, if any row's length differs
    /// from the number of rows, or if any entry is non-finite.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, Error> {
        let size = rows.len();
        if size == 0 {
            return Err(Error::Empty);
        }

        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(Error::DimensionMismatch {
                    what: "matrix row",
                    expected: size,
                    found: values.len(),
                });
            }
            for (column, &value) in values.iter().enumerate() {
                if !value.is_finite() {
                    return Err(Error::NonFiniteEntry { row, column, value });
                }
            }
            data.extend_from_slice(values);
        }

        Ok(Self { size, data })
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the entry at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> f64 {
        assert!(row < self.size && column < self.size, "index out of bounds");
        self.data[row * self.size + column]
    }

    /// Returns one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.size..(row + 1) * self.size]
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.size)
    }

    /// Returns a copy with column `column` replaced by `values`.
    ///
    /// `values` must have one entry per row; callers pass a validated
    /// constants vector.
    #[must_use]
    pub(super) fn with_column(&self, column: usize, values: &[f64]) -> Self {
        let mut replaced = self.clone();
        for (row, &value) in values.iter().enumerate() {
            replaced.data[row * self.size + column] = value;
        }
        replaced
    }

    /// Returns the largest magnitude in `column`.
    pub(super) fn column_max_abs(&self, column: usize) -> f64 {
        self.rows().map(|row| row[column].abs()).fold(0.0, f64::max)
    }

    /// Multiplies the matrix by a vector of matching length.
    pub(super) fn mul_vec(&self, x: &[f64]) -> Vec<f64> {
        self.rows()
            .map(|row| row.iter().zip(x).map(|(a, x)| a * x).sum())
            .collect()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " | ")?;
                }
                write!(f, "{value:.3}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn builds_from_nested_rows() {
        let matrix = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).expect("valid matrix");

        assert_eq!(matrix.size(), 2);
        assert_relative_eq!(matrix.get(1, 0), 3.0);
        assert_eq!(matrix.row(0), &[1.0, 2.0]);
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);

        assert_eq!(
            result,
            Err(Error::DimensionMismatch {
                what: "matrix row",
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn rejects_non_square_and_empty() {
        assert!(matches!(
            Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]),
            Err(Error::DimensionMismatch { .. })
        ));
        assert_eq!(Matrix::from_rows::<[f64; 0]>(&[]), Err(Error::Empty));
    }

    #[test]
    fn rejects_non_finite_entry() {
        let result = Matrix::from_rows(&[[1.0, f64::NAN], [0.0, 1.0]]);

        assert!(matches!(
            result,
            Err(Error::NonFiniteEntry { row: 0, column: 1, .. })
        ));
    }

    #[test]
    fn replaces_column_and_multiplies() {
        let matrix = Matrix::from_rows(&[[2.0, 1.0], [1.0, 3.0]]).expect("valid matrix");

        let replaced = matrix.with_column(1, &[3.0, 5.0]);
        assert_eq!(replaced.row(1), &[1.0, 5.0]);
        assert_eq!(matrix.mul_vec(&[1.0, 1.0]), vec![3.0, 4.0]);
    }

    #[test]
    fn displays_rows_with_separators() {
        let matrix = Matrix::from_rows(&[[1.0, 0.5], [0.0, 2.0]]).expect("valid matrix");
        assert_eq!(matrix.to_string(), "1.000 | 0.500\n0.000 | 2.000");
    }
}
