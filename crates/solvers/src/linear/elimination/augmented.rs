use std::fmt;

use crate::linear::System;

/// The matrix `[A | b]` that elimination works on.
///
/// Built from a validated [`System`], owned and transformed by a single
/// solve, then returned with the result for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AugmentedMatrix {
    size: usize,
    data: Vec<f64>,
}

impl AugmentedMatrix {
    /// Copies the coefficients and constants of `system`.
    #[must_use]
    pub fn new(system: &System) -> Self {
        let size = system.size();
        let mut data = Vec::with_capacity(size * (size + 1));
        for (row, &constant) in system.matrix().rows().zip(system.constants()) {
            data.extend_from_slice(row);
            data.push(constant);
        }
        Self { size, data }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns a row including its trailing constant.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        let width = self.size + 1;
        &self.data[row * width..(row + 1) * width]
    }

    pub(super) fn get(&self, row: usize, column: usize) -> f64 {
        self.data[row * (self.size + 1) + column]
    }

    pub(super) fn constant(&self, row: usize) -> f64 {
        self.get(row, self.size)
    }

    /// Returns the row at or below the diagonal with the largest magnitude in `column`.
    pub(super) fn largest_in_column(&self, column: usize) -> usize {
        (column..self.size)
            .max_by(|&a, &b| {
                self.get(a, column)
                    .abs()
                    .total_cmp(&self.get(b, column).abs())
            })
            .unwrap_or(column)
    }

    pub(super) fn swap(&mut self, first: usize, second: usize) {
        let width = self.size + 1;
        for j in 0..width {
            self.data.swap(first * width + j, second * width + j);
        }
    }

    pub(super) fn scale(&mut self, row: usize, pivot: f64) {
        let width = self.size + 1;
        for value in &mut self.data[row * width..(row + 1) * width] {
            *value /= pivot;
        }
    }

    /// `target -= factor · source`
    pub(super) fn eliminate(&mut self, target: usize, source: usize, factor: f64) {
        let width = self.size + 1;
        for j in 0..width {
            let delta = factor * self.data[source * width + j];
            self.data[target * width + j] -= delta;
        }
    }
}

impl fmt::Display for AugmentedMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size {
            if i > 0 {
                writeln!(f)?;
            }
            let row = self.row(i);
            for (j, value) in row[..self.size].iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:.3}")?;
            }
            write!(f, " | {:.3}", row[self.size])?;
        }
        Ok(())
    }
}
