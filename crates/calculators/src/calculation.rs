use std::fmt;

use numer_solvers::Status;

use crate::Method;

/// The final answer of a calculation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Answer {
    /// A root, an interpolated value, or an integral.
    Scalar(f64),
    /// A solution vector, or the roots found by a scan.
    Vector(Vec<f64>),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "{value:.6}"),
            Self::Vector(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value:.6}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Everything a calculator reports back to its caller.
///
/// `iterations` holds the method's structured records: root-finding
/// iterations, sweeps, row operations, interpolation terms, or quadrature
/// samples. `trace` holds the same steps rendered for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Calculation<I> {
    pub method: Method,
    pub result: Answer,
    pub status: Status,
    pub iterations: Vec<I>,
    pub trace: Vec<String>,
}

impl<I: fmt::Display> Calculation<I> {
    /// Builds a calculation whose trace is the display form of each record.
    pub(crate) fn traced(
        method: Method,
        result: Answer,
        status: Status,
        iterations: Vec<I>,
    ) -> Self {
        let trace = iterations.iter().map(ToString::to_string).collect();
        Self {
            method,
            result,
            status,
            iterations,
            trace,
        }
    }
}

impl<I> Calculation<I> {
    /// Appends a display line after the per-record trace.
    #[must_use]
    pub(crate) fn with_line(mut self, line: impl Into<String>) -> Self {
        self.trace.push(line.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_formats_with_six_decimals() {
        assert_eq!(Answer::Scalar(1.5).to_string(), "1.500000");
        assert_eq!(Answer::Vector(vec![0.8, 1.4]).to_string(), "[0.800000, 1.400000]");
    }

    #[test]
    fn traced_renders_each_record() {
        let calculation = Calculation::traced(
            Method::Trapezoid,
            Answer::Scalar(2.0),
            Status::Converged,
            vec![1, 2],
        )
        .with_line("done");

        assert_eq!(calculation.trace, vec!["1", "2", "done"]);
        assert_eq!(calculation.iterations, vec![1, 2]);
    }
}
