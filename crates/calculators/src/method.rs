use std::fmt;

/// The calculators offered by the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    Bisection,
    FalsePosition,
    NewtonRaphson,
    Secant,
    OnePoint,
    Graphical,
    Cramer,
    Gauss,
    GaussJordan,
    Jacobi,
    GaussSeidel,
    NewtonInterpolation,
    LagrangeInterpolation,
    SplineInterpolation,
    Trapezoid,
    Simpson,
}

impl Method {
    /// Returns the display name used in calculation logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bisection => "Bisection",
            Self::FalsePosition => "False Position",
            Self::NewtonRaphson => "Newton-Raphson",
            Self::Secant => "Secant",
            Self::OnePoint => "One-Point Iteration",
            Self::Graphical => "Graphical",
            Self::Cramer => "Cramer's Rule",
            Self::Gauss => "Gauss Elimination",
            Self::GaussJordan => "Gauss-Jordan",
            Self::Jacobi => "Jacobi Iteration",
            Self::GaussSeidel => "Gauss-Seidel",
            Self::NewtonInterpolation => "Newton Divided Difference",
            Self::LagrangeInterpolation => "Lagrange Interpolation",
            Self::SplineInterpolation => "Spline Interpolation",
            Self::Trapezoid => "Trapezoidal Rule",
            Self::Simpson => "Simpson's Rule",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
