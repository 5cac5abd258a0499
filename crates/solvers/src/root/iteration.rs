use std::fmt;

/// One pass of a root-finding loop.
///
/// Records are produced in order, one per iteration, and never modified.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iteration {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Method-specific estimate produced by this pass.
    pub estimate: Estimate,
    /// Relative error of the new estimate, in percent.
    pub error: f64,
}

impl Iteration {
    /// Returns the root estimate produced by this pass.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.estimate.x()
    }
}

/// The estimate produced by a single root-finding step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Estimate {
    /// A bracketing step; `left` and `right` are the bounds before the update.
    Bracket {
        left: f64,
        mid: f64,
        right: f64,
        f_mid: f64,
    },

    /// A Newton-Raphson tangent step from `x` to `next`.
    Tangent {
        x: f64,
        fx: f64,
        slope: f64,
        next: f64,
    },

    /// A secant step through `x0` and `x1`.
    Secant { x0: f64, x1: f64, next: f64 },

    /// A fixed-point step `next = g(x)`.
    FixedPoint { x: f64, next: f64 },
}

impl Estimate {
    /// Returns the new root estimate.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Bracket { mid, .. } => *mid,
            Self::Tangent { next, .. }
            | Self::Secant { next, .. }
            | Self::FixedPoint { next, .. } => *next,
        }
    }
}

impl fmt::Display for Iteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}: ", self.iter)?;
        match self.estimate {
            Estimate::Bracket {
                left,
                mid,
                right,
                f_mid,
            } => write!(
                f,
                "xl = {left:.6}, xm = {mid:.6}, xr = {right:.6}, f(xm) = {f_mid:.6}"
            )?,
            Estimate::Tangent { x, fx, slope, next } => write!(
                f,
                "x = {x:.6}, f(x) = {fx:.6}, f'(x) = {slope:.6}, x_new = {next:.6}"
            )?,
            Estimate::Secant { x0, x1, next } => {
                write!(f, "x0 = {x0:.6}, x1 = {x1:.6}, x_new = {next:.6}")?;
            }
            Estimate::FixedPoint { x, next } => write!(f, "x = {x:.6}, g(x) = {next:.6}")?,
        }
        write!(f, ", error = {:.6}%", self.error)
    }
}

/// Returns the relative error between successive estimates, in percent.
///
/// The error is `|new − old| / |new| · 100`. It is zero when both estimates
/// are zero and infinite when only the new estimate is zero.
#[must_use]
pub fn relative_error(old: f64, new: f64) -> f64 {
    let delta = (new - old).abs();
    if new == 0.0 {
        if delta == 0.0 { 0.0 } else { f64::INFINITY }
    } else {
        delta / new.abs() * 100.0
    }
}
