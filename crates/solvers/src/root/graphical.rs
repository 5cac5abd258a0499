//! Graphical root location by uniform sampling.
//!
//! The scan does not refine anything. It tabulates `f` across a range so a
//! caller can plot it, read off near-roots, and pick sign-change intervals to
//! hand to [`bisection`](super::bisection) or
//! [`false_position`](super::false_position).

use numer_core::Function;

use crate::{Point, evaluate::call};

use super::{Error, bracket::Bounds};

/// Default distance between samples.
pub const DEFAULT_STEP: f64 = 0.1;

/// Default `|f(x)|` threshold for reporting a sample as a root.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

const MAX_SAMPLES: usize = 1_000_000;

/// The tabulated function over a scanned range.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scan {
    /// Every sample with a finite function value, in increasing x.
    pub samples: Vec<Point>,
    /// Sample locations where `|f(x)|` is below the tolerance.
    pub roots: Vec<f64>,
    /// Adjacent sample pairs where `f` changes sign.
    pub sign_changes: Vec<[f64; 2]>,
}

/// Samples `f` on a uniform grid over `range`.
///
/// Grid points are `x_min + i · step` up to and including `x_max`. Points
/// where `f` is non-finite, such as at a pole, are skipped and break any
/// sign change across them.
///
/// # Errors
///
/// Returns an error if the range is non-finite or zero width, if `step` is
/// not finite and positive or would produce an excessive number of samples,
/// or if calling `f` fails.
pub fn scan<F: Function>(
    f: &F,
    range: [f64; 2],
    step: f64,
    tolerance: f64,
) -> Result<Scan, Error> {
    let Bounds { left, right } = Bounds::new(range)?;
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::InvalidStep { step });
    }

    // Absorbs rounding so that `x_max` is kept when the width is a multiple of `step`.
    let intervals = ((right - left) / step + 1e-9).floor();
    #[allow(clippy::cast_precision_loss)]
    if intervals >= MAX_SAMPLES as f64 {
        return Err(Error::InvalidStep { step });
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let intervals = intervals as usize;

    let mut samples = Vec::with_capacity(intervals + 1);
    let mut roots = Vec::new();
    let mut sign_changes = Vec::new();
    let mut previous: Option<Point> = None;

    for i in 0..=intervals {
        #[allow(clippy::cast_precision_loss)]
        let x = (left + i as f64 * step).min(right);
        let y = call(f, x)?;
        if !y.is_finite() {
            previous = None;
            continue;
        }

        let point = Point::new(x, y);
        if y.abs() < tolerance {
            roots.push(x);
        }
        if let Some(prev) = previous
            && prev.y * y < 0.0
        {
            sign_changes.push([prev.x, x]);
        }

        samples.push(point);
        previous = Some(point);
    }

    Ok(Scan {
        samples,
        roots,
        sign_changes,
    })
}

/// Samples `f` with [`DEFAULT_STEP`] and [`DEFAULT_TOLERANCE`].
///
/// # Errors
///
/// See [`scan`].
pub fn scan_default<F: Function>(f: &F, range: [f64; 2]) -> Result<Scan, Error> {
    scan(f, range, DEFAULT_STEP, DEFAULT_TOLERANCE)
}
