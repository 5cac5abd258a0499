use crate::Point;

use super::Error;

/// At least two points with finite coordinates and distinct x values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Points(Vec<Point>);

impl Points {
    /// Validates a set of points, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than two points, if any coordinate
    /// is non-finite, or if two points share an x value.
    pub fn new(points: Vec<Point>) -> Result<Self, Error> {
        if points.len() < 2 {
            return Err(Error::TooFewPoints {
                found: points.len(),
            });
        }

        for (index, point) in points.iter().enumerate() {
            if !point.is_finite() {
                return Err(Error::NonFinite {
                    index,
                    x: point.x,
                    y: point.y,
                });
            }
            #[allow(clippy::float_cmp)]
            if points[..index].iter().any(|other| other.x == point.x) {
                return Err(Error::DuplicateX { x: point.x });
            }
        }

        Ok(Self(points))
    }

    /// Validates the points whose flag in `selected` is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SelectionMismatch`] if the lengths differ, otherwise
    /// see [`Points::new`].
    pub fn from_selection(points: &[Point], selected: &[bool]) -> Result<Self, Error> {
        if points.len() != selected.len() {
            return Err(Error::SelectionMismatch {
                points: points.len(),
                flags: selected.len(),
            });
        }

        Self::new(
            points
                .iter()
                .zip(selected)
                .filter_map(|(point, &keep)| keep.then_some(*point))
                .collect(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a valid set has at least two points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }

    pub(super) fn xs(&self) -> Vec<f64> {
        self.0.iter().map(|p| p.x).collect()
    }

    pub(super) fn ys(&self) -> Vec<f64> {
        self.0.iter().map(|p| p.y).collect()
    }

    /// Returns the smallest and largest x.
    pub(super) fn x_range(&self) -> (f64, f64) {
        self.0.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.x), hi.max(p.x))
        })
    }

    /// Returns the points ordered by increasing x.
    pub(super) fn sorted(&self) -> Vec<Point> {
        let mut sorted = self.0.clone();
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
        sorted
    }
}

impl TryFrom<Vec<(f64, f64)>> for Points {
    type Error = Error;

    fn try_from(pairs: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        Self::new(pairs.into_iter().map(Point::from).collect())
    }
}
