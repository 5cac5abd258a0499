use super::{Iteration, Status};

/// The result of a root-finding run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Latest estimate of the root.
    pub root: f64,
    /// One record per iteration, in order.
    pub iterations: Vec<Iteration>,
}

impl Solution {
    /// A root found before any iteration ran, such as an exact root at a
    /// bracket endpoint.
    pub(super) fn exact(root: f64) -> Self {
        Self {
            status: Status::Converged,
            root,
            iterations: Vec::new(),
        }
    }

    /// Returns the number of iterations performed.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.iterations.len()
    }

    /// Returns the relative error of the last iteration, if any ran.
    #[must_use]
    pub fn error(&self) -> Option<f64> {
        self.iterations.last().map(|iteration| iteration.error)
    }
}
