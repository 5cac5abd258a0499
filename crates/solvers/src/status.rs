/// Indicates how an iterative solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// The iterate became non-finite; the last finite iterate is reported.
    Diverged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Status {
    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn is_converged(self) -> bool {
        self == Self::Converged
    }
}
