use std::convert::Infallible;

/// A real-valued function of a single real variable.
///
/// Functions are owned by the caller and invoked by every algorithm that needs
/// `f(x)` or `g(x)`. They must be deterministic, always producing the same
/// result for a given `x`.
///
/// Plain closures `Fn(f64) -> f64` implement this trait with an [`Infallible`]
/// error. Functions backed by an expression engine, which can fail on bad
/// syntax or unbound variables, implement it with their own error type.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Each function defines its own `Error` type to represent evaluation failures.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}
