//! Numerical solvers for numer.
//!
//! Every solver is a synchronous, pure function over its inputs. Working state
//! (iteration counters, scratch matrices) lives in locals, so independent
//! calls can run concurrently without coordination.
//!
//! # Modules
//!
//! - [`root`]: bisection, false position, Newton-Raphson, secant, one-point
//!   iteration, and a graphical scan for bracketing
//! - [`linear`]: Cramer's rule, Gauss and Gauss-Jordan elimination, Jacobi and
//!   Gauss-Seidel iteration
//! - [`interpolate`]: Newton divided differences, Lagrange, natural cubic spline
//! - [`quadrature`]: composite trapezoidal and Simpson's rules
//!
//! Iterative solvers report their progress as structured records and accept an
//! [`Observer`](numer_core::Observer) that can stop them early. Reaching an
//! iteration cap is reported through [`Status`], not as an error.

mod evaluate;
mod point;
mod status;

pub mod interpolate;
pub mod linear;
pub mod quadrature;
pub mod root;

pub use evaluate::EvalError;
pub use point::Point;
pub use status::Status;
