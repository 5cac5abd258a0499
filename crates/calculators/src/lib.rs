//! Calculator entry points for numer.
//!
//! A [`Calculator`] pairs an [`ExpressionEvaluator`](numer_core::ExpressionEvaluator)
//! with an optional [`CalculationLogger`]. Each method takes equation text in
//! `x` (or a prepared linear system or point set), runs one solver from
//! `numer-solvers`, and returns a [`Calculation`]: the answer, the solver
//! status, the structured per-step records, and a display trace.
//!
//! ```
//! # #[cfg(feature = "evalexpr")] {
//! use numer_calculators::{Answer, Calculator, EvalexprEvaluator};
//! use numer_solvers::root::Config;
//!
//! let evaluator = EvalexprEvaluator::new();
//! let calculation = Calculator::new(&evaluator)
//!     .bisection("x^2 - 2", [1.0, 2.0], &Config::default())
//!     .unwrap();
//!
//! let Answer::Scalar(root) = calculation.result else { unreachable!() };
//! assert!((root - 2.0_f64.sqrt()).abs() < 1e-4);
//! # }
//! ```
//!
//! Successful calculations are reported to the logger once. Logger failures
//! are logged through the `log` facade and never fail the calculation.

mod calculation;
mod calculator;
mod error;
mod interpolate;
mod linear;
mod logger;
mod method;
mod quadrature;
mod root;

#[cfg(feature = "evalexpr")]
mod evaluator;

#[cfg(test)]
mod testing;

pub use calculation::{Answer, Calculation};
pub use calculator::{Calculator, VARIABLE};
pub use error::Error;
pub use logger::{CalculationLog, CalculationLogger, LogError};
pub use method::Method;

#[cfg(feature = "evalexpr")]
pub use evaluator::{EvalexprEvaluator, ExprError};
