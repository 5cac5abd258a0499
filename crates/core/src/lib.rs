//! Core traits and types for numer.
//!
//! This crate defines the shared abstractions that the solvers and calculators
//! build on:
//!
//! - [`Function`]: a fallible real-valued function of one real variable
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`ExpressionEvaluator`]: the seam to an external expression engine
//! - [`ExprFunction`]: adapts an evaluator and an expression into a [`Function`]
//! - [`ErrorKind`]: the failure categories every error in the workspace maps to

mod expression;
mod function;
mod kind;
mod observer;

pub use expression::{Bindings, ExprFunction, ExpressionEvaluator};
pub use function::Function;
pub use kind::ErrorKind;
pub use observer::Observer;
