//! Core traits and types for the stepwise integrators.
//!
//! This crate defines the shared abstractions that steppers, drivers, and
//! observers build on:
//!
//! - [`StepIntegrable`] — a state that can be advanced by a derivative
//! - [`OdeProblem`] — a first-order system `y' = f(t, y)`
//! - [`SecondOrderProblem`] — a second-order system `r'' = a(t, r)`
//! - [`Phase`] — a position/velocity pair for second-order systems
//! - [`Observer`] — receives driver events and optionally returns control actions

mod observer;
mod phase;
mod problems;
mod step;

pub use observer::Observer;
pub use phase::Phase;
pub use problems::{OdeProblem, SecondOrderProblem};
pub use step::{DerivativeOf, StepIntegrable};
