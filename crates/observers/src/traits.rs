//! Capability traits for cross-driver observers.
//!
//! These traits abstract over driver-specific event and action types, enabling
//! observers to work generically across different drivers.
//!
//! # Example
//!
//! ```rust
//! use stepwise_core::Observer;
//! use stepwise_observers::traits::{CanStopEarly, HasStep};
//!
//! struct StepBudget {
//!     max_steps: usize,
//! }
//!
//! impl<E: HasStep, A: CanStopEarly> Observer<E, A> for StepBudget {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.step() >= self.max_steps).then(A::stop_early)
//!     }
//! }
//! ```

use stepwise_solvers::transient;

/// An event that carries a step number.
pub trait HasStep {
    /// Returns the step number, with 0 for the initial condition.
    fn step(&self) -> usize;
}

/// An event that carries the simulation time.
pub trait HasTime {
    /// Returns the time of the sample this event reports.
    fn time(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the driver early.
    fn stop_early() -> Self;
}

impl<S> HasStep for transient::Event<S> {
    fn step(&self) -> usize {
        self.step
    }
}

impl<S> HasTime for transient::Event<S> {
    fn time(&self) -> f64 {
        self.sample.time
    }
}

impl CanStopEarly for transient::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
