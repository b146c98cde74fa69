//! Reusable observers for the stepwise drivers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the transient drivers in `stepwise-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-driver observers
//!   ([`HasStep`], [`HasTime`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — emits each event through the [`log`] facade
//! - [`StopAtTime`] — stops a run once it reaches a given time
//!
//! [`Observer`]: stepwise_core::Observer
//! [`HasStep`]: traits::HasStep
//! [`HasTime`]: traits::HasTime
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logging;
mod stop;

pub use logging::LogObserver;
pub use stop::StopAtTime;
