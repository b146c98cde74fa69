//! Fixed-step time integration.
//!
//! The steppers in this module are pure functions: they take the current time,
//! state, and step size and return the next state without validating their
//! inputs. Non-finite values propagate through the arithmetic.
//!
//! The drivers repeat a stepper over a time grid, record every [`Sample`], and
//! report each one to an [`Observer`](stepwise_core::Observer) as an
//! [`Event`]. `solve` and `solve_unobserved` use the uniform grid
//! `t0 + n·dt` from a [`Config`]. `solve_on` takes the grid times directly,
//! so the step size may change from one step to the next.
//!
//! # Example
//!
//! ```
//! use stepwise_solvers::transient::{Config, rk4};
//!
//! let config = Config::new(0.1, 10).unwrap();
//! let solution = rk4::solve_unobserved(&|_t: f64, y: &f64| -y, 0.0, 1.0, &config);
//!
//! let last = solution.history.last().unwrap();
//! assert!((last.state - (-1.0_f64).exp()).abs() < 1e-6);
//! ```

mod action;
mod config;
mod drive;
mod event;
mod grid;
mod solution;

pub mod euler;
pub mod euler_cromer;
pub mod leapfrog;
pub mod rk4;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::Event;
pub use solution::{Sample, Solution, Status};
