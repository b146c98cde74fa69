//! Forward Euler stepper for first-order ODE problems.
//!
//! Steps a state forward with explicit Euler:
//!
//! ```text
//! y_{n+1} = y_n + dt * f(t_n, y_n)
//! ```
//!
//! First order: the global error shrinks linearly with `dt`. On oscillatory
//! problems the energy grows every step.
//!
//! # Example
//!
//! ```
//! use stepwise_solvers::transient::euler;
//!
//! let decay = |_t: f64, y: &f64| -y;
//! let next = euler::step(&decay, 0.0, &1.0, 0.1);
//!
//! assert!((next - 0.9).abs() < 1e-15);
//! ```

use stepwise_core::{Observer, OdeProblem, StepIntegrable};

use super::{
    Action, Config, ConfigError, Event, Solution,
    drive::drive,
    grid::{Explicit, Grid, Uniform},
};

/// Advances `state` from `t` by one forward Euler step of size `dt`.
///
/// Evaluates the derivative exactly once, at `(t, state)`.
pub fn step<S, P>(problem: &P, t: f64, state: &S, dt: f64) -> S
where
    S: StepIntegrable,
    P: OdeProblem<S>,
{
    let derivative = problem.derivative(t, state);
    state.step(&derivative, dt)
}

/// Integrates an ODE problem using forward Euler.
///
/// # Algorithm
///
/// 1. Record the initial sample at `t0` and emit it as step 0.
/// 2. For each step:
///    - Compute the derivative at the latest sample.
///    - Step the state forward: `state + derivative * dt`.
///    - Record the new sample and emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full history.
pub fn solve<S, P, Obs>(
    problem: &P,
    t0: f64,
    initial: S,
    config: &Config,
    observer: Obs,
) -> Solution<S>
where
    S: StepIntegrable + Clone,
    P: OdeProblem<S>,
    Obs: Observer<Event<S>, Action>,
{
    integrate(problem, &Uniform::new(t0, config), initial, observer)
}

/// Integrates an ODE problem using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
pub fn solve_unobserved<S, P>(problem: &P, t0: f64, initial: S, config: &Config) -> Solution<S>
where
    S: StepIntegrable + Clone,
    P: OdeProblem<S>,
{
    solve(problem, t0, initial, config, ())
}

/// Integrates an ODE problem using forward Euler over the given `times`.
///
/// The first entry of `times` is the initial time. Each step uses the spacing
/// to the next entry, so the grid may be non-uniform.
///
/// # Errors
///
/// Returns [`ConfigError::Times`] if `times` is empty, not finite, or not
/// strictly increasing.
pub fn solve_on<S, P, Obs>(
    problem: &P,
    times: &[f64],
    initial: S,
    observer: Obs,
) -> Result<Solution<S>, ConfigError>
where
    S: StepIntegrable + Clone,
    P: OdeProblem<S>,
    Obs: Observer<Event<S>, Action>,
{
    let grid = Explicit::new(times)?;
    Ok(integrate(problem, &grid, initial, observer))
}

fn integrate<S, P, G, Obs>(problem: &P, grid: &G, initial: S, observer: Obs) -> Solution<S>
where
    S: StepIntegrable + Clone,
    P: OdeProblem<S>,
    G: Grid,
    Obs: Observer<Event<S>, Action>,
{
    drive("euler", grid, initial, observer, |t, _next, dt, state| {
        step(problem, t, state, dt)
    })
}
