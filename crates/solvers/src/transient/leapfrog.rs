//! Leap-frog stepper for second-order problems.
//!
//! Positions live on the grid `t_n` and velocities on the staggered grid
//! `t_n - dt/2`:
//!
//! ```text
//! v_{n+1/2} = v_{n-1/2} + dt * a(t_n, r_n)
//! r_{n+1}   = r_n + dt * v_{n+1/2}
//! ```
//!
//! The method is time-reversible and symplectic. On oscillators the energy
//! oscillates in a band of width `O(dt²)` and does not drift.
//!
//! A run needs a starting half-step velocity, which [`start`] estimates from
//! the initial position and velocity. [`synchronize`] recovers the on-grid
//! velocity from a staggered one.
//!
//! # Example
//!
//! ```
//! use stepwise_solvers::transient::leapfrog;
//!
//! let spring = |_t: f64, x: &f64| -x;
//! let dt = 0.1;
//!
//! let mut position = 1.0;
//! let mut half_velocity = leapfrog::start(&spring, 0.0, &position, &0.0, dt);
//! for n in 0..10 {
//!     (position, half_velocity) = leapfrog::step(&spring, n as f64 * dt, &position, &half_velocity, dt);
//! }
//!
//! assert!((position - 1.0_f64.cos()).abs() < 1e-3);
//! ```

use stepwise_core::{DerivativeOf, Observer, Phase, SecondOrderProblem, StepIntegrable};

use super::{
    Action, Config, ConfigError, Event, Solution,
    drive::drive,
    grid::{Explicit, Grid, Uniform},
};

/// Estimates the staggered velocity `v(t0 - dt/2)` from on-grid values.
///
/// Computes `velocity - dt/2 * a(t0, position)`, so that the first [`step`]
/// produces `v(t0 + dt/2)`.
pub fn start<P, V, Prob>(problem: &Prob, t0: f64, position: &P, velocity: &V, dt: f64) -> V
where
    P: StepIntegrable<Derivative = V>,
    V: StepIntegrable,
    Prob: SecondOrderProblem<P, V>,
{
    let acceleration = problem.acceleration(t0, position);
    stagger(velocity, &acceleration, dt)
}

/// Advances `(position, half_velocity)` from `t` by one leap-frog step.
///
/// `half_velocity` is the velocity at `t - dt/2`. The returned velocity is at
/// `t + dt/2` and the returned position at `t + dt`. Evaluates the
/// acceleration exactly once, at `(t, position)`.
pub fn step<P, V, Prob>(
    problem: &Prob,
    t: f64,
    position: &P,
    half_velocity: &V,
    dt: f64,
) -> (P, V)
where
    P: StepIntegrable<Derivative = V>,
    V: StepIntegrable,
    Prob: SecondOrderProblem<P, V>,
{
    let acceleration = problem.acceleration(t, position);
    kick_drift(position, half_velocity, &acceleration, dt)
}

/// Returns the on-grid velocity `v(t)` given the staggered `v(t - dt/2)`.
pub fn synchronize<P, V, Prob>(
    problem: &Prob,
    t: f64,
    position: &P,
    half_velocity: &V,
    dt: f64,
) -> V
where
    P: StepIntegrable<Derivative = V>,
    V: StepIntegrable,
    Prob: SecondOrderProblem<P, V>,
{
    let acceleration = problem.acceleration(t, position);
    unstagger(half_velocity, &acceleration, dt)
}

/// Moves an on-grid velocity back half a step.
fn stagger<V: StepIntegrable>(velocity: &V, acceleration: &DerivativeOf<V>, dt: f64) -> V {
    velocity.step(acceleration, -0.5 * dt)
}

/// Moves a staggered velocity forward half a step, back onto the grid.
fn unstagger<V: StepIntegrable>(half_velocity: &V, acceleration: &DerivativeOf<V>, dt: f64) -> V {
    half_velocity.step(acceleration, 0.5 * dt)
}

/// Full velocity step centred on the current position, then a full position
/// step with the new velocity.
fn kick_drift<P, V>(position: &P, half_velocity: &V, acceleration: &DerivativeOf<V>, dt: f64) -> (P, V)
where
    P: StepIntegrable<Derivative = V>,
    V: StepIntegrable,
{
    let half_velocity = half_velocity.step(acceleration, dt);
    let position = position.step(&half_velocity, dt);
    (position, half_velocity)
}

/// Integrates a second-order problem using leap-frog.
///
/// The initial [`Phase`] holds on-grid values. Every recorded phase holds the
/// synchronized (on-grid) velocity, so position and velocity refer to the
/// same time.
///
/// The acceleration at each new position is evaluated once, at the next grid
/// time. It completes the synchronized velocity and is reused for the next
/// step.
pub fn solve<P, V, Prob, Obs>(
    problem: &Prob,
    t0: f64,
    initial: Phase<P, V>,
    config: &Config,
    observer: Obs,
) -> Solution<Phase<P, V>>
where
    P: StepIntegrable<Derivative = V> + Clone,
    V: StepIntegrable + Clone,
    Prob: SecondOrderProblem<P, V>,
    Obs: Observer<Event<Phase<P, V>>, Action>,
{
    integrate(problem, &Uniform::new(t0, config), initial, observer)
}

/// Integrates a second-order problem using leap-frog without observation.
pub fn solve_unobserved<P, V, Prob>(
    problem: &Prob,
    t0: f64,
    initial: Phase<P, V>,
    config: &Config,
) -> Solution<Phase<P, V>>
where
    P: StepIntegrable<Derivative = V> + Clone,
    V: StepIntegrable + Clone,
    Prob: SecondOrderProblem<P, V>,
{
    solve(problem, t0, initial, config, ())
}

/// Integrates a second-order problem using leap-frog over the given `times`.
///
/// Each step staggers the synchronized velocity by half of its own step size,
/// so the step size may change between steps.
///
/// # Errors
///
/// Returns [`ConfigError::Times`] if `times` is empty, not finite, or not
/// strictly increasing.
pub fn solve_on<P, V, Prob, Obs>(
    problem: &Prob,
    times: &[f64],
    initial: Phase<P, V>,
    observer: Obs,
) -> Result<Solution<Phase<P, V>>, ConfigError>
where
    P: StepIntegrable<Derivative = V> + Clone,
    V: StepIntegrable + Clone,
    Prob: SecondOrderProblem<P, V>,
    Obs: Observer<Event<Phase<P, V>>, Action>,
{
    let grid = Explicit::new(times)?;
    Ok(integrate(problem, &grid, initial, observer))
}

fn integrate<P, V, Prob, G, Obs>(
    problem: &Prob,
    grid: &G,
    initial: Phase<P, V>,
    observer: Obs,
) -> Solution<Phase<P, V>>
where
    P: StepIntegrable<Derivative = V> + Clone,
    V: StepIntegrable + Clone,
    Prob: SecondOrderProblem<P, V>,
    G: Grid,
    Obs: Observer<Event<Phase<P, V>>, Action>,
{
    let mut acceleration = problem.acceleration(grid.time(0), &initial.position);

    drive("leapfrog", grid, initial, observer, |_t, next, dt, phase| {
        let half_velocity = stagger(&phase.velocity, &acceleration, dt);
        let (position, half_velocity) =
            kick_drift(&phase.position, &half_velocity, &acceleration, dt);

        acceleration = problem.acceleration(next, &position);
        let velocity = unstagger(&half_velocity, &acceleration, dt);

        Phase::new(position, velocity)
    })
}
