//! Euler-Cromer (semi-implicit Euler) stepper for second-order problems.
//!
//! For `r'' = a(t, r)` split into `r' = v`, `v' = a(t, r)`:
//!
//! ```text
//! v_{n+1} = v_n + dt * a(t_n, r_n)
//! r_{n+1} = r_n + dt * v_{n+1}
//! ```
//!
//! The velocity update comes first and the position update uses the new
//! velocity. That ordering makes the method symplectic, so on oscillators the
//! energy stays in a band of width `O(dt)` instead of growing every step as
//! it does with forward Euler.

use stepwise_core::{DerivativeOf, Observer, Phase, SecondOrderProblem, StepIntegrable};

use super::{
    Action, Config, ConfigError, Event, Solution,
    drive::drive,
    grid::{Explicit, Grid, Uniform},
};

/// Advances `(position, velocity)` from `t` by one Euler-Cromer step.
///
/// Evaluates the acceleration exactly once, at `(t, position)`.
pub fn step<P, V, Prob>(problem: &Prob, t: f64, position: &P, velocity: &V, dt: f64) -> (P, V)
where
    P: StepIntegrable<Derivative = V>,
    V: StepIntegrable,
    Prob: SecondOrderProblem<P, V>,
{
    let acceleration: DerivativeOf<V> = problem.acceleration(t, position);
    let velocity = velocity.step(&acceleration, dt);
    let position = position.step(&velocity, dt);
    (position, velocity)
}

/// Integrates a second-order problem using Euler-Cromer.
///
/// Each recorded [`Phase`] holds the position and velocity at the same grid
/// time.
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

/// Integrates a second-order problem using Euler-Cromer without observation.
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

/// Integrates a second-order problem using Euler-Cromer over the given `times`.
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
    drive("euler-cromer", grid, initial, observer, |t, _next, dt, phase| {
        let (position, velocity) = step(problem, t, &phase.position, &phase.velocity, dt);
        Phase::new(position, velocity)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::transient::Status;

    fn spring(_t: f64, x: &f64) -> f64 {
        -x
    }

    #[test]
    fn velocity_update_feeds_position_update() {
        let (position, velocity) = step(&spring, 0.0, &1.0, &0.0, 0.1);

        // v1 = 0 + 0.1 * (-1) = -0.1, then r1 = 1 + 0.1 * v1 = 0.99.
        // Position-first ordering would leave r1 at 1.0.
        assert_relative_eq!(velocity, -0.1);
        assert_relative_eq!(position, 0.99);
    }

    #[test]
    fn constant_gravity() {
        let gravity = |_t: f64, _r: &[f64; 2]| [0.0, -10.0];
        let (position, velocity) = step(&gravity, 0.0, &[0.0, 0.0], &[1.0, 0.0], 0.5);

        assert_relative_eq!(velocity[0], 1.0);
        assert_relative_eq!(velocity[1], -5.0);
        assert_relative_eq!(position[0], 0.5);
        assert_relative_eq!(position[1], -2.5);
    }

    #[test]
    fn zero_acceleration_and_velocity_leave_state_unchanged() {
        let free = |_t: f64, _r: &f64| 0.0;
        assert_eq!(step(&free, 0.0, &2.5, &0.0, 10.0), (2.5, 0.0));
    }

    #[test]
    fn driver_records_phase_at_grid_times() {
        let config = Config::new(0.1, 3).expect("valid dt");
        let solution = solve_unobserved(&spring, 0.0, Phase::new(1.0, 0.0), &config);

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.history.len(), 4);

        let first = &solution.history[1];
        assert_relative_eq!(first.time, 0.1);
        assert_relative_eq!(first.state.position, 0.99);
        assert_relative_eq!(first.state.velocity, -0.1);
    }

    #[test]
    fn observer_sees_phase() {
        let config = Config::new(0.1, 100).expect("valid dt");

        let solution = solve(
            &spring,
            0.0,
            Phase::new(1.0, 0.0),
            &config,
            |event: &Event<Phase<f64, f64>>| {
                (event.sample.state.position < 0.0).then_some(Action::StopEarly)
            },
        );

        // The oscillator first crosses zero shortly after t = π/2.
        assert_eq!(solution.status, Status::StoppedByObserver);
        let last = solution.history.last().unwrap();
        assert!(last.time > 1.5 && last.time < 1.8);
    }

    #[test]
    fn non_uniform_grid_matches_repeated_steps() {
        let driven = |t: f64, x: &f64| t.cos() - x;
        let times = [0.0, 0.05, 0.3, 0.35, 0.9];
        let solution =
            solve_on(&driven, &times, Phase::new(1.0, 0.0), ()).expect("valid times");

        let (mut r, mut v) = (1.0, 0.0);
        for (pair, sample) in times.windows(2).zip(solution.history.iter().skip(1)) {
            (r, v) = step(&driven, pair[0], &r, &v, pair[1] - pair[0]);
            assert_eq!(sample.time, pair[1]);
            assert_eq!(sample.state, Phase::new(r, v));
        }
    }
}
