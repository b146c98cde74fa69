//! Classic fourth-order Runge-Kutta stepper.
//!
//! ```text
//! k1 = f(t,        y)
//! k2 = f(t + dt/2, y + dt/2 * k1)
//! k3 = f(t + dt/2, y + dt/2 * k2)
//! k4 = f(t + dt,   y + dt * k3)
//!
//! y_{n+1} = y_n + dt/6 * (k1 + 2 k2 + 2 k3 + k4)
//! ```
//!
//! Fourth order: halving `dt` cuts the global error by roughly sixteen.

use stepwise_core::{Observer, OdeProblem, StepIntegrable};

use super::{
    Action, Config, ConfigError, Event, Solution,
    drive::drive,
    grid::{Explicit, Grid, Uniform},
};

/// Advances `state` from `t` by one RK4 step of size `dt`.
///
/// Evaluates the derivative exactly four times, in the order `k1`..`k4`.
/// The intermediate states are never returned.
pub fn step<S, P>(problem: &P, t: f64, state: &S, dt: f64) -> S
where
    S: StepIntegrable,
    P: OdeProblem<S>,
{
    let half = 0.5 * dt;

    let k1 = problem.derivative(t, state);
    let k2 = problem.derivative(t + half, &state.step(&k1, half));
    let k3 = problem.derivative(t + half, &state.step(&k2, half));
    let k4 = problem.derivative(t + dt, &state.step(&k3, dt));

    state.step_weighted(&[(1.0, &k1), (2.0, &k2), (2.0, &k3), (1.0, &k4)], dt / 6.0)
}

/// Integrates an ODE problem using RK4.
///
/// The observer receives an [`Event`] for the initial condition and after each
/// step, and may return [`Action::StopEarly`] to terminate the run.
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

/// Integrates an ODE problem using RK4 without observation.
pub fn solve_unobserved<S, P>(problem: &P, t0: f64, initial: S, config: &Config) -> Solution<S>
where
    S: StepIntegrable + Clone,
    P: OdeProblem<S>,
{
    solve(problem, t0, initial, config, ())
}

/// Integrates an ODE problem using RK4 over the given `times`.
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
    drive("rk4", grid, initial, observer, |t, _next, dt, state| {
        step(problem, t, state, dt)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::transient::Status;

    #[test]
    fn single_step_of_decay() {
        let decay = |_t: f64, y: &f64| -y;
        let next = step(&decay, 0.0, &1.0, 0.1);

        assert_abs_diff_eq!(next, (-0.1_f64).exp(), epsilon = 1e-6);
        assert_abs_diff_eq!(next, 0.904_837, epsilon = 1e-6);
    }

    #[test]
    fn evaluates_derivative_four_times_in_order() {
        let calls = RefCell::new(Vec::new());
        let recording = |t: f64, y: &f64| {
            calls.borrow_mut().push((t, *y));
            -y
        };

        step(&recording, 1.0, &1.0, 0.2);

        let calls = calls.into_inner();
        assert_eq!(calls.len(), 4);

        let k1 = -1.0;
        let k2 = -(1.0 + 0.1 * k1);
        let k3 = -(1.0 + 0.1 * k2);

        assert_relative_eq!(calls[0].0, 1.0);
        assert_relative_eq!(calls[0].1, 1.0);
        assert_relative_eq!(calls[1].0, 1.1);
        assert_relative_eq!(calls[1].1, 1.0 + 0.1 * k1);
        assert_relative_eq!(calls[2].0, 1.1);
        assert_relative_eq!(calls[2].1, 1.0 + 0.1 * k2);
        assert_relative_eq!(calls[3].0, 1.2);
        assert_relative_eq!(calls[3].1, 1.0 + 0.2 * k3);
    }

    #[test]
    fn integrates_polynomial_exactly() {
        // y' = 4t³ has y = t⁴, which RK4 reproduces exactly.
        let quartic = |t: f64, _y: &f64| 4.0 * t.powi(3);
        let config = Config::new(0.5, 4).expect("valid dt");

        let solution = solve_unobserved(&quartic, 0.0, 0.0, &config);

        for sample in &solution.history {
            assert_relative_eq!(sample.state, sample.time.powi(4), epsilon = 1e-12);
        }
    }

    #[test]
    fn harmonic_oscillator_tracks_cosine() {
        let oscillator = |_t: f64, y: &[f64; 2]| [y[1], -y[0]];
        let config = Config::spanning(0.0, std::f64::consts::TAU, 200).expect("valid span");

        let solution = solve_unobserved(&oscillator, 0.0, [1.0, 0.0], &config);

        assert_eq!(solution.status, Status::Complete);
        for sample in &solution.history {
            assert_abs_diff_eq!(sample.state[0], sample.time.cos(), epsilon = 1e-6);
            assert_abs_diff_eq!(sample.state[1], -sample.time.sin(), epsilon = 1e-6);
        }
    }

    #[test]
    fn zero_derivative_leaves_state_unchanged() {
        let still = |_t: f64, y: &Vec<f64>| vec![0.0; y.len()];
        let state = vec![3.0, -0.125, 42.0];

        assert_eq!(step(&still, 0.0, &state, 0.7), state);
    }

    #[test]
    fn observer_can_stop_early() {
        let decay = |_t: f64, y: &f64| -y;
        let config = Config::new(0.1, 50).expect("valid dt");

        let solution = solve(&decay, 0.0, 1.0, &config, |event: &Event<f64>| {
            (event.sample.state < 0.5).then_some(Action::StopEarly)
        });

        // e^{-t} drops below 0.5 just after t = ln 2 ≈ 0.693.
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 7);
        assert!(solution.history.last().unwrap().state < 0.5);
    }

    #[test]
    fn non_uniform_grid_matches_repeated_steps() {
        let forced = |t: f64, y: &f64| t.sin() - y;
        let times = [0.0, 0.2, 0.25, 0.7, 1.0, 1.6];
        let solution = solve_on(&forced, &times, 0.5, ()).expect("valid times");

        let mut y = 0.5;
        for (pair, sample) in times.windows(2).zip(solution.history.iter().skip(1)) {
            y = step(&forced, pair[0], &y, pair[1] - pair[0]);
            assert_eq!(sample.time, pair[1]);
            assert_eq!(sample.state, y);
        }
    }

    #[test]
    fn stages_land_on_grid_times() {
        let seen = RefCell::new(Vec::new());
        let recording = |t: f64, y: &f64| {
            seen.borrow_mut().push(t);
            -y
        };
        let times = [1.0, 1.5, 1.75];

        let solution = solve_on(&recording, &times, 1.0, ()).expect("valid times");

        // k1 of each step sits on a grid time and k4 on the next one.
        let seen = seen.into_inner();
        assert_eq!(seen.len(), 8);
        let grid: Vec<f64> = solution.times().collect();
        assert_eq!(seen[0], grid[0]);
        assert_eq!(seen[3], grid[1]);
        assert_eq!(seen[4], grid[1]);
        assert_eq!(seen[7], grid[2]);
    }
}
