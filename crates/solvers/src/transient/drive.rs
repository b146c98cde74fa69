use log::debug;
use stepwise_core::Observer;

use super::{Action, Event, Sample, Solution, Status, grid::Grid};

/// Runs `advance` over every step of `grid`.
///
/// `advance` receives the time of the latest sample, the grid time of the
/// next sample, the step size between them, and the latest state, and returns
/// the next state. The observer sees every sample, including the initial one,
/// and may stop the run after any of them.
pub(crate) fn drive<S, G, Obs, F>(
    method: &str,
    grid: &G,
    initial: S,
    mut observer: Obs,
    mut advance: F,
) -> Solution<S>
where
    S: Clone,
    G: Grid,
    Obs: Observer<Event<S>, Action>,
    F: FnMut(f64, f64, f64, &S) -> S,
{
    let steps = grid.steps();
    debug!("{method}: integrating {steps} steps from t={}", grid.time(0));

    let mut history = Vec::with_capacity(steps + 1);
    history.push(Sample::new(grid.time(0), initial));

    if stop_requested(&mut observer, 0, &history[0]) {
        debug!("{method}: stopped by observer at the initial condition");
        return Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        };
    }

    for step in 1..=steps {
        let current = &history[step - 1];
        let next_time = grid.time(step);
        let next = advance(current.time, next_time, grid.dt(step - 1), &current.state);
        history.push(Sample::new(next_time, next));

        if stop_requested(&mut observer, step, &history[step]) {
            debug!("{method}: stopped by observer after {step} steps");
            return Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            };
        }
    }

    debug!("{method}: completed {steps} steps");
    Solution {
        status: Status::Complete,
        history,
        steps,
    }
}

fn stop_requested<S, Obs>(observer: &mut Obs, step: usize, sample: &Sample<S>) -> bool
where
    S: Clone,
    Obs: Observer<Event<S>, Action>,
{
    let event = Event {
        step,
        sample: sample.clone(),
    };
    matches!(observer.observe(&event), Some(Action::StopEarly))
}
