/// Indicates how the driver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The state of the system at one grid time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<S> {
    pub time: f64,
    pub state: S,
}

impl<S> Sample<S> {
    /// Creates a new sample from a time and state.
    pub fn new(time: f64, state: S) -> Self {
        Self { time, state }
    }
}

/// The result of a transient integration.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    /// How the driver terminated.
    pub status: Status,

    /// Samples from each step, starting with the initial condition.
    pub history: Vec<Sample<S>>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl<S> Solution<S> {
    /// Returns the grid times in order.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.history.iter().map(|sample| sample.time)
    }

    /// Returns the recorded states in order.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.history.iter().map(|sample| &sample.state)
    }
}
