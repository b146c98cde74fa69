use stepwise_core::Observer;

use crate::traits::{CanStopEarly, HasTime};

/// An observer that stops a run once the simulation time reaches a threshold.
///
/// Useful when the step count was chosen generously and the caller only needs
/// the trajectory up to a certain time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAtTime {
    time: f64,
}

impl StopAtTime {
    /// Creates an observer that stops at the first sample with `t >= time`.
    #[must_use]
    pub fn new(time: f64) -> Self {
        Self { time }
    }
}

impl<E, A> Observer<E, A> for StopAtTime
where
    E: HasTime,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.time() >= self.time).then(A::stop_early)
    }
}
