use std::fmt::Debug;

use log::{Level, log, log_enabled};
use stepwise_core::Observer;
use stepwise_solvers::transient::Event;

/// An observer that reports driver events through the [`log`] facade.
///
/// Nothing is printed unless the application installs a logger. Records are
/// emitted under the `stepwise` target at the configured level.
///
/// # Example
///
/// ```
/// use log::Level;
/// use stepwise_observers::LogObserver;
/// use stepwise_solvers::transient::{Config, rk4};
///
/// let config = Config::new(0.01, 1000).unwrap();
/// let observer = LogObserver::new(Level::Debug).every(100);
///
/// let solution = rk4::solve(&|_t: f64, y: &f64| -y, 0.0, 1.0, &config, observer);
/// assert_eq!(solution.steps, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
    every: usize,
}

impl LogObserver {
    /// Creates an observer that logs every event at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level, every: 1 }
    }

    /// Logs only events whose step is a multiple of `every`.
    ///
    /// A value of zero is treated as one.
    #[must_use]
    pub fn every(mut self, every: usize) -> Self {
        self.every = every.max(1);
        self
    }
}

impl<S, A> Observer<Event<S>, A> for LogObserver
where
    S: Debug,
{
    fn observe(&mut self, event: &Event<S>) -> Option<A> {
        if event.step % self.every == 0 && log_enabled!(target: "stepwise", self.level) {
            log!(
                target: "stepwise",
                self.level,
                "step {} t={}: {:?}",
                event.step,
                event.sample.time,
                event.sample.state
            );
        }
        None
    }
}
