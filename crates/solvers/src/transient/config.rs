use thiserror::Error;

/// Time grid for the transient drivers.
///
/// The grid is `t0 + n·dt` for `n = 0..=steps`, where `t0` is passed to the
/// driver alongside the initial state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    dt: f64,
    steps: usize,
}

/// Errors that can occur when validating a transient driver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("dt must be finite and positive")]
    TimeStep,

    #[error("times must be non-empty, finite, and strictly increasing")]
    Times,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dt: 0.01,
            steps: 100,
        }
    }
}

impl Config {
    /// Creates a new config with a validated step size.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is zero, negative, or non-finite.
    pub fn new(dt: f64, steps: usize) -> Result<Self, ConfigError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::TimeStep);
        }

        Ok(Self { dt, steps })
    }

    /// Creates a config that covers `[t0, t_end]` with `steps` equal steps.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting step size is not finite and positive,
    /// which includes `steps == 0` and `t_end <= t0`.
    pub fn spanning(t0: f64, t_end: f64, steps: usize) -> Result<Self, ConfigError> {
        Self::new((t_end - t0) / steps as f64, steps)
    }

    /// Returns the step size.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of integration steps.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the grid time of `step`, computed without accumulating error.
    #[must_use]
    pub fn time_at(&self, t0: f64, step: usize) -> f64 {
        t0 + step as f64 * self.dt
    }
}
