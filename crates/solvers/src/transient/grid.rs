use super::{Config, ConfigError};

/// The sequence of times a driver visits.
///
/// Sample `n` sits at `time(n)` for `n = 0..=steps()`, and the step leading
/// from sample `n` to sample `n + 1` has size `dt(n)`.
pub(crate) trait Grid {
    fn steps(&self) -> usize;

    fn time(&self, n: usize) -> f64;

    fn dt(&self, n: usize) -> f64;
}

/// The uniform grid `t0 + n·dt` described by a [`Config`].
pub(crate) struct Uniform<'a> {
    t0: f64,
    config: &'a Config,
}

impl<'a> Uniform<'a> {
    pub(crate) fn new(t0: f64, config: &'a Config) -> Self {
        Self { t0, config }
    }
}

impl Grid for Uniform<'_> {
    fn steps(&self) -> usize {
        self.config.steps()
    }

    fn time(&self, n: usize) -> f64 {
        self.config.time_at(self.t0, n)
    }

    fn dt(&self, _n: usize) -> f64 {
        self.config.dt()
    }
}

/// A caller-supplied grid of strictly increasing times.
pub(crate) struct Explicit<'a> {
    times: &'a [f64],
}

impl<'a> Explicit<'a> {
    /// Validates that `times` is non-empty, finite, and strictly increasing.
    pub(crate) fn new(times: &'a [f64]) -> Result<Self, ConfigError> {
        if times.is_empty() || times.iter().any(|t| !t.is_finite()) {
            return Err(ConfigError::Times);
        }
        if times.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(ConfigError::Times);
        }

        Ok(Self { times })
    }
}

impl Grid for Explicit<'_> {
    fn steps(&self) -> usize {
        self.times.len() - 1
    }

    fn time(&self, n: usize) -> f64 {
        self.times[n]
    }

    fn dt(&self, n: usize) -> f64 {
        self.times[n + 1] - self.times[n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn uniform_grid_follows_config() {
        let config = Config::new(0.1, 5).expect("valid dt");
        let grid = Uniform::new(0.3, &config);

        assert_eq!(grid.steps(), 5);
        assert_relative_eq!(grid.time(5), 0.3 + 5.0 * 0.1);
        assert_relative_eq!(grid.dt(3), 0.1);
    }

    #[test]
    fn explicit_grid_uses_differences() {
        let times = [0.0, 0.1, 0.3, 0.7];
        let grid = Explicit::new(&times).expect("valid times");

        assert_eq!(grid.steps(), 3);
        assert_relative_eq!(grid.time(2), 0.3);
        assert_relative_eq!(grid.dt(1), 0.2);
        assert_relative_eq!(grid.dt(2), 0.4);
    }

    #[test]
    fn explicit_grid_rejects_bad_times() {
        let bad: [&[f64]; 4] = [&[], &[0.0, 0.0], &[1.0, 0.5], &[0.0, f64::NAN]];
        for times in bad {
            assert!(matches!(Explicit::new(times), Err(ConfigError::Times)));
        }
    }

    #[test]
    fn single_time_has_no_steps() {
        let grid = Explicit::new(&[2.0]).expect("valid times");
        assert_eq!(grid.steps(), 0);
        assert_relative_eq!(grid.time(0), 2.0);
    }
}
