//! Shared fixtures for the solver integration tests.

use stepwise_core::Phase;

/// Angular frequency of the reference oscillator.
pub const OMEGA: f64 = 2.0;

/// Acceleration of a unit-mass harmonic oscillator: `a = -ω² x`.
pub fn harmonic(_t: f64, x: &f64) -> f64 {
    -OMEGA * OMEGA * x
}

/// Total energy `v²/2 + ω² x²/2` of the reference oscillator.
pub fn energy(phase: &Phase<f64, f64>) -> f64 {
    0.5 * phase.velocity * phase.velocity + 0.5 * OMEGA * OMEGA * phase.position * phase.position
}

/// Largest relative departure from `reference` over a series of energies.
pub fn max_relative_deviation(reference: f64, energies: impl IntoIterator<Item = f64>) -> f64 {
    energies
        .into_iter()
        .map(|e| ((e - reference) / reference).abs())
        .fold(0.0, f64::max)
}
