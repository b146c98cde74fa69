use crate::{DerivativeOf, StepIntegrable};

/// Defines a first-order ODE problem `dy/dt = f(t, y)`.
///
/// The derivative must be a pure function of its arguments: steppers may
/// evaluate it several times per step at intermediate states and assume
/// nothing else changes between calls.
///
/// Any closure `Fn(f64, &S) -> S::Derivative` is an `OdeProblem<S>`, so most
/// callers never implement this trait by hand.
pub trait OdeProblem<S: StepIntegrable> {
    /// Returns the rate of change of `state` at time `t`.
    fn derivative(&self, t: f64, state: &S) -> DerivativeOf<S>;
}

impl<S, F> OdeProblem<S> for F
where
    S: StepIntegrable,
    F: Fn(f64, &S) -> DerivativeOf<S>,
{
    fn derivative(&self, t: f64, state: &S) -> DerivativeOf<S> {
        self(t, state)
    }
}
