use crate::{DerivativeOf, StepIntegrable};

/// Defines a second-order ODE problem `d²r/dt² = a(t, r)`.
///
/// The problem is split into the pair `r' = v`, `v' = a(t, r)`, which is the
/// form the Euler-Cromer and leap-frog steppers work on. The position type
/// `P` is stepped by the velocity type `V`, and `V` is stepped by the
/// acceleration this problem returns.
///
/// Any closure `Fn(f64, &P) -> V::Derivative` is a `SecondOrderProblem<P, V>`.
pub trait SecondOrderProblem<P, V>
where
    P: StepIntegrable<Derivative = V>,
    V: StepIntegrable,
{
    /// Returns the acceleration at `position` and time `t`.
    fn acceleration(&self, t: f64, position: &P) -> DerivativeOf<V>;
}

impl<P, V, F> SecondOrderProblem<P, V> for F
where
    P: StepIntegrable<Derivative = V>,
    V: StepIntegrable,
    F: Fn(f64, &P) -> DerivativeOf<V>,
{
    fn acceleration(&self, t: f64, position: &P) -> DerivativeOf<V> {
        self(t, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Simple pendulum: θ'' = -(g/L)·sin(θ).
    struct Pendulum {
        omega_squared: f64,
    }

    impl SecondOrderProblem<f64, f64> for Pendulum {
        fn acceleration(&self, _t: f64, angle: &f64) -> f64 {
            -self.omega_squared * angle.sin()
        }
    }

    fn evaluate<P: SecondOrderProblem<[f64; 2], [f64; 2]>>(problem: &P, r: [f64; 2]) -> [f64; 2] {
        problem.acceleration(0.0, &r)
    }

    #[test]
    fn struct_problem() {
        let pendulum = Pendulum { omega_squared: 4.0 };
        assert_eq!(pendulum.acceleration(0.0, &0.0), 0.0);
        assert!((pendulum.acceleration(0.0, &std::f64::consts::FRAC_PI_2) + 4.0).abs() < 1e-12);
    }

    #[test]
    fn closure_problem() {
        let spring = |_t: f64, r: &[f64; 2]| [-r[0], -2.0 * r[1]];
        assert_eq!(evaluate(&spring, [1.0, 1.0]), [-1.0, -2.0]);
    }
}
