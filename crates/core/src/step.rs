/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait enables the generic steppers to work with the type
/// by stepping it via `derivative * delta`, where the derivative is with
/// respect to the independent variable (usually time).
///
/// Implementations are provided for `f64`, `[f64; N]`, and `Vec<f64>`, each
/// using itself as its own derivative type.
pub trait StepIntegrable: Sized {
    /// The derivative of the type with respect to the independent variable.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    ///
    /// A zero derivative must return a value equal to `self`.
    #[must_use]
    fn step(&self, derivative: &Self::Derivative, delta: f64) -> Self;

    /// Returns the value after stepping with a weighted sum of derivatives.
    ///
    /// Computes `self + delta * Σ cᵢ·dᵢ` for each `(cᵢ, dᵢ)` in `terms`.
    /// Multi-stage methods use this to apply their final combination in a
    /// single update.
    #[must_use]
    fn step_weighted(&self, terms: &[(f64, &Self::Derivative)], delta: f64) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T> = <T as StepIntegrable>::Derivative;

impl StepIntegrable for f64 {
    type Derivative = f64;

    fn step(&self, derivative: &f64, delta: f64) -> Self {
        self + delta * derivative
    }

    fn step_weighted(&self, terms: &[(f64, &f64)], delta: f64) -> Self {
        let sum: f64 = terms.iter().map(|(c, d)| c * *d).sum();
        self + delta * sum
    }
}

impl<const N: usize> StepIntegrable for [f64; N] {
    type Derivative = [f64; N];

    fn step(&self, derivative: &[f64; N], delta: f64) -> Self {
        std::array::from_fn(|i| self[i] + delta * derivative[i])
    }

    fn step_weighted(&self, terms: &[(f64, &[f64; N])], delta: f64) -> Self {
        std::array::from_fn(|i| {
            let sum: f64 = terms.iter().map(|(c, d)| c * d[i]).sum();
            self[i] + delta * sum
        })
    }
}

/// Vectors of mismatched length produce an all-NaN result of the state's
/// length instead of panicking.
impl StepIntegrable for Vec<f64> {
    type Derivative = Vec<f64>;

    fn step(&self, derivative: &Vec<f64>, delta: f64) -> Self {
        if derivative.len() != self.len() {
            return vec![f64::NAN; self.len()];
        }

        self.iter()
            .zip(derivative)
            .map(|(y, d)| y + delta * d)
            .collect()
    }

    fn step_weighted(&self, terms: &[(f64, &Vec<f64>)], delta: f64) -> Self {
        if terms.iter().any(|(_, d)| d.len() != self.len()) {
            return vec![f64::NAN; self.len()];
        }

        self.iter()
            .enumerate()
            .map(|(i, y)| {
                let sum: f64 = terms.iter().map(|(c, d)| c * d[i]).sum();
                y + delta * sum
            })
            .collect()
    }
}
