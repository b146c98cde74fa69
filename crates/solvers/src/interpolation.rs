//! Cubic interpolation between the samples of a trajectory.
//!
//! On each segment `[x_i, x_{i+1}]` a [`CubicSpline`] evaluates
//!
//! ```text
//! p_i(x) = y_i + s_i·dx + a_i·dx² + b_i·dx³,   dx = x - x_i
//! ```
//!
//! where `y_i` and `s_i` are the value and slope at node `i`, and `a_i`, `b_i`
//! make `p_i` hit the value and slope at node `i + 1`. Points outside the
//! nodes extrapolate with the nearest end segment.
//!
//! Slopes come either from the caller ([`CubicSpline::hermite`]), from the
//! ODE that produced the samples ([`CubicSpline::from_solution`]), or from
//! requiring a continuous second derivative ([`CubicSpline::natural`]).
//!
//! # Example
//!
//! ```
//! use stepwise_solvers::{
//!     interpolation::CubicSpline,
//!     transient::{Config, rk4},
//! };
//!
//! let decay = |_t: f64, y: &f64| -y;
//! let config = Config::new(0.1, 20).unwrap();
//! let solution = rk4::solve_unobserved(&decay, 0.0, 1.0, &config);
//!
//! let spline = CubicSpline::from_solution(&decay, &solution).unwrap();
//! assert!((spline.eval(0.55) - (-0.55_f64).exp()).abs() < 1e-5);
//! ```

use stepwise_core::OdeProblem;
use thiserror::Error;

use crate::transient::Solution;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InterpError {
    #[error("at least two nodes are required, got {0}")]
    TooFewNodes(usize),

    #[error("expected {expected} values per node, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("nodes must be finite and strictly increasing")]
    Nodes,
}

/// A piecewise cubic through `(x_i, y_i)` with slope `s_i` at each node.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    nodes: Vec<f64>,
    values: Vec<f64>,
    slopes: Vec<f64>,
    quadratic: Vec<f64>,
    cubic: Vec<f64>,
}

impl CubicSpline {
    /// Builds a spline from node positions, values, and slopes.
    ///
    /// # Errors
    ///
    /// Fails if there are fewer than two nodes, if the three inputs differ in
    /// length, or if the nodes are not finite and strictly increasing.
    pub fn hermite(
        nodes: Vec<f64>,
        values: Vec<f64>,
        slopes: Vec<f64>,
    ) -> Result<Self, InterpError> {
        validate(&nodes, &values)?;
        if slopes.len() != nodes.len() {
            return Err(InterpError::LengthMismatch {
                expected: nodes.len(),
                found: slopes.len(),
            });
        }

        let (quadratic, cubic): (Vec<f64>, Vec<f64>) = nodes
            .windows(2)
            .zip(values.windows(2))
            .zip(slopes.windows(2))
            .map(|((x, y), s)| {
                let dx = x[1] - x[0];
                let secant = (y[1] - y[0]) / dx;
                (
                    (3.0 * secant - s[1] - 2.0 * s[0]) / dx,
                    (s[1] + s[0] - 2.0 * secant) / (dx * dx),
                )
            })
            .unzip();

        Ok(Self {
            nodes,
            values,
            slopes,
            quadratic,
            cubic,
        })
    }

    /// Builds the classic cubic spline through `(nodes, values)`.
    ///
    /// The slopes are chosen so the second derivative is continuous at every
    /// interior node and zero at both ends.
    ///
    /// # Errors
    ///
    /// Same conditions as [`CubicSpline::hermite`].
    pub fn natural(nodes: Vec<f64>, values: Vec<f64>) -> Result<Self, InterpError> {
        validate(&nodes, &values)?;
        let slopes = natural_slopes(&nodes, &values);
        Self::hermite(nodes, values, slopes)
    }

    /// Builds a spline through a scalar trajectory, taking each slope from
    /// the ODE itself: `s_i = f(t_i, y_i)`.
    ///
    /// # Errors
    ///
    /// Fails if the solution holds fewer than two samples.
    pub fn from_solution<P>(problem: &P, solution: &Solution<f64>) -> Result<Self, InterpError>
    where
        P: OdeProblem<f64>,
    {
        let slopes = solution
            .history
            .iter()
            .map(|sample| problem.derivative(sample.time, &sample.state))
            .collect();

        Self::hermite(
            solution.times().collect(),
            solution.states().copied().collect(),
            slopes,
        )
    }

    /// Evaluates the spline at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        // Last node at or left of `x`, kept inside the segment range.
        let i = self
            .nodes
            .partition_point(|&node| node <= x)
            .saturating_sub(1)
            .min(self.nodes.len() - 2);

        let dx = x - self.nodes[i];
        self.values[i] + dx * (self.slopes[i] + dx * (self.quadratic[i] + dx * self.cubic[i]))
    }

    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    pub fn slopes(&self) -> &[f64] {
        &self.slopes
    }
}

fn validate(nodes: &[f64], values: &[f64]) -> Result<(), InterpError> {
    if nodes.len() < 2 {
        return Err(InterpError::TooFewNodes(nodes.len()));
    }
    if values.len() != nodes.len() {
        return Err(InterpError::LengthMismatch {
            expected: nodes.len(),
            found: values.len(),
        });
    }
    if nodes.iter().any(|x| !x.is_finite()) || nodes.windows(2).any(|x| x[1] <= x[0]) {
        return Err(InterpError::Nodes);
    }
    Ok(())
}

/// Slopes of the natural cubic spline, from the tridiagonal system
///
/// ```text
/// 2 s_0 + s_1                                 = q_0
/// h_i s_{i-1} + 2(h_{i-1} + h_i) s_i + h_{i-1} s_{i+1} = q_i h_{i-1} + q_{i-1} h_i
/// s_{n-2} + 2 s_{n-1}                         = q_{n-2}
/// ```
///
/// with `h_i = x_{i+1} - x_i` and `q_i = 3 (y_{i+1} - y_i) / h_i`.
fn natural_slopes(nodes: &[f64], values: &[f64]) -> Vec<f64> {
    let n = nodes.len();
    let h: Vec<f64> = nodes.windows(2).map(|x| x[1] - x[0]).collect();
    let q: Vec<f64> = values
        .windows(2)
        .zip(&h)
        .map(|(y, h)| 3.0 * (y[1] - y[0]) / h)
        .collect();

    let mut lower = vec![0.0; n];
    let mut diag = vec![2.0; n];
    let mut upper = vec![0.0; n];
    let mut rhs = vec![0.0; n];

    upper[0] = 1.0;
    rhs[0] = q[0];
    for i in 1..n - 1 {
        lower[i] = h[i];
        diag[i] = 2.0 * (h[i - 1] + h[i]);
        upper[i] = h[i - 1];
        rhs[i] = q[i] * h[i - 1] + q[i - 1] * h[i];
    }
    lower[n - 1] = 1.0;
    rhs[n - 1] = q[n - 2];

    solve_tridiagonal(&lower, &diag, &upper, rhs)
}

/// Thomas algorithm. The system must be diagonally dominant, which the
/// natural spline system always is.
fn solve_tridiagonal(lower: &[f64], diag: &[f64], upper: &[f64], mut rhs: Vec<f64>) -> Vec<f64> {
    let n = diag.len();
    let mut modified_upper = vec![0.0; n];

    modified_upper[0] = upper[0] / diag[0];
    rhs[0] /= diag[0];
    for i in 1..n {
        let pivot = diag[i] - lower[i] * modified_upper[i - 1];
        modified_upper[i] = upper[i] / pivot;
        rhs[i] = (rhs[i] - lower[i] * rhs[i - 1]) / pivot;
    }

    for i in (0..n - 1).rev() {
        rhs[i] -= modified_upper[i] * rhs[i + 1];
    }
    rhs
}
