//! Fixed-step ODE steppers and their trajectory drivers.
//!
//! Every stepper lives in its own module under [`transient`] and exposes a
//! pure `step` function plus drivers that call `step` over a time grid:
//! `solve`/`solve_unobserved` on a uniform grid, `solve_on` on caller-supplied
//! times.
//!
//! - [`transient::euler`] — forward Euler, first order
//! - [`transient::euler_cromer`] — semi-implicit Euler for `r'' = a(t, r)`
//! - [`transient::leapfrog`] — staggered, time-reversible, symplectic
//! - [`transient::rk4`] — classic fourth-order Runge-Kutta
//!
//! [`interpolation`] fills in a recorded trajectory between its samples with
//! cubic splines.

pub mod interpolation;
pub mod transient;
