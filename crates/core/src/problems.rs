pub mod ode;
pub mod second_order;

pub use ode::OdeProblem;
pub use second_order::SecondOrderProblem;
