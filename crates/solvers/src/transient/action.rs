/// Control actions supported by the transient drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the driver early and return the solution so far.
    StopEarly,
}
