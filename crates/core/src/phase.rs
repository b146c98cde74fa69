/// The phase-space state of a second-order system.
///
/// Second-order drivers record a `Phase` at every grid time so callers can
/// compute quantities such as kinetic plus potential energy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Phase<P, V> {
    pub position: P,
    pub velocity: V,
}

impl<P, V> Phase<P, V> {
    /// Creates a new phase from a position and velocity.
    pub fn new(position: P, velocity: V) -> Self {
        Self { position, velocity }
    }

    /// Splits the phase into its `(position, velocity)` parts.
    pub fn into_parts(self) -> (P, V) {
        (self.position, self.velocity)
    }
}

impl<P, V> From<(P, V)> for Phase<P, V> {
    fn from((position, velocity): (P, V)) -> Self {
        Self { position, velocity }
    }
}
