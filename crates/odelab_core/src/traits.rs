use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars by the integrators.
/// Must support float arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// Right-hand side of a scalar first-order ODE dy/dx = f(x, y).
///
/// Any closure `Fn(T, T) -> T` qualifies. A non-finite return value is how
/// an implementation signals that the requested point lies outside its
/// domain; the steppers turn that into an error.
pub trait SlopeFn<T: Scalar> {
    fn slope(&self, x: T, y: T) -> T;
}

impl<T: Scalar, F: Fn(T, T) -> T> SlopeFn<T> for F {
    fn slope(&self, x: T, y: T) -> T {
        self(x, y)
    }
}

/// A vector field dx/dt = F(t, x) over a fixed-dimension state space.
pub trait VectorField<T: Scalar> {
    /// Returns the dimension of the state space.
    fn dimension(&self) -> usize;

    /// Evaluates the field.
    /// t: current time
    /// x: current state
    /// out: buffer to write dx/dt
    fn apply(&self, t: T, x: &[T], out: &mut [T]);
}

/// A trait for steppers that can advance a vector field forward.
pub trait Steppable<T: Scalar> {
    /// Performs one step of size dt.
    /// t: current time (updated after step)
    /// state: current state (updated after step)
    fn step(&mut self, field: &impl VectorField<T>, t: &mut T, state: &mut [T], dt: T);
}
