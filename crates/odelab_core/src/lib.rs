//! The `odelab_core` crate is the numerical engine behind the odelab demos.
//! It integrates scalar initial-value problems dy/dx = f(x, y) with
//! fixed-step methods and small vector fields with an explicit Euler flow.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `SlopeFn` (scalar
//!   right-hand sides), `VectorField`/`Steppable` (flows).
//! - **Fixed step**: RK4, Tsit5, and Euler steppers with per-run trajectory
//!   and arithmetic-cost accounting.
//! - **Compare**: side-by-side RK4 vs. reference-method runs with timings.
//! - **Systems**: Lorenz, log-forced decay, Newton cooling, exponentials.

pub mod compare;
pub mod error;
pub mod fixed_step;
pub mod flow;
pub mod systems;
pub mod traits;

pub use error::{OdeError, OdeResult};
pub use fixed_step::{integrate, integrate_with, Trajectory};
