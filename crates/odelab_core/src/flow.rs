use crate::traits::{Scalar, Steppable, VectorField};
use anyhow::{bail, Result};
use serde::Serialize;

/// Explicit Euler stepper for vector fields.
pub struct EulerFlow<T: Scalar> {
    deriv: Vec<T>,
}

impl<T: Scalar> EulerFlow<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            deriv: vec![T::from_f64(0.0).unwrap(); dim],
        }
    }
}

impl<T: Scalar> Steppable<T> for EulerFlow<T> {
    fn step(&mut self, field: &impl VectorField<T>, t: &mut T, state: &mut [T], dt: T) {
        field.apply(*t, state, &mut self.deriv);
        for i in 0..state.len() {
            state[i] = state[i] + self.deriv[i] * dt;
        }
        *t = *t + dt;
    }
}

/// State history of one flow run.
///
/// `states` is row-major: row i (of `dimension` entries) is the state after
/// i steps, row 0 the initial state. `times.len()` rows in total.
#[derive(Debug, Clone, Serialize)]
pub struct FlowTrajectory {
    pub dimension: usize,
    pub times: Vec<f64>,
    pub states: Vec<f64>,
}

impl FlowTrajectory {
    pub fn rows(&self) -> usize {
        self.times.len()
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.states[i * self.dimension..(i + 1) * self.dimension]
    }
}

/// Advances `field` with explicit Euler for `steps` equal steps of size dt,
/// recording every intermediate state.
pub fn propagate(
    field: &impl VectorField<f64>,
    t0: f64,
    initial_state: &[f64],
    dt: f64,
    steps: usize,
) -> Result<FlowTrajectory> {
    if initial_state.is_empty() {
        bail!("Initial state must have positive dimension.");
    }
    if initial_state.len() != field.dimension() {
        bail!(
            "Initial state has dimension {}, field expects {}.",
            initial_state.len(),
            field.dimension()
        );
    }
    if !dt.is_finite() || dt == 0.0 {
        bail!("Step size dt must be finite and nonzero.");
    }

    let dim = initial_state.len();
    let mut stepper = EulerFlow::new(dim);
    let mut state = initial_state.to_vec();
    let mut t = t0;

    let mut times = Vec::with_capacity(steps + 1);
    let mut states = Vec::with_capacity((steps + 1) * dim);
    times.push(t);
    states.extend_from_slice(&state);

    for _ in 0..steps {
        stepper.step(field, &mut t, &mut state, dt);
        times.push(t);
        states.extend_from_slice(&state);
    }

    Ok(FlowTrajectory {
        dimension: dim,
        times,
        states,
    })
}
