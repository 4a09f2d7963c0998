//! Named right-hand sides used by the demos and tests.

use crate::traits::{SlopeFn, VectorField};

/// Lorenz system:
/// dx/dt = sigma (y - x), dy/dt = rho x - y - x z, dz/dt = x y - beta z.
#[derive(Debug, Clone, Copy)]
pub struct Lorenz {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
}

impl Lorenz {
    /// Classic sigma = 10, beta = 8/3 family with a free rho.
    pub fn new(rho: f64) -> Self {
        Self {
            sigma: 10.0,
            rho,
            beta: 8.0 / 3.0,
        }
    }
}

impl Default for Lorenz {
    fn default() -> Self {
        Self::new(28.0)
    }
}

impl VectorField<f64> for Lorenz {
    fn dimension(&self) -> usize {
        3
    }

    fn apply(&self, _t: f64, x: &[f64], out: &mut [f64]) {
        out[0] = self.sigma * (x[1] - x[0]);
        out[1] = self.rho * x[0] - x[1] - x[0] * x[2];
        out[2] = x[0] * x[1] - self.beta * x[2];
    }
}

/// dy/dx = -y + ln x. Defined only for x > 0; integrating leftward across
/// zero trips the steppers' domain check.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogForced;

impl SlopeFn<f64> for LogForced {
    fn slope(&self, x: f64, y: f64) -> f64 {
        x.ln() - y
    }
}

/// Newton's law of cooling, dT/dt = -k (T - ambient).
#[derive(Debug, Clone, Copy)]
pub struct NewtonCooling {
    pub k: f64,
    pub ambient: f64,
}

impl SlopeFn<f64> for NewtonCooling {
    fn slope(&self, _t: f64, temp: f64) -> f64 {
        -self.k * (temp - self.ambient)
    }
}

/// dy/dt = rate * y. Negative rates decay, positive rates grow.
#[derive(Debug, Clone, Copy)]
pub struct Exponential {
    pub rate: f64,
}

impl SlopeFn<f64> for Exponential {
    fn slope(&self, _t: f64, y: f64) -> f64 {
        self.rate * y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed_step::integrate;

    #[test]
    fn lorenz_derivatives_at_reference_point() {
        let system = Lorenz::new(28.0);
        let mut out = [0.0; 3];
        system.apply(0.0, &[7.5, 22.5, 35.0], &mut out);
        assert!((out[0] - 150.0).abs() < 1e-12);
        assert!((out[1] + 75.0).abs() < 1e-12);
        assert!((out[2] - 75.41666666666667).abs() < 1e-12);
    }

    #[test]
    fn log_forced_slope_infers_f64_from_plain_literals() {
        // No type annotations anywhere: the SlopeFn<f64> impl must pin the
        // literal types on its own.
        let k1 = LogForced.slope(2.0, 1.0);
        assert!((k1 - (2.0_f64.ln() - 1.0)).abs() < 1e-15);

        let traj = integrate(&LogForced, 2.0, 1.0, 0.3, 1).expect("run should succeed");
        let (x1, y1) = traj.last().expect("trajectory is never empty");
        assert!((x1 - 2.3).abs() < 1e-15);
        assert!((y1 - 0.9399205872577153).abs() < 1e-11);
    }

    #[test]
    fn cooling_run_matches_closed_form() {
        // T(t) = s + (T0 - s) e^{-kt} with k = 0.5, s = 50, T0 = 80.
        let model = NewtonCooling {
            k: 0.5,
            ambient: 50.0,
        };
        let traj = integrate(&model, 0.0, 80.0, 0.1, 20).expect("run should succeed");
        let (t, temp) = traj.last().expect("trajectory is never empty");
        assert!((t - 2.0).abs() < 1e-12);
        let exact = 50.0 + 30.0 * (-1.0_f64).exp();
        assert!((temp - exact).abs() < 1e-5);
    }

    #[test]
    fn exponential_decay_never_crosses_zero() {
        let model = Exponential { rate: -5.0 };
        let traj = integrate(&model, 0.0, 1.0, 0.01, 100).expect("run should succeed");
        assert!(traj.ys.iter().all(|&y| y > 0.0));
        let (_, y) = traj.last().expect("trajectory is never empty");
        assert!((y - (-5.0_f64).exp()).abs() < 1e-6);
    }
}
