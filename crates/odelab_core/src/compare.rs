use crate::fixed_step::{integrate_with, Rk4, ScalarStepper, Trajectory, Tsit5};
use crate::traits::SlopeFn;
use anyhow::{bail, Result};
use serde::Serialize;
use std::time::Instant;

/// Timing and cost summary for one method in a side-by-side run.
#[derive(Debug, Clone, Serialize)]
pub struct MethodReport {
    pub method: &'static str,
    pub elapsed_secs: f64,
    pub ops: u64,
    pub final_x: f64,
    pub final_y: f64,
}

/// Both methods' reports plus their full trajectories over the same grid.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub rk4: MethodReport,
    pub reference: MethodReport,
    pub rk4_trajectory: Trajectory<f64>,
    pub reference_trajectory: Trajectory<f64>,
}

/// Runs RK4 and the Tsit5 reference method over the same fixed grid and
/// reports wall-clock time, the per-run arithmetic tally, and final states.
///
/// Each method owns its trajectory and counter, so the two runs cannot
/// interfere with each other.
pub fn compare_methods(
    f: &impl SlopeFn<f64>,
    x0: f64,
    y0: f64,
    h: f64,
    steps: usize,
) -> Result<Comparison> {
    if steps == 0 {
        bail!("Comparison requires at least one integration step.");
    }
    if !h.is_finite() || h == 0.0 {
        bail!("Step size h must be finite and nonzero.");
    }
    if !x0.is_finite() || !y0.is_finite() {
        bail!("Initial condition must be finite.");
    }

    let (rk4_trajectory, rk4) = timed_run(&Rk4, "rk4", f, x0, y0, h, steps)?;
    let (reference_trajectory, reference) = timed_run(&Tsit5, "tsit5", f, x0, y0, h, steps)?;

    Ok(Comparison {
        rk4,
        reference,
        rk4_trajectory,
        reference_trajectory,
    })
}

fn timed_run(
    stepper: &impl ScalarStepper<f64>,
    method: &'static str,
    f: &impl SlopeFn<f64>,
    x0: f64,
    y0: f64,
    h: f64,
    steps: usize,
) -> Result<(Trajectory<f64>, MethodReport)> {
    let start = Instant::now();
    let trajectory = integrate_with(stepper, f, x0, y0, h, steps)?;
    let elapsed_secs = start.elapsed().as_secs_f64();

    let (final_x, final_y) = trajectory.last().unwrap_or((f64::NAN, f64::NAN));
    let report = MethodReport {
        method,
        elapsed_secs,
        ops: trajectory.ops,
        final_x,
        final_y,
    };
    Ok((trajectory, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed_step::{RK4_STEP_COST, TSIT5_STEP_COST};
    use crate::systems::LogForced;

    fn assert_err_contains<T: std::fmt::Debug>(result: Result<T>, needle: &str) {
        let err = result.expect_err("expected error");
        let message = format!("{err}");
        assert!(
            message.contains(needle),
            "expected error to contain \"{needle}\", got \"{message}\""
        );
    }

    #[test]
    fn compare_methods_rejects_invalid_inputs() {
        assert_err_contains(
            compare_methods(&LogForced, 2.0, 1.0, 0.3, 0),
            "at least one integration step",
        );
        assert_err_contains(
            compare_methods(&LogForced, 2.0, 1.0, 0.0, 10),
            "finite and nonzero",
        );
        assert_err_contains(
            compare_methods(&LogForced, f64::NAN, 1.0, 0.3, 10),
            "must be finite",
        );
    }

    #[test]
    fn both_methods_cover_the_same_grid() {
        let comparison =
            compare_methods(&LogForced, 2.0, 1.0, 0.3, 100).expect("comparison should succeed");
        assert_eq!(comparison.rk4_trajectory.len(), 101);
        assert_eq!(comparison.reference_trajectory.len(), 101);
        assert_eq!(
            comparison.rk4_trajectory.xs,
            comparison.reference_trajectory.xs
        );
        assert_eq!(comparison.rk4.ops, RK4_STEP_COST * 100);
        assert_eq!(comparison.reference.ops, TSIT5_STEP_COST * 100);
    }

    #[test]
    fn methods_agree_on_a_smooth_problem() {
        let comparison =
            compare_methods(&LogForced, 2.0, 1.0, 0.05, 200).expect("comparison should succeed");
        assert!((comparison.rk4.final_x - comparison.reference.final_x).abs() < 1e-12);
        assert!((comparison.rk4.final_y - comparison.reference.final_y).abs() < 1e-7);
    }

    #[test]
    fn domain_violation_surfaces_through_comparison() {
        let f = |x: f64, _y: f64| x.ln();
        let result = compare_methods(&f, 0.1, 0.0, -0.5, 1);
        assert_err_contains(result, "undefined");
    }
}
