use anyhow::{Context, Result};
use odelab_core::compare::compare_methods;
use odelab_core::fixed_step::integrate;
use odelab_core::flow::propagate;
use odelab_core::systems::{LogForced, Lorenz, NewtonCooling};
use std::path::{Path, PathBuf};

use scenario::{load_scenario, Scenario};

mod csv_out;
mod scenario;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let scenario_path = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config/scenario.yaml"));
    let out_dir = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("output"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    match load_scenario(&scenario_path)? {
        Scenario::RungeComparison { x0, y0, h, steps } => {
            run_comparison(&out_dir, x0, y0, h, steps)
        }
        Scenario::Lorenz { rho, dt, steps } => run_lorenz(&out_dir, rho, dt, steps),
        Scenario::CoolingSweep {
            initial_temp,
            k,
            ambients,
            h,
            steps,
        } => run_cooling(&out_dir, initial_temp, k, &ambients, h, steps),
    }
}

/// dy/dx = -y + ln x on a shared grid, RK4 against the Tsit5 reference.
fn run_comparison(out_dir: &Path, x0: f64, y0: f64, h: f64, steps: usize) -> Result<()> {
    let comparison = compare_methods(&LogForced, x0, y0, h, steps)?;

    println!("method  elapsed_secs     ops     final_y");
    for report in [&comparison.rk4, &comparison.reference] {
        println!(
            "{:<7} {:>12.6} {:>7} {:>12.8}",
            report.method, report.elapsed_secs, report.ops, report.final_y
        );
    }
    let faster = if comparison.rk4.elapsed_secs <= comparison.reference.elapsed_secs {
        &comparison.rk4
    } else {
        &comparison.reference
    };
    println!("faster method: {}", faster.method);

    csv_out::write_xy(
        &out_dir.join("runge_rk4.csv"),
        "x",
        "y",
        &comparison.rk4_trajectory,
    )?;
    csv_out::write_xy(
        &out_dir.join("runge_tsit5.csv"),
        "x",
        "y",
        &comparison.reference_trajectory,
    )?;
    Ok(())
}

fn run_lorenz(out_dir: &Path, rho: f64, dt: f64, steps: usize) -> Result<()> {
    let system = Lorenz::new(rho);
    let traj = propagate(&system, 0.0, &[7.5, 22.5, 35.0], dt, steps)?;
    println!(
        "lorenz rho = {rho}: {} samples over {:.2} time units",
        traj.rows(),
        dt * steps as f64
    );
    csv_out::write_flow(&out_dir.join("lorenz.csv"), &["x", "y", "z"], &traj)
}

fn run_cooling(
    out_dir: &Path,
    initial_temp: f64,
    k: f64,
    ambients: &[f64],
    h: f64,
    steps: usize,
) -> Result<()> {
    let mut runs = Vec::with_capacity(ambients.len());
    for &ambient in ambients {
        let model = NewtonCooling { k, ambient };
        let traj = integrate(&model, 0.0, initial_temp, h, steps)?;
        runs.push((format!("ambient_{ambient}"), traj));
    }
    println!(
        "cooling sweep: {} ambients, {} samples each",
        runs.len(),
        steps + 1
    );
    csv_out::write_columns(&out_dir.join("cooling.csv"), "t", &runs)
}
