use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk description of one demo run, selected by the `demo` tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "demo", rename_all = "snake_case")]
pub enum Scenario {
    /// RK4 vs. the Tsit5 reference method on dy/dx = -y + ln x.
    RungeComparison {
        x0: f64,
        y0: f64,
        h: f64,
        steps: usize,
    },
    /// Euler-integrated Lorenz attractor.
    Lorenz {
        rho: f64,
        #[serde(default = "default_lorenz_dt")]
        dt: f64,
        #[serde(default = "default_lorenz_steps")]
        steps: usize,
    },
    /// Newton cooling from one start temperature toward several ambients.
    CoolingSweep {
        initial_temp: f64,
        k: f64,
        ambients: Vec<f64>,
        h: f64,
        steps: usize,
    },
}

fn default_lorenz_dt() -> f64 {
    0.01
}

fn default_lorenz_steps() -> usize {
    10_000
}

pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading scenario file {}", path.display()))?;
    serde_yaml::from_str(&text)
        .with_context(|| format!("parsing scenario file {}", path.display()))
}
