use anyhow::{bail, Context, Result};
use odelab_core::fixed_step::Trajectory;
use odelab_core::flow::FlowTrajectory;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes one (x, y) trajectory as a two-column CSV.
pub fn write_xy(path: &Path, x_label: &str, y_label: &str, traj: &Trajectory<f64>) -> Result<()> {
    let mut writer = open(path)?;
    writeln!(writer, "{x_label},{y_label}")?;
    for (x, y) in traj.xs.iter().zip(&traj.ys) {
        writeln!(writer, "{x},{y}")?;
    }
    Ok(())
}

/// Writes a flow history with one time column plus one column per state
/// component.
pub fn write_flow(path: &Path, labels: &[&str], traj: &FlowTrajectory) -> Result<()> {
    if labels.len() != traj.dimension {
        bail!(
            "Expected {} column labels, got {}.",
            traj.dimension,
            labels.len()
        );
    }

    let mut writer = open(path)?;
    writeln!(writer, "t,{}", labels.join(","))?;
    for (i, t) in traj.times.iter().enumerate() {
        write!(writer, "{t}")?;
        for value in traj.row(i) {
            write!(writer, ",{value}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes several trajectories that share one x grid as a wide CSV:
/// the first run's x column plus one y column per labeled run.
pub fn write_columns(
    path: &Path,
    x_label: &str,
    runs: &[(String, Trajectory<f64>)],
) -> Result<()> {
    let Some((_, first)) = runs.first() else {
        bail!("At least one trajectory is required.");
    };
    if runs.iter().any(|(_, traj)| traj.len() != first.len()) {
        bail!("All trajectories must share the same grid length.");
    }

    let mut writer = open(path)?;
    write!(writer, "{x_label}")?;
    for (label, _) in runs {
        write!(writer, ",{label}")?;
    }
    writeln!(writer)?;

    for i in 0..first.len() {
        write!(writer, "{}", first.xs[i])?;
        for (_, traj) in runs {
            write!(writer, ",{}", traj.ys[i])?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn open(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("creating output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use odelab_core::integrate;
    use odelab_core::systems::{Exponential, Lorenz};

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("odelab_{}_{name}", std::process::id()));
        path
    }

    #[test]
    fn xy_csv_has_header_and_one_row_per_sample() {
        let traj = integrate(&Exponential { rate: -1.0 }, 0.0, 1.0, 0.1, 5)
            .expect("run should succeed");
        let path = temp_path("xy.csv");
        write_xy(&path, "t", "y", &traj).expect("write should succeed");

        let text = std::fs::read_to_string(&path).expect("file should exist");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "t,y");
        assert!(lines[1].starts_with("0,1"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn flow_csv_checks_label_count() {
        let traj = odelab_core::flow::propagate(&Lorenz::default(), 0.0, &[7.5, 22.5, 35.0], 0.01, 2)
            .expect("run should succeed");
        let path = temp_path("flow.csv");
        assert!(write_flow(&path, &["x", "y"], &traj).is_err());
        write_flow(&path, &["x", "y", "z"], &traj).expect("write should succeed");

        let text = std::fs::read_to_string(&path).expect("file should exist");
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.lines().next(), Some("t,x,y,z"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn wide_csv_rejects_mismatched_grids() {
        let short = integrate(&Exponential { rate: -1.0 }, 0.0, 1.0, 0.1, 2)
            .expect("run should succeed");
        let long = integrate(&Exponential { rate: -1.0 }, 0.0, 1.0, 0.1, 5)
            .expect("run should succeed");
        let path = temp_path("wide.csv");
        let runs = vec![("a".to_string(), short), ("b".to_string(), long)];
        assert!(write_columns(&path, "t", &runs).is_err());
    }
}
