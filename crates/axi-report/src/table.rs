//! Fixed-width station tables and run summaries.

use axi_solver::{RunOutcome, RunReport, Snapshot, SnapshotTag};

/// Render one snapshot as a station table, outer boundary first.
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    out.push_str(&tag_line(&snapshot.tag));
    out.push('\n');
    out.push_str(&format!(
        "{:>7} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}\n",
        "station", "rho", "u", "v", "p", "T", "mach", "pt/pt0"
    ));
    for r in &snapshot.stations {
        out.push_str(&format!(
            "{:>7} {:>10.6} {:>10.6} {:>10.6} {:>10.6} {:>10.6} {:>10.6} {:>10.6}\n",
            r.station,
            r.density,
            r.axial_velocity,
            r.radial_velocity,
            r.pressure,
            r.temperature,
            r.mach,
            r.pitot_ratio
        ));
    }
    out
}

fn tag_line(tag: &SnapshotTag) -> String {
    match *tag {
        SnapshotTag::Conical { iteration, residual } => {
            format!("conical iteration {iteration:>4}   residual {residual:.6e}")
        }
        SnapshotTag::Marching { x } => format!("x/L = {x:.6}"),
    }
}

/// Render the end-of-run summary block.
pub fn format_summary(report: &RunReport) -> String {
    let mut out = String::new();
    match report.outcome {
        RunOutcome::Completed => out.push_str("march completed\n"),
        RunOutcome::NotConverged => out.push_str("conical phase did not converge\n"),
    }
    out.push_str(&format!(
        "  conical iterations: {}\n",
        report.conical_iterations
    ));
    out.push_str(&format!("  marching steps: {}\n", report.marching_steps));
    out.push_str(&format!("  final x/L: {:.6}\n", report.final_x));
    out.push_str(&format!("  last residual: {:.3e}\n", report.final_residual));
    out.push_str(&format!(
        "  elapsed: {:.2} s\n",
        report.elapsed.as_secs_f64()
    ));
    out
}
