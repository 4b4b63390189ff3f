//! Full-solver run on the Mach 5.95 ogive-cylinder reference case.

use axi_core::units::{degrees, fraction, inches};
use axi_core::FreeStream;
use axi_geom::{ConeBoundary, Geometry, OgiveCylinder};
use axi_solver::{PnsSolver, RunOutcome, Snapshot, SnapshotTag, SolverConfig};

fn reference_solver() -> PnsSolver<OgiveCylinder, ConeBoundary> {
    let body = OgiveCylinder::new(inches(22.5), inches(27.5), inches(4.25), inches(5.0)).unwrap();
    let shock = ConeBoundary::new(degrees(22.0), body.length()).unwrap();
    let cfg = SolverConfig {
        neta: 31,
        dx_initial: 4.0e-4,
        x_start: fraction(body.conical_station(), body.length()),
        max_conical_iters: 750,
        conical_report_every: 25,
        march_report_spacing: 0.05,
    };
    let free = FreeStream::new(5.95, 2_179_168.0, 7.65034e-7, 2.0e-5);
    PnsSolver::new(cfg, free, body, shock).unwrap()
}

#[test]
fn reference_case_runs_to_the_end_of_the_body() {
    let mut solver = reference_solver();
    let mut snapshots: Vec<Snapshot> = Vec::new();
    let report = solver.run(|s| snapshots.push(s.clone()));

    assert_eq!(report.outcome, RunOutcome::Completed);
    assert!(report.converged());
    assert!(report.conical_iterations <= 750);
    assert!(report.marching_steps >= 300 && report.marching_steps <= 700);
    assert!(report.final_x > 0.98);

    // The last conical snapshot is the converged one.
    let conical_residual = snapshots
        .iter()
        .filter_map(|s| match s.tag {
            SnapshotTag::Conical { residual, .. } => Some(residual),
            SnapshotTag::Marching { .. } => None,
        })
        .last()
        .unwrap();
    assert!(conical_residual <= 1.0e-4);

    // The run closes with a snapshot at the final station.
    let last = snapshots.last().unwrap();
    match last.tag {
        SnapshotTag::Marching { x } => assert_eq!(x, report.final_x),
        SnapshotTag::Conical { .. } => panic!("run should end in the marching phase"),
    }
}

#[test]
fn snapshots_hold_boundary_conditions_everywhere() {
    let mut solver = reference_solver();
    let mut snapshots: Vec<Snapshot> = Vec::new();
    solver.run(|s| snapshots.push(s.clone()));
    let free = FreeStream::new(5.95, 2_179_168.0, 7.65034e-7, 2.0e-5);

    assert!(snapshots.len() > 5);
    for snap in &snapshots {
        // Outer boundary first, wall last.
        assert_eq!(snap.stations.first().map(|s| s.station), Some(31));
        assert_eq!(snap.stations.last().map(|s| s.station), Some(1));

        let outer = snap.stations.first().unwrap();
        assert_eq!(outer.density, 1.0);
        assert_eq!(outer.axial_velocity, 1.0);
        assert_eq!(outer.radial_velocity, 0.0);
        assert_eq!(outer.pressure, free.pressure);

        let wall = snap.stations.last().unwrap();
        assert_eq!(wall.axial_velocity, 0.0);
        assert_eq!(wall.radial_velocity, 0.0);
        assert_eq!(wall.mach, 0.0);

        for record in &snap.stations {
            assert!(record.density.is_finite());
            assert!(record.axial_velocity.is_finite());
            assert!(record.radial_velocity.is_finite());
            assert!(record.pressure.is_finite());
            assert!(record.pressure > 0.0, "station {}", record.station);
        }
    }
}

#[test]
fn marching_snapshots_move_monotonically_downstream() {
    let mut solver = reference_solver();
    let mut xs: Vec<f64> = Vec::new();
    solver.run(|s| {
        if let SnapshotTag::Marching { x } = s.tag {
            xs.push(x);
        }
    });

    assert!(xs.len() > 5);
    for pair in xs.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    assert!(xs.last().copied().unwrap() > 0.98);
}

#[test]
fn converged_cone_flow_compresses_the_wall() {
    let mut solver = reference_solver();
    let mut conical: Vec<Snapshot> = Vec::new();
    let report = solver.run(|s| {
        if matches!(s.tag, SnapshotTag::Conical { .. }) {
            conical.push(s.clone());
        }
    });
    assert_eq!(report.outcome, RunOutcome::Completed);

    let free = FreeStream::new(5.95, 2_179_168.0, 7.65034e-7, 2.0e-5);
    let settled = conical.last().unwrap();
    let wall = settled.stations.last().unwrap();
    // Conical compression holds the surface well above free-stream
    // static pressure.
    assert!(wall.pressure > free.pressure);
    assert!(wall.pressure < 0.5);
}
