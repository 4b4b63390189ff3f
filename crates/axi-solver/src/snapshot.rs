//! Field snapshots: derived station quantities at a reporting point.

use serde::{Deserialize, Serialize};

use axi_core::{FreeStream, GAMMA};

use crate::grid::FlowGrid;

/// Where in the run a snapshot was taken.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SnapshotTag {
    Conical { iteration: usize, residual: f64 },
    Marching { x: f64 },
}

/// One station of derived output, all in free-stream units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub station: usize,
    pub density: f64,
    pub axial_velocity: f64,
    pub radial_velocity: f64,
    pub pressure: f64,
    pub temperature: f64,
    pub mach: f64,
    /// Pitot pressure over free-stream pitot pressure.
    pub pitot_ratio: f64,
}

/// A full profile from the shock down to the wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tag: SnapshotTag,
    /// Stations ordered outer boundary first, wall last.
    pub stations: Vec<StationRecord>,
}

impl Snapshot {
    pub(crate) fn capture(tag: SnapshotTag, grid: &FlowGrid, free: &FreeStream) -> Self {
        let stations = (1..=grid.neta())
            .rev()
            .map(|i| station_record(i, grid, free))
            .collect();
        Self { tag, stations }
    }
}

fn station_record(i: usize, grid: &FlowGrid, free: &FreeStream) -> StationRecord {
    let rho = grid.rho[i];
    let u = grid.u[i];
    let v = grid.v[i];
    let p = grid.p[i];
    let q2 = u * u + v * v;
    let temperature = free.total_enthalpy - 0.5 * q2;
    // The wall row carries no kinetic energy, so its Mach number is zero
    // and the pitot ratio degenerates to the static pressure.
    let (mach, pitot_ratio) = if i == 1 {
        (0.0, p)
    } else {
        let mach = (q2 / ((GAMMA - 1.0) * temperature)).sqrt();
        (mach, rayleigh_pitot(mach, p, free))
    };
    StationRecord {
        station: i,
        density: rho,
        axial_velocity: u,
        radial_velocity: v,
        pressure: p,
        temperature,
        mach,
        pitot_ratio,
    }
}

/// Pitot pressure behind a normal shock at `mach`, referenced to the
/// free-stream pitot pressure, via the Rayleigh pitot formula.
fn rayleigh_pitot(mach: f64, p: f64, free: &FreeStream) -> f64 {
    let e = 2.0 * GAMMA / (GAMMA - 1.0);
    let m2 = mach * mach;
    let minf2 = free.mach * free.mach;
    (p / free.pressure)
        * (mach / free.mach).powf(e)
        * ((e * minf2 - 1.0) / (e * m2 - 1.0)).powf(1.0 / (GAMMA - 1.0))
}
