//! Radial grid and primitive-variable storage.

use axi_core::FreeStream;

/// The transformed radial coordinate and the four primitive sequences.
///
/// `eta` spans the annulus between body and shock: 0 at the wall, 1 at the
/// shock, `deta = 1/(neta - 1)` apart. Arrays are sized `neta + 2` so the
/// scheme's 1-based station numbering reads directly: live stations are
/// `1..=neta` (1 = wall, `neta` = shock); slots `0` and `neta + 1` are
/// padding and never consumed.
#[derive(Debug, Clone)]
pub struct FlowGrid {
    neta: usize,
    deta: f64,
    pub eta: Vec<f64>,
    pub rho: Vec<f64>,
    pub u: Vec<f64>,
    pub v: Vec<f64>,
    pub p: Vec<f64>,
}

impl FlowGrid {
    /// Uniform free-stream field with no-slip applied at the wall.
    pub fn new(neta: usize, free: &FreeStream) -> Self {
        let slots = neta + 2;
        let deta = 1.0 / (neta as f64 - 1.0);
        let mut eta = vec![0.0; slots];
        for i in 1..=neta {
            eta[i] = (i as f64 - 1.0) * deta;
        }
        let mut grid = Self {
            neta,
            deta,
            eta,
            rho: vec![1.0; slots],
            u: vec![1.0; slots],
            v: vec![0.0; slots],
            p: vec![free.pressure; slots],
        };
        grid.u[1] = 0.0;
        grid.v[1] = 0.0;
        grid
    }

    pub fn neta(&self) -> usize {
        self.neta
    }

    pub fn deta(&self) -> f64 {
        self.deta
    }
}
