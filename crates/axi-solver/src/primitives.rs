//! Recovery of primitive variables from the conserved marching triple.

use axi_core::GAMMA;

/// Primitive variables at a single station.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Primitives {
    pub rho: f64,
    pub u: f64,
    pub v: f64,
    pub p: f64,
}

/// Station index of the first point off the wall. The sonic clamp applies
/// only here.
pub(crate) const WALL_ADJACENT: usize = 2;

/// Supersonic-branch inversion of `(a, b, c) = (rho*u, rho*u^2 + p,
/// rho*u*v)`, with a one-way lock on the near-wall branch choice.
///
/// The inversion reduces to a quadratic in the streamwise Mach number;
/// `phi` measures how close a state sits to the sonic point `phm` where
/// the two roots merge. The first time any station comes within 5 percent
/// of sonic the lock engages, and from then on the wall-adjacent station
/// is held exactly at the sonic value. The lock never releases.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchSelector {
    locked: bool,
}

impl BranchSelector {
    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Recover `(rho, u, v, p)` plus static temperature at `station`.
    pub fn invert(
        &mut self,
        station: usize,
        a: f64,
        b: f64,
        c: f64,
        total_enthalpy: f64,
    ) -> (Primitives, f64) {
        let phm = GAMMA / (GAMMA + 1.0);
        let phs = 0.95 * phm;

        let xk = total_enthalpy - 0.5 * (c / a) * (c / a);
        let mut phi = 2.0 * (GAMMA - 1.0) * xk * a * a / (GAMMA * b * b);
        if phi > phs {
            self.locked = true;
        }
        if station == WALL_ADJACENT && self.locked {
            phi = phm;
        }
        let rad = if phi < phm { (1.0 - phi - phi / GAMMA).sqrt() } else { 0.0 };
        let mx2 = (1.0 - phi + rad) / (GAMMA * phi - (GAMMA - 1.0));
        let p = b / (1.0 + GAMMA * mx2);
        let t = xk / (1.0 + 0.5 * (GAMMA - 1.0) * mx2);
        let rho = GAMMA * p / ((GAMMA - 1.0) * t);
        let u = a / rho;
        let v = c / a;
        (Primitives { rho, u, v, p }, t)
    }
}
