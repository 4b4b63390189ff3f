//! Free-stream reference state.
//!
//! The solver works in nondimensional variables: density scaled by the
//! free-stream density, velocities by the free-stream speed, pressure by
//! `rho_inf * U_inf^2`, lengths by the body length. In that scaling the
//! free stream itself is `rho = 1, u = 1, v = 0` with the pressure and
//! enthalpy computed here.

/// Ratio of specific heats for air. Fixed for the whole solver.
pub const GAMMA: f64 = 1.4;

/// Nondimensional free-stream state plus carried reference quantities.
///
/// `re_ref` and `mu_ref` describe the wind-tunnel condition the case was
/// taken from; they are echoed into output headers but do not enter the
/// marching arithmetic. `mu_inf` does: it sets the viscosity scale of the
/// thin-layer stress terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeStream {
    /// Free-stream Mach number.
    pub mach: f64,
    /// Static pressure, `1 / (gamma * M^2)`.
    pub pressure: f64,
    /// Stagnation enthalpy, `0.5 + 1 / ((gamma - 1) * M^2)`.
    pub total_enthalpy: f64,
    /// Static temperature, `1 / ((gamma - 1) * M^2)`.
    pub temperature: f64,
    /// Reference Reynolds number.
    pub re_ref: f64,
    /// Reference dynamic viscosity (dimensional, case metadata).
    pub mu_ref: f64,
    /// Nondimensional free-stream viscosity.
    pub mu_inf: f64,
}

impl FreeStream {
    /// Compute the reference constants for a given Mach number.
    pub fn new(mach: f64, re_ref: f64, mu_ref: f64, mu_inf: f64) -> Self {
        let m2 = mach * mach;
        let pressure = 1.0 / (GAMMA * m2);
        let temperature = 1.0 / ((GAMMA - 1.0) * m2);
        Self {
            mach,
            pressure,
            total_enthalpy: 0.5 + temperature,
            temperature,
            re_ref,
            mu_ref,
            mu_inf,
        }
    }
}
