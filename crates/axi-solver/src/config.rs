//! Numerical controls for a marching run.

use axi_core::numeric::ensure_finite;

use crate::error::{SolverError, SolverResult};

/// Run controls. All fields are required; nothing is inferred.
///
/// Axial quantities are fractions of the body length, matching the
/// nondimensional frame the solver works in.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Radial stations between wall and shock, at least 3.
    pub neta: usize,
    /// Initial axial step.
    pub dx_initial: f64,
    /// Axial station anchoring the conical phase.
    pub x_start: f64,
    /// Iteration cap for the conical phase.
    pub max_conical_iters: usize,
    /// Conical-phase snapshot cadence, in iterations.
    pub conical_report_every: usize,
    /// Axial distance between marching snapshots.
    pub march_report_spacing: f64,
}

impl SolverConfig {
    /// Reject malformed controls before any iteration runs.
    pub fn validate(&self) -> SolverResult<()> {
        if self.neta < 3 {
            return Err(SolverError::InvalidConfig { what: "neta must be at least 3" });
        }
        ensure_finite(self.dx_initial, "dx_initial")?;
        if self.dx_initial <= 0.0 {
            return Err(SolverError::InvalidConfig { what: "dx_initial must be positive" });
        }
        ensure_finite(self.x_start, "x_start")?;
        if self.x_start <= 0.0 || self.x_start >= 1.0 {
            return Err(SolverError::InvalidConfig { what: "x_start must lie in (0, 1)" });
        }
        if self.dx_initial >= self.x_start {
            return Err(SolverError::InvalidConfig {
                what: "dx_initial must be smaller than x_start",
            });
        }
        if self.max_conical_iters == 0 {
            return Err(SolverError::InvalidConfig { what: "max_conical_iters must be at least 1" });
        }
        if self.conical_report_every == 0 {
            return Err(SolverError::InvalidConfig {
                what: "conical_report_every must be at least 1",
            });
        }
        ensure_finite(self.march_report_spacing, "march_report_spacing")?;
        if self.march_report_spacing <= 0.0 {
            return Err(SolverError::InvalidConfig {
                what: "march_report_spacing must be positive",
            });
        }
        Ok(())
    }
}
