//! Case files: the on-disk YAML schema and its translation into solver
//! inputs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use axi_core::FreeStream;
use axi_core::units::{degrees, fraction, inches};
use axi_geom::{ConeBoundary, Geometry, OgiveCylinder};
use axi_solver::{PnsSolver, SolverConfig};

use crate::error::{AppError, AppResult};

/// One complete run description as stored on disk. Lengths carry an
/// `_in` suffix (inches); everything else is nondimensional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseFile {
    /// Free-stream Mach number, supersonic.
    pub mach: f64,
    /// Reference temperature in degrees Rankine, echoed into report headers.
    pub t_ref_r: f64,
    /// Reference Reynolds number.
    pub re_ref: f64,
    /// Sutherland reference viscosity scale.
    pub mu_ref: f64,
    /// Free-stream viscosity in solver units.
    pub mu_inf: f64,
    /// Initial axial step, as a fraction of body length.
    pub dx_initial: f64,
    /// Radial stations between wall and shock.
    pub neta: usize,
    /// Iteration cap for the conical starting solution.
    pub max_conical_iters: usize,
    /// Conical snapshot cadence, in iterations.
    pub conical_report_every: usize,
    /// Axial distance between marching snapshots, fraction of body length.
    pub march_report_spacing: f64,
    pub body: BodySpec,
    pub outer: OuterSpec,
}

/// Body surface shapes the case format knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodySpec {
    OgiveCylinder {
        nose_length_in: f64,
        cylinder_length_in: f64,
        height_in: f64,
        match_station_in: f64,
    },
}

/// Outer boundary shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OuterSpec {
    Cone { half_angle_deg: f64 },
}

impl CaseFile {
    /// Read and check a case file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| AppError::CaseFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let case: CaseFile = serde_yaml::from_str(&text)?;
        case.validate()?;
        Ok(case)
    }

    /// The built-in Mach 5.95 ogive-cylinder case behind a 22 degree
    /// conical shock.
    pub fn reference() -> Self {
        Self {
            mach: 5.95,
            t_ref_r: 1464.7157,
            re_ref: 2_179_168.0,
            mu_ref: 7.65034e-7,
            mu_inf: 2.0e-5,
            dx_initial: 4.0e-4,
            neta: 31,
            max_conical_iters: 750,
            conical_report_every: 25,
            march_report_spacing: 0.05,
            body: BodySpec::OgiveCylinder {
                nose_length_in: 22.5,
                cylinder_length_in: 27.5,
                height_in: 4.25,
                match_station_in: 5.0,
            },
            outer: OuterSpec::Cone { half_angle_deg: 22.0 },
        }
    }

    /// Check the free-stream fields. Geometry and numerical controls get
    /// their own checks when the solver is assembled.
    pub fn validate(&self) -> AppResult<()> {
        require(self.mach.is_finite() && self.mach > 1.0, "mach must be supersonic")?;
        require(self.t_ref_r.is_finite() && self.t_ref_r > 0.0, "t_ref_r must be positive")?;
        require(self.re_ref.is_finite() && self.re_ref > 0.0, "re_ref must be positive")?;
        require(self.mu_ref.is_finite() && self.mu_ref > 0.0, "mu_ref must be positive")?;
        require(
            self.mu_inf.is_finite() && self.mu_inf >= 0.0,
            "mu_inf must be non-negative",
        )?;
        Ok(())
    }

    pub fn free_stream(&self) -> FreeStream {
        FreeStream::new(self.mach, self.re_ref, self.mu_ref, self.mu_inf)
    }

    /// Build the solver for this case: body, shock, controls, free stream.
    pub fn solver(&self) -> AppResult<PnsSolver<OgiveCylinder, ConeBoundary>> {
        self.validate()?;
        let body = self.body_surface()?;
        let OuterSpec::Cone { half_angle_deg } = self.outer;
        let shock = ConeBoundary::new(degrees(half_angle_deg), body.length())?;
        let config = SolverConfig {
            neta: self.neta,
            dx_initial: self.dx_initial,
            x_start: fraction(body.conical_station(), body.length()),
            max_conical_iters: self.max_conical_iters,
            conical_report_every: self.conical_report_every,
            march_report_spacing: self.march_report_spacing,
        };
        Ok(PnsSolver::new(config, self.free_stream(), body, shock)?)
    }

    /// Header block naming the case in report files.
    pub fn header_lines(&self) -> Vec<String> {
        let BodySpec::OgiveCylinder {
            nose_length_in,
            cylinder_length_in,
            height_in,
            match_station_in,
        } = self.body;
        let OuterSpec::Cone { half_angle_deg } = self.outer;
        vec![
            format!(
                "free stream: mach {:.4}, t_ref {:.4} R, re_ref {:.1}, mu_ref {:.6e}, mu_inf {:.6e}",
                self.mach, self.t_ref_r, self.re_ref, self.mu_ref, self.mu_inf
            ),
            format!(
                "body: ogive-cylinder, nose {:.3} in, cylinder {:.3} in, radius {:.3} in, match station {:.3} in",
                nose_length_in, cylinder_length_in, height_in, match_station_in
            ),
            format!("outer shock: cone, half-angle {:.2} deg", half_angle_deg),
            format!(
                "grid: neta {}, dx {:.2e}, snapshot spacing {:.3}",
                self.neta, self.dx_initial, self.march_report_spacing
            ),
        ]
    }

    fn body_surface(&self) -> AppResult<OgiveCylinder> {
        let BodySpec::OgiveCylinder {
            nose_length_in,
            cylinder_length_in,
            height_in,
            match_station_in,
        } = self.body;
        Ok(OgiveCylinder::new(
            inches(nose_length_in),
            inches(cylinder_length_in),
            inches(height_in),
            inches(match_station_in),
        )?)
    }
}

fn require(ok: bool, what: &str) -> AppResult<()> {
    if ok {
        Ok(())
    } else {
        Err(AppError::Validation(what.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_case_assembles() {
        let case = CaseFile::reference();
        assert!(case.solver().is_ok());
    }

    #[test]
    fn yaml_schema_round_trips() {
        let case = CaseFile::reference();
        let text = serde_yaml::to_string(&case).unwrap();
        let back: CaseFile = serde_yaml::from_str(&text).unwrap();
        assert_eq!(case, back);
    }

    #[test]
    fn parses_the_documented_schema() {
        let text = "\
mach: 5.95
t_ref_r: 1464.7157
re_ref: 2179168.0
mu_ref: 7.65034e-7
mu_inf: 2.0e-5
dx_initial: 0.0004
neta: 31
max_conical_iters: 750
conical_report_every: 25
march_report_spacing: 0.05
body:
  kind: ogive_cylinder
  nose_length_in: 22.5
  cylinder_length_in: 27.5
  height_in: 4.25
  match_station_in: 5.0
outer:
  kind: cone
  half_angle_deg: 22.0
";
        let case: CaseFile = serde_yaml::from_str(text).unwrap();
        assert_eq!(case.neta, 31);
        assert_eq!(case, CaseFile::reference());
        assert!(case.solver().is_ok());
    }

    #[test]
    fn rejects_subsonic_free_stream() {
        let mut case = CaseFile::reference();
        case.mach = 0.8;
        let err = case.solver().unwrap_err();
        assert!(format!("{err}").contains("mach"));
    }

    #[test]
    fn rejects_bad_geometry() {
        let mut case = CaseFile::reference();
        case.body = BodySpec::OgiveCylinder {
            nose_length_in: -1.0,
            cylinder_length_in: 27.5,
            height_in: 4.25,
            match_station_in: 5.0,
        };
        let err = case.solver().unwrap_err();
        assert!(format!("{err}").starts_with("Geometry error:"));
    }

    #[test]
    fn header_names_the_geometry() {
        let lines = CaseFile::reference().header_lines();
        assert!(lines.iter().any(|l| l.contains("ogive-cylinder")));
        assert!(lines.iter().any(|l| l.contains("half-angle 22.00 deg")));
    }
}
