//! axi-geom: surfaces bounding the axisymmetric flow domain.
//!
//! Contains:
//! - the `Geometry` trait (radius/slope/length of a surface of revolution)
//! - OgiveCylinder (tangent-ogive nose blended into a cylinder)
//! - ConeBoundary (straight cone; the prescribed outer shock surface)

pub mod cone;
pub mod error;
pub mod ogive;

pub use cone::ConeBoundary;
pub use error::{GeomError, GeomResult};
pub use ogive::OgiveCylinder;

use axi_core::units::Length;

/// A surface of revolution described by its radius along the axis.
///
/// Providers are total over `[0, length]` (and tolerant of stations
/// slightly beyond, which the last marching step can reach). Radii carry
/// units; slopes are dimensionless `dr/dx`.
pub trait Geometry {
    /// Reference axial length of the surface.
    fn length(&self) -> Length;

    /// Surface radius at axial station `x`.
    fn radius(&self, x: Length) -> Length;

    /// Surface slope `dr/dx` at axial station `x`.
    fn slope(&self, x: Length) -> f64;
}
