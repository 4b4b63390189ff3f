//! Straight cone through the origin.
//!
//! Serves as the prescribed conical shock surface bounding the marching
//! domain on the outside, and doubles as a simple body shape in tests.

use axi_core::units::{Angle, Length, inches};
use uom::si::angle::radian;
use uom::si::length::inch;

use crate::error::{GeomError, GeomResult};
use crate::Geometry;

/// Cone with apex at the origin. Internals in inches.
#[derive(Debug, Clone)]
pub struct ConeBoundary {
    slope: f64,
    length: f64,
}

impl ConeBoundary {
    /// Build a cone from its half-angle and axial length.
    pub fn new(half_angle: Angle, length: Length) -> GeomResult<Self> {
        let theta = half_angle.get::<radian>();
        let len = length.get::<inch>();
        if !theta.is_finite() || theta <= 0.0 || theta >= std::f64::consts::FRAC_PI_2 {
            return Err(GeomError::InvalidDimension {
                what: "cone half-angle must lie in (0, 90) degrees",
            });
        }
        if !len.is_finite() || len <= 0.0 {
            return Err(GeomError::InvalidDimension { what: "cone length must be positive" });
        }
        Ok(Self { slope: theta.tan(), length: len })
    }
}

impl Geometry for ConeBoundary {
    fn length(&self) -> Length {
        inches(self.length)
    }

    fn radius(&self, x: Length) -> Length {
        inches(x.get::<inch>() * self.slope)
    }

    fn slope(&self, _x: Length) -> f64 {
        self.slope
    }
}
