//! Tangent-ogive nose blended into a straight cylinder.
//!
//! The nose is a circular arc tangent to the cylinder at the junction. At a
//! chosen match station on the nose the arc's tangent line is extended down
//! to the axis, and the whole body is shifted so that the extension passes
//! through the origin. Below the match station the surface follows that
//! tangent cone, which makes the nose tip locally conical; the conical
//! bootstrap of the flow solver is anchored there.

use axi_core::units::{Length, inches};
use uom::si::length::inch;

use crate::error::{GeomError, GeomResult};
use crate::Geometry;

/// Ogive-cylinder body of revolution. Internals in inches.
#[derive(Debug, Clone)]
pub struct OgiveCylinder {
    /// Shifted station of the ogive-cylinder junction.
    nose_end: f64,
    /// Shifted total length (nose + cylinder).
    total_length: f64,
    /// Cylinder radius (maximum body radius).
    height: f64,
    /// Radius of the ogive arc.
    arc_radius: f64,
    /// Slope of the tangent cone below the match station.
    cone_slope: f64,
    /// Shifted match station where cone and arc join.
    match_station: f64,
}

impl OgiveCylinder {
    /// Build a body from its unshifted dimensions: nose length, cylinder
    /// length, cylinder radius, and the match station on the nose where
    /// the conical extension is taken.
    pub fn new(
        nose_length: Length,
        cylinder_length: Length,
        height: Length,
        match_station: Length,
    ) -> GeomResult<Self> {
        let l1 = nose_length.get::<inch>();
        let lc = cylinder_length.get::<inch>();
        let h = height.get::<inch>();
        let x0 = match_station.get::<inch>();

        if !l1.is_finite() || l1 <= 0.0 {
            return Err(GeomError::InvalidDimension { what: "nose length must be positive" });
        }
        if !lc.is_finite() || lc < 0.0 {
            return Err(GeomError::InvalidDimension {
                what: "cylinder length must be non-negative",
            });
        }
        if !h.is_finite() || h <= 0.0 {
            return Err(GeomError::InvalidDimension { what: "height must be positive" });
        }
        if !x0.is_finite() || x0 <= 0.0 || x0 >= l1 {
            return Err(GeomError::InvalidDimension {
                what: "match station must lie strictly inside the nose",
            });
        }

        // Arc radius for tangency with the cylinder at the junction.
        let rn = 0.5 * h + 0.5 * l1 * l1 / h;
        let q = l1 - x0;
        // rn >= l1 > q, so the radicals below stay positive.
        let root = (rn * rn - q * q).sqrt();
        let r0 = h - rn + root;
        let cone_slope = q / root;
        // Shift placing the tangent cone's apex at the origin.
        let dx0 = r0 / cone_slope - x0;

        Ok(Self {
            nose_end: l1 + dx0,
            total_length: l1 + lc + dx0,
            height: h,
            arc_radius: rn,
            cone_slope,
            match_station: x0 + dx0,
        })
    }

    /// Shifted station where the tangent cone meets the ogive arc. The
    /// marching solver anchors its conical starting solution here.
    pub fn conical_station(&self) -> Length {
        inches(self.match_station)
    }
}

impl Geometry for OgiveCylinder {
    fn length(&self) -> Length {
        inches(self.total_length)
    }

    fn radius(&self, x: Length) -> Length {
        let xi = x.get::<inch>();
        let r = if xi < self.match_station {
            xi * self.cone_slope
        } else if xi <= self.nose_end {
            let d = self.nose_end - xi;
            self.height - self.arc_radius + (self.arc_radius * self.arc_radius - d * d).sqrt()
        } else {
            self.height
        };
        inches(r)
    }

    fn slope(&self, x: Length) -> f64 {
        let xi = x.get::<inch>();
        if xi < self.match_station {
            self.cone_slope
        } else if xi <= self.nose_end {
            let d = self.nose_end - xi;
            d / (self.arc_radius * self.arc_radius - d * d).sqrt()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axi_core::units::fraction;

    fn reference_body() -> OgiveCylinder {
        OgiveCylinder::new(inches(22.5), inches(27.5), inches(4.25), inches(5.0)).unwrap()
    }

    #[test]
    fn cone_and_arc_join_smoothly() {
        let body = reference_body();
        let x0 = body.conical_station();
        let eps = inches(1.0e-6);

        let r_below = body.radius(x0 - eps).get::<inch>();
        let r_above = body.radius(x0 + eps).get::<inch>();
        assert!((r_below - r_above).abs() < 1.0e-5);

        let s_below = body.slope(x0 - eps);
        let s_above = body.slope(x0 + eps);
        assert!((s_below - s_above).abs() < 1.0e-5);
    }

    #[test]
    fn arc_meets_cylinder_tangentially() {
        let body = reference_body();
        let junction = inches(body.nose_end);
        assert!((body.radius(junction).get::<inch>() - 4.25).abs() < 1.0e-9);
        assert!(body.slope(junction).abs() < 1.0e-9);
        // Beyond the junction the body is a straight cylinder.
        let aft = inches(body.nose_end + 10.0);
        assert!((body.radius(aft).get::<inch>() - 4.25).abs() < 1.0e-12);
        assert_eq!(body.slope(aft), 0.0);
    }

    #[test]
    fn tangent_cone_passes_through_origin() {
        let body = reference_body();
        assert!(body.radius(inches(0.0)).get::<inch>().abs() < 1.0e-12);
        // r/x equals the slope anywhere on the conical segment.
        let x = inches(2.0);
        let ratio = body.radius(x).get::<inch>() / 2.0;
        assert!((ratio - body.slope(x)).abs() < 1.0e-12);
    }

    #[test]
    fn reference_dimensions() {
        let body = reference_body();
        // Shift moves the body about 0.8 in downstream.
        let total = body.length().get::<inch>();
        assert!(total > 50.7 && total < 50.9);
        let anchor = fraction(body.conical_station(), body.length());
        assert!(anchor > 0.11 && anchor < 0.12);
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(OgiveCylinder::new(inches(0.0), inches(27.5), inches(4.25), inches(5.0)).is_err());
        assert!(OgiveCylinder::new(inches(22.5), inches(27.5), inches(-1.0), inches(5.0)).is_err());
        assert!(OgiveCylinder::new(inches(22.5), inches(27.5), inches(4.25), inches(22.5)).is_err());
    }
}
