//! Per-iteration geometry snapshot of the marching bracket.

use axi_core::units::fraction;
use axi_geom::Geometry;

/// Geometry of the two axial stations bracketing one marching step.
///
/// Radii are normalized by the body length so they live in the same
/// nondimensional frame as the flow variables; slopes are dimensionless
/// as returned by the providers. Endpoint 1 is upstream (the predictor
/// face), endpoint 2 downstream (the corrector face). Both viscosity
/// scales are part of the bracket state even though the sweep differences
/// about the upstream face.
#[derive(Debug, Clone, Copy)]
pub struct StationFrame {
    pub x1: f64,
    pub x2: f64,
    pub body_r1: f64,
    pub body_r2: f64,
    pub body_slope1: f64,
    pub body_slope2: f64,
    pub shock_r1: f64,
    pub shock_r2: f64,
    pub shock_slope1: f64,
    pub shock_slope2: f64,
    pub mu1: f64,
    pub mu2: f64,
}

impl StationFrame {
    /// Query both providers at the bracket endpoints. Stations arrive
    /// nondimensional and are scaled by the body length for the lookup.
    pub(crate) fn sample<B: Geometry, S: Geometry>(
        x1: f64,
        x2: f64,
        body: &B,
        shock: &S,
        mu_inf: f64,
    ) -> Self {
        let bl = body.length();
        let s1 = bl * x1;
        let s2 = bl * x2;
        Self {
            x1,
            x2,
            body_r1: fraction(body.radius(s1), bl),
            body_r2: fraction(body.radius(s2), bl),
            body_slope1: body.slope(s1),
            body_slope2: body.slope(s2),
            shock_r1: fraction(shock.radius(s1), bl),
            shock_r2: fraction(shock.radius(s2), bl),
            shock_slope1: shock.slope(s1),
            shock_slope2: shock.slope(s2),
            mu1: mu_inf * x1,
            mu2: mu_inf * x2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axi_core::units::{degrees, inches};
    use axi_geom::ConeBoundary;

    #[test]
    fn cone_bracket_normalizes_by_body_length() {
        let body = ConeBoundary::new(degrees(10.0), inches(50.0)).unwrap();
        let shock = ConeBoundary::new(degrees(22.0), inches(50.0)).unwrap();
        let frame = StationFrame::sample(0.5, 0.6, &body, &shock, 2.0e-5);

        let tan10 = 10.0_f64.to_radians().tan();
        let tan22 = 22.0_f64.to_radians().tan();
        assert!((frame.body_r1 - 0.5 * tan10).abs() < 1.0e-12);
        assert!((frame.body_r2 - 0.6 * tan10).abs() < 1.0e-12);
        assert!((frame.shock_r1 - 0.5 * tan22).abs() < 1.0e-12);
        assert!((frame.shock_r2 - 0.6 * tan22).abs() < 1.0e-12);
        assert!((frame.body_slope1 - tan10).abs() < 1.0e-12);
        assert!((frame.shock_slope2 - tan22).abs() < 1.0e-12);
    }

    #[test]
    fn viscosity_scales_with_axial_station() {
        let body = ConeBoundary::new(degrees(10.0), inches(50.0)).unwrap();
        let shock = ConeBoundary::new(degrees(22.0), inches(50.0)).unwrap();
        let frame = StationFrame::sample(0.25, 0.75, &body, &shock, 2.0e-5);
        assert!((frame.mu1 - 0.25 * 2.0e-5).abs() < 1.0e-18);
        assert!((frame.mu2 - 0.75 * 2.0e-5).abs() < 1.0e-18);
        assert!(frame.mu1 < frame.mu2);
    }
}
