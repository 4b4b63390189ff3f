// axi-core/src/units.rs

use uom::si::f64::{Angle as UomAngle, Length as UomLength};

// Public canonical unit types (f64). The solver core is nondimensional;
// these appear at the geometry boundary and in case assembly.
pub type Angle = UomAngle;
pub type Length = UomLength;

#[inline]
pub fn inches(v: f64) -> Length {
    use uom::si::length::inch;
    Length::new::<inch>(v)
}

#[inline]
pub fn degrees(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

/// Dimensionless value of a length ratio (e.g. station normalized by body
/// length).
#[inline]
pub fn fraction(num: Length, den: Length) -> f64 {
    use uom::si::ratio::ratio;
    (num / den).get::<ratio>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _l = inches(4.25);
        let _a = degrees(22.0);
    }

    #[test]
    fn fraction_is_unit_free() {
        let f = fraction(inches(11.0), inches(44.0));
        assert!((f - 0.25).abs() < 1e-12);
    }
}
