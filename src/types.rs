//! Angle newtypes.
//!
//! The math functions take and return raw `f64` radians, as callers expect.
//! Camera settings in the render layer are in degrees, and these wrappers
//! keep the two units from being mixed up.

use std::f64::consts::PI;

/// Convert an angle in degrees to radians.
#[inline]
pub fn to_radians(angle_deg: f64) -> f64 {
    angle_deg * PI / 180.0
}

/// Convert an angle in radians to degrees.
#[inline]
pub fn to_degrees(angle_rad: f64) -> f64 {
    angle_rad * 180.0 / PI
}

/// Angle in degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Radians(pub f64);

impl Degrees {
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_radians(self) -> Radians {
        Radians(to_radians(self.0))
    }
}

impl Radians {
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(to_degrees(self.0))
    }

    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.0.sin_cos()
    }
}

impl From<Degrees> for Radians {
    fn from(d: Degrees) -> Radians {
        d.to_radians()
    }
}

/// Plain numbers are taken as degrees.
impl From<f64> for Degrees {
    fn from(value: f64) -> Degrees {
        Degrees(value)
    }
}

impl From<Radians> for Degrees {
    fn from(r: Radians) -> Degrees {
        r.to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_to_radians() {
        assert!((to_radians(180.0) - PI).abs() < 1e-12);
        assert!((to_radians(90.0) - PI / 2.0).abs() < 1e-12);
        assert_eq!(to_radians(0.0), 0.0);
    }

    #[test]
    fn radians_to_degrees() {
        assert!((to_degrees(PI) - 180.0).abs() < 1e-12);
        assert!((to_degrees(-PI / 4.0) + 45.0).abs() < 1e-12);
    }

    #[test]
    fn conversions_round_trip() {
        for deg in [-720.0, -30.0, 0.0, 45.0, 359.5] {
            assert!((to_degrees(to_radians(deg)) - deg).abs() < 1e-9);
        }
    }

    #[test]
    fn newtype_conversions() {
        let r: Radians = Degrees(90.0).into();
        assert!((r.raw() - PI / 2.0).abs() < 1e-12);
        let d: Degrees = Radians(PI).into();
        assert!((d.raw() - 180.0).abs() < 1e-12);
    }
}
