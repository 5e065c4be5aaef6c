//! The [`Vector`] value type.

use std::fmt;
use std::ops::{Index, Mul, Neg};
use std::str::FromStr;

use glam::{DVec2, DVec3};

use crate::errors::{ParseError, VectorError};

/// An ordered, fixed-length sequence of `f64` components.
///
/// Vectors are immutable values of any dimension. Operations that combine
/// several vectors live in [`crate::math`] and check that every operand has
/// the same number of components.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    pub fn new(components: Vec<f64>) -> Self {
        Vector { components }
    }

    /// Number of components
    #[inline]
    pub fn dim(&self) -> usize {
        self.components.len()
    }

    /// A vector without components. No operation accepts one as an operand.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    #[inline]
    pub fn components(&self) -> &[f64] {
        &self.components
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.components.iter().copied()
    }

    /// Whether every component is within `epsilon` of the other vector's.
    /// Vectors of different dimension are never close.
    pub fn approx_eq(&self, other: &Vector, epsilon: f64) -> bool {
        self.dim() == other.dim()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    pub fn length(&self) -> f64 {
        crate::math::length(self)
    }

    pub fn dot(&self, other: &Vector) -> Result<f64, VectorError> {
        crate::math::dot(self, other)
    }

    pub fn unit(&self) -> Result<Vector, VectorError> {
        crate::math::unit(self)
    }

    pub fn scaled(&self, s: f64) -> Vector {
        crate::math::scale(s, self)
    }

    /// View a 3-component vector as a `DVec3`.
    pub fn to_dvec3(&self) -> Result<DVec3, VectorError> {
        DVec3::try_from(self)
    }
}

impl Index<usize> for Vector {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.components[i]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;
    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector {
            components: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Vector { components }
    }
}

impl From<&[f64]> for Vector {
    fn from(components: &[f64]) -> Self {
        Vector {
            components: components.to_vec(),
        }
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Vector {
            components: components.to_vec(),
        }
    }
}

impl<const N: usize> From<[i32; N]> for Vector {
    fn from(components: [i32; N]) -> Self {
        components.into_iter().map(f64::from).collect()
    }
}

impl<const N: usize> From<[i64; N]> for Vector {
    fn from(components: [i64; N]) -> Self {
        components.into_iter().map(|c| c as f64).collect()
    }
}

impl From<DVec2> for Vector {
    fn from(v: DVec2) -> Self {
        Vector::from(v.to_array())
    }
}

impl From<DVec3> for Vector {
    fn from(v: DVec3) -> Self {
        Vector::from(v.to_array())
    }
}

impl TryFrom<&Vector> for DVec3 {
    type Error = VectorError;

    fn try_from(v: &Vector) -> Result<DVec3, VectorError> {
        match v.components() {
            &[x, y, z] => Ok(DVec3::new(x, y, z)),
            other => Err(VectorError::UnsupportedDimension {
                operation: "a 3D coordinate",
                expected: 3,
                found: other.len(),
            }),
        }
    }
}

impl TryFrom<Vector> for DVec3 {
    type Error = VectorError;

    fn try_from(v: Vector) -> Result<DVec3, VectorError> {
        DVec3::try_from(&v)
    }
}

// ============================================================================
// Operators
// ============================================================================

// Only infallible operations get operators. Addition and friends can fail on
// mismatched shapes and stay as functions in `math`.

impl Neg for &Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        self.iter().map(|c| -c).collect()
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        -&self
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;
    fn mul(self, s: f64) -> Vector {
        crate::math::scale(s, self)
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;
    fn mul(self, v: &Vector) -> Vector {
        crate::math::scale(self, v)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

impl FromStr for Vector {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_vector(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_components_convert() {
        let v = Vector::from([1, 2, 3]);
        assert_eq!(v.components(), &[1.0, 2.0, 3.0]);
        assert_eq!(v.dim(), 3);
    }

    #[test]
    fn display_drops_trailing_zeroes() {
        assert_eq!(Vector::from([1, -2, 3]).to_string(), "(1, -2, 3)");
        assert_eq!(Vector::from([0.5, 2.25]).to_string(), "(0.5, 2.25)");
        assert_eq!(Vector::default().to_string(), "()");
    }

    #[test]
    fn dvec3_round_trip() {
        let v = Vector::from([1.0, 2.0, 3.0]);
        let d = v.to_dvec3().unwrap();
        assert_eq!(d, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector::from(d), v);
    }

    #[test]
    fn dvec3_rejects_other_dimensions() {
        let err = Vector::from([1.0, 2.0]).to_dvec3().unwrap_err();
        assert_eq!(
            err,
            VectorError::UnsupportedDimension {
                operation: "a 3D coordinate",
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn negation_and_scaling_operators() {
        let v = Vector::from([1, -2]);
        assert_eq!(-&v, Vector::from([-1, 2]));
        assert_eq!(&v * 3.0, Vector::from([3, -6]));
        assert_eq!(0.5 * &v, Vector::from([0.5, -1.0]));
    }

    #[test]
    fn approx_eq_checks_dimension() {
        let a = Vector::from([1.0, 2.0]);
        assert!(a.approx_eq(&Vector::from([1.0 + 1e-12, 2.0]), 1e-9));
        assert!(!a.approx_eq(&Vector::from([1.0, 2.0, 0.0]), 1e-9));
    }

    #[test]
    fn parses_from_str() {
        let v: Vector = "(1, 2.5, -3)".parse().unwrap();
        assert_eq!(v, Vector::from([1.0, 2.5, -3.0]));
    }
}
