//! Vector arithmetic.
//!
//! Every function is pure and dimension-generic, except [`cross`], which only
//! exists in three dimensions. Operand checks run in a fixed order: operand
//! counts first ([`VectorError::InsufficientOperands`], then
//! [`VectorError::InvalidArgument`] for missing operands or mismatched
//! counts), and component counts last ([`VectorError::ShapeMismatch`]).

use glam::DVec3;

use crate::errors::VectorError;
use crate::vector::Vector;

pub use crate::types::{to_degrees, to_radians};

/// Reject zero-component vectors, which stand for a missing operand.
fn require_present(v: &Vector, index: usize) -> Result<(), VectorError> {
    if v.is_empty() {
        return Err(VectorError::invalid_argument(format!(
            "operand {index} has no components"
        )));
    }
    Ok(())
}

/// Check that every operand has the same number of components as the first.
fn require_same_shape<'a>(
    vectors: impl IntoIterator<Item = &'a Vector>,
) -> Result<usize, VectorError> {
    let mut iter = vectors.into_iter();
    let Some(first) = iter.next() else {
        return Ok(0);
    };
    let expected = first.dim();
    for (i, v) in iter.enumerate() {
        if v.dim() != expected {
            return Err(VectorError::ShapeMismatch {
                expected,
                found: v.dim(),
                index: i + 1,
            });
        }
    }
    Ok(expected)
}

fn require_pair(u: &Vector, v: &Vector) -> Result<usize, VectorError> {
    require_present(u, 0)?;
    require_present(v, 1)?;
    require_same_shape([u, v])
}

/// Component-wise sum of two or more vectors.
pub fn add(vectors: &[Vector]) -> Result<Vector, VectorError> {
    if vectors.len() < 2 {
        return Err(VectorError::InsufficientOperands {
            operation: "add",
            required: 2,
            given: vectors.len(),
        });
    }
    for (i, v) in vectors.iter().enumerate() {
        require_present(v, i)?;
    }
    let dim = require_same_shape(vectors)?;

    let mut sum = vec![0.0; dim];
    for v in vectors {
        for (acc, c) in sum.iter_mut().zip(v.iter()) {
            *acc += c;
        }
    }
    Ok(Vector::new(sum))
}

/// Multiply every component by `s`.
pub fn scale(s: f64, v: &Vector) -> Vector {
    v.iter().map(|c| s * c).collect()
}

/// `v - w`: the displacement from `w` to `v`.
pub fn subtract(v: &Vector, w: &Vector) -> Result<Vector, VectorError> {
    require_pair(v, w)?;
    Ok(v.iter().zip(w.iter()).map(|(a, b)| a - b).collect())
}

/// Euclidean norm. An empty vector has length 0.
pub fn length(v: &Vector) -> f64 {
    v.iter().map(|c| c * c).sum::<f64>().sqrt()
}

pub fn dot(u: &Vector, v: &Vector) -> Result<f64, VectorError> {
    require_pair(u, v)?;
    Ok(u.iter().zip(v.iter()).map(|(a, b)| a * b).sum())
}

/// Cross product of two 3-component vectors.
pub fn cross(u: &Vector, v: &Vector) -> Result<Vector, VectorError> {
    let as_3d = |w: &Vector| {
        DVec3::try_from(w).map_err(|_| VectorError::UnsupportedDimension {
            operation: "cross",
            expected: 3,
            found: w.dim(),
        })
    };
    Ok(Vector::from(as_3d(u)?.cross(as_3d(v)?)))
}

/// Angle between two non-zero vectors, in radians within `[0, π]`.
pub fn angle_between(u: &Vector, v: &Vector) -> Result<f64, VectorError> {
    let d = dot(u, v)?;
    let norms_sq = dot(u, u)? * dot(v, v)?;
    if norms_sq == 0.0 {
        return Err(VectorError::DomainError {
            operation: "angle_between",
            reason: "a vector has zero length",
        });
    }
    // atan2 keeps full precision near 0 and π, where acos of the cosine does not.
    let sin_part = (norms_sq - d * d).max(0.0).sqrt();
    Ok(sin_part.atan2(d))
}

/// `Σ scalars[i] * vectors[i]`.
///
/// Pairs each scalar with its vector and adds the scaled results, so the
/// operand requirements of [`add`] apply as well.
pub fn linear_combination(scalars: &[f64], vectors: &[Vector]) -> Result<Vector, VectorError> {
    if scalars.len() != vectors.len() {
        return Err(VectorError::invalid_argument(format!(
            "the same number of scalars and vectors is required, got {} scalars and {} vectors",
            scalars.len(),
            vectors.len()
        )));
    }
    if vectors.len() < 2 {
        return Err(VectorError::InsufficientOperands {
            operation: "linear_combination",
            required: 2,
            given: vectors.len(),
        });
    }
    let scaled: Vec<Vector> = scalars
        .iter()
        .zip(vectors)
        .map(|(&s, v)| scale(s, v))
        .collect();
    add(&scaled)
}

/// The vector of length 1 pointing the same way as `v`.
pub fn unit(v: &Vector) -> Result<Vector, VectorError> {
    let len = length(v);
    if len == 0.0 {
        return Err(VectorError::DomainError {
            operation: "unit",
            reason: "the vector has zero length",
        });
    }
    Ok(scale(1.0 / len, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn v<const N: usize>(c: [i32; N]) -> Vector {
        Vector::from(c)
    }

    #[test]
    fn add_two_and_three() {
        assert_eq!(add(&[v([1, 2]), v([3, 4])]).unwrap(), v([4, 6]));
        assert_eq!(add(&[v([1, 2]), v([3, 4]), v([5, 6])]).unwrap(), v([9, 12]));
    }

    #[test]
    fn add_needs_two_operands() {
        let err = add(&[v([1, 2, 3])]).unwrap_err();
        assert_eq!(
            err,
            VectorError::InsufficientOperands {
                operation: "add",
                required: 2,
                given: 1
            }
        );
        assert_eq!(add(&[]).unwrap_err().kind(), ErrorKind::InsufficientOperands);
    }

    #[test]
    fn add_reports_offending_operand() {
        let err = add(&[v([1, 2]), v([3, 4]), v([5, 6, 7])]).unwrap_err();
        assert_eq!(
            err,
            VectorError::ShapeMismatch {
                expected: 2,
                found: 3,
                index: 2
            }
        );
    }

    #[test]
    fn empty_operand_is_invalid_before_shape() {
        // The empty operand also differs in shape; presence is checked first.
        let err = add(&[v([1, 2]), Vector::default()]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            subtract(&Vector::default(), &v([1])).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            dot(&v([1]), &Vector::default()).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn scale_each_component() {
        assert_eq!(scale(2.0, &v([1, -2, 3])), v([2, -4, 6]));
        assert_eq!(scale(0.0, &v([1, 2])), v([0, 0]));
    }

    #[test]
    fn subtract_is_displacement() {
        assert_eq!(subtract(&v([1, 2, 3]), &v([4, 5, 6])).unwrap(), v([-3, -3, -3]));
    }

    #[test]
    fn length_is_euclidean() {
        assert_eq!(length(&v([3, 4])), 5.0);
        assert_eq!(length(&v([0, 0, 0])), 0.0);
        assert_eq!(length(&Vector::default()), 0.0);
    }

    #[test]
    fn dot_product() {
        assert_eq!(dot(&v([1, 2, 3]), &v([4, 5, 6])).unwrap(), 32.0);
        assert_eq!(
            dot(&v([1, 2, 3]), &v([4, 5])).unwrap_err().kind(),
            ErrorKind::ShapeMismatch
        );
    }

    #[test]
    fn cross_of_basis_vectors() {
        assert_eq!(cross(&v([1, 0, 0]), &v([0, 1, 0])).unwrap(), v([0, 0, 1]));
        assert_eq!(cross(&v([0, 1, 0]), &v([1, 0, 0])).unwrap(), v([0, 0, -1]));
    }

    #[test]
    fn cross_requires_three_components() {
        let err = cross(&v([1, 0]), &v([0, 1, 0])).unwrap_err();
        assert_eq!(
            err,
            VectorError::UnsupportedDimension {
                operation: "cross",
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            cross(&v([1, 0, 0]), &v([0, 1, 0, 0])).unwrap_err().kind(),
            ErrorKind::UnsupportedDimension
        );
    }

    #[test]
    fn angles() {
        let a = angle_between(&v([1, 0, 0]), &v([0, 1, 0])).unwrap();
        assert!((a - FRAC_PI_2).abs() < 1e-12);
        let a = angle_between(&v([1, 0]), &v([1, 1])).unwrap();
        assert!((a - FRAC_PI_4).abs() < 1e-12);
        let a = angle_between(&v([1, 1]), &v([-2, -2])).unwrap();
        assert!((a - PI).abs() < 1e-12);
    }

    #[test]
    fn antiparallel_angle_is_exactly_pi() {
        let a = angle_between(&v([1, 2, 3]), &v([-2, -4, -6])).unwrap();
        assert!((a - PI).abs() < 1e-12, "got {a}");
        let a = angle_between(&v([3, -1]), &v([-6, 2])).unwrap();
        assert!((a - PI).abs() < 1e-12, "got {a}");
    }

    #[test]
    fn angle_of_parallel_vectors_is_not_nan() {
        let u = Vector::from([0.1, 0.2, 0.3]);
        let a = angle_between(&u, &scale(3.0, &u)).unwrap();
        assert!(!a.is_nan());
        assert!(a.abs() < 1e-6);
    }

    #[test]
    fn angle_with_zero_vector_is_domain_error() {
        let err = angle_between(&v([0, 0]), &v([1, 1])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DomainError);
    }

    #[test]
    fn linear_combination_pairs_scalars() {
        assert_eq!(
            linear_combination(&[2.0, 3.0], &[v([1, 2]), v([3, 4])]).unwrap(),
            v([11, 16])
        );
        assert_eq!(
            linear_combination(&[1.0, 2.0, 3.0], &[v([1, 1, 1]), v([2, 2, 2]), v([3, 3, 3])]).unwrap(),
            v([14, 14, 14])
        );
    }

    #[test]
    fn linear_combination_count_mismatch() {
        let err = linear_combination(&[1.0], &[v([1, 2]), v([3, 4])]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("1 scalars and 2 vectors"));
    }

    #[test]
    fn linear_combination_of_one_pair() {
        let err = linear_combination(&[1.0], &[v([1, 2])]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientOperands);
    }

    #[test]
    fn unit_vector() {
        let u = unit(&v([3, 4])).unwrap();
        assert!(u.approx_eq(&Vector::from([0.6, 0.8]), 1e-12));
        assert_eq!(unit(&v([0, 0, 0])).unwrap_err().kind(), ErrorKind::DomainError);
        assert_eq!(unit(&Vector::default()).unwrap_err().kind(), ErrorKind::DomainError);
    }
}
