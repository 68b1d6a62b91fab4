use std::fmt;

use nalgebra::DVector;

use super::round_angle;
use crate::error::{GeometryError, Result};

/// An immutable n-dimensional vector (n >= 1).
///
/// All vector-vector arithmetic is elementwise and requires both operands
/// to have the same length. Scalar arithmetic is always defined.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    components: DVector<f64>,
}

impl Vector {
    /// Creates a vector from its components.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` if `components` is empty.
    pub fn new(components: Vec<f64>) -> Result<Self> {
        if components.is_empty() {
            return Err(GeometryError::DimensionMismatch {
                expected: 1,
                found: 0,
            }
            .into());
        }
        Ok(Self {
            components: DVector::from_vec(components),
        })
    }

    /// Creates a 2D vector.
    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            components: DVector::from_vec(vec![x, y]),
        }
    }

    /// Creates a 2D vector from an angle (radians, from the x axis) and a magnitude.
    #[must_use]
    pub fn from_polar(angle: f64, magnitude: f64) -> Self {
        Self::xy(magnitude * angle.cos(), magnitude * angle.sin())
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Always `false`; a vector has at least one component.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the component at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.components.get(index).copied()
    }

    /// Read-only view of the components.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        self.components.as_slice()
    }

    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` on unequal lengths.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_len(other)?;
        Ok(Self::from_raw(&self.components + &other.components))
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` on unequal lengths.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_len(other)?;
        Ok(Self::from_raw(&self.components - &other.components))
    }

    /// Elementwise product.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` on unequal lengths.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.check_len(other)?;
        Ok(Self::from_raw(self.components.component_mul(&other.components)))
    }

    /// Elementwise quotient.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` on unequal lengths.
    pub fn divide(&self, other: &Self) -> Result<Self> {
        self.check_len(other)?;
        Ok(Self::from_raw(self.components.component_div(&other.components)))
    }

    #[must_use]
    pub fn add_scalar(&self, n: f64) -> Self {
        Self::from_raw(self.components.add_scalar(n))
    }

    #[must_use]
    pub fn subtract_scalar(&self, n: f64) -> Self {
        Self::from_raw(self.components.add_scalar(-n))
    }

    #[must_use]
    pub fn multiply_scalar(&self, n: f64) -> Self {
        Self::from_raw(&self.components * n)
    }

    #[must_use]
    pub fn divide_scalar(&self, n: f64) -> Self {
        Self::from_raw(&self.components / n)
    }

    /// Dot product.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` on unequal lengths.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        self.check_len(other)?;
        Ok(self.components.dot(&other.components))
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.components.norm()
    }

    /// Unit vector with the same direction. A zero vector is returned unchanged.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return self.clone();
        }
        self.divide_scalar(mag)
    }

    /// Vector with the same direction and the given magnitude.
    #[must_use]
    pub fn set_magnitude(&self, magnitude: f64) -> Self {
        self.normalize().multiply_scalar(magnitude)
    }

    /// Clamps the magnitude to at most `magnitude`.
    #[must_use]
    pub fn limit_magnitude(&self, magnitude: f64) -> Self {
        if self.magnitude() > magnitude {
            self.set_magnitude(magnitude)
        } else {
            self.clone()
        }
    }

    /// Angle of a 2D vector from the positive x axis, in `(-pi, pi]`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DimensionMismatch` unless the vector is 2D.
    pub fn angle(&self) -> Result<f64> {
        if self.len() != 2 {
            return Err(GeometryError::DimensionMismatch {
                expected: 2,
                found: self.len(),
            }
            .into());
        }
        Ok(round_angle(self.components[1].atan2(self.components[0])))
    }

    fn from_raw(components: DVector<f64>) -> Self {
        Self { components }
    }

    fn check_len(&self, other: &Self) -> Result<()> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(GeometryError::DimensionMismatch {
                expected: self.len(),
                found: other.len(),
            }
            .into())
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanegeoError;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_4, SQRT_2};

    fn v(c: &[f64]) -> Vector {
        Vector::new(c.to_vec()).unwrap()
    }

    #[test]
    fn elementwise_vector_ops() {
        let a = v(&[1.0, 2.0, 6.0, 8.0]);
        let b = v(&[2.0, 2.0, 2.0, 2.0]);
        assert_eq!(a.multiply(&b).unwrap(), v(&[2.0, 4.0, 12.0, 16.0]));
        assert_eq!(a.add(&b).unwrap(), v(&[3.0, 4.0, 8.0, 10.0]));
        assert_eq!(a.subtract(&b).unwrap(), v(&[-1.0, 0.0, 4.0, 6.0]));
        assert_eq!(a.divide(&b).unwrap(), v(&[0.5, 1.0, 3.0, 4.0]));
    }

    #[test]
    fn scalar_ops() {
        let a = v(&[1.0, 2.0, 3.0, 5.0]);
        assert_eq!(a.multiply_scalar(5.0), v(&[5.0, 10.0, 15.0, 25.0]));
        assert_eq!(a.add_scalar(5.0), v(&[6.0, 7.0, 8.0, 10.0]));
        assert_eq!(a.subtract_scalar(1.0), v(&[0.0, 1.0, 2.0, 4.0]));
        let q = a.divide_scalar(5.0);
        assert_abs_diff_eq!(q.as_slice()[0], 0.2);
        assert_abs_diff_eq!(q.as_slice()[3], 1.0);
    }

    #[test]
    fn mismatched_lengths_fail() {
        let a = v(&[1.0, 2.0]);
        let b = v(&[1.0, 2.0, 3.0]);
        let err = a.add(&b).unwrap_err();
        assert!(matches!(
            err,
            PlanegeoError::Geometry(GeometryError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        ));
        assert!(a.dot(&b).is_err());
    }

    #[test]
    fn empty_vector_rejected() {
        assert!(Vector::new(Vec::new()).is_err());
    }

    #[test]
    fn magnitude_and_dot() {
        assert_abs_diff_eq!(Vector::xy(3.0, 4.0).magnitude(), 5.0);
        let d = v(&[1.0, 1.0, 1.0]).dot(&v(&[1.0, 0.0, 2.0])).unwrap();
        assert_abs_diff_eq!(d, 3.0);
    }

    #[test]
    fn normalize_and_magnitude_control() {
        let n = Vector::xy(4.0, 4.0).normalize();
        assert_abs_diff_eq!(n.as_slice()[0], SQRT_2 / 2.0, epsilon = 1e-12);
        let s = Vector::xy(4.0, 4.0).set_magnitude(SQRT_2);
        assert_abs_diff_eq!(s.as_slice()[0], 1.0, epsilon = 1e-12);
        let limited = Vector::xy(4.0, 4.0).limit_magnitude(10.0);
        assert_eq!(limited, Vector::xy(4.0, 4.0));
        assert_eq!(Vector::xy(0.0, 0.0).normalize(), Vector::xy(0.0, 0.0));
    }

    #[test]
    fn angle_only_for_2d() {
        assert_abs_diff_eq!(Vector::xy(1.0, 1.0).angle().unwrap(), FRAC_PI_4, epsilon = 1e-14);
        assert!(v(&[1.0, 1.0, 1.0]).angle().is_err());
    }

    #[test]
    fn from_polar_builds_2d() {
        let p = Vector::from_polar(FRAC_PI_4, SQRT_2);
        assert_eq!(p.len(), 2);
        assert_abs_diff_eq!(p.as_slice()[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.as_slice()[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn display_form() {
        assert_eq!(v(&[1.0, 2.5]).to_string(), "Vector(1, 2.5)");
    }
}
