#![warn(missing_docs)]

//! Math types for brushkit.
//!
//! Thin wrappers around nalgebra providing the vector algebra used by
//! brush reconstruction: points, vectors, rotation matrices and the
//! tolerance constants every geometric comparison goes through.
//!
//! Angles are expressed in degrees throughout, matching the map format.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// Errors raised by vector algebra.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// A zero-length vector was normalized (or used as a rotation axis).
    #[error("domain error: can't normalize a zero-length vector")]
    ZeroLengthVector,
}

/// Result type for math operations.
pub type Result<T> = std::result::Result<T, MathError>;

// =============================================================================
// Vector extensions
// =============================================================================

/// Tolerance-aware queries on [`Vec3`].
pub trait VectorExt {
    /// Unit vector in the same direction, failing on zero length.
    fn checked_normalize(&self) -> Result<Vec3>;

    /// True if every component is below `threshold` in magnitude.
    fn is_null(&self, threshold: f64) -> bool;

    /// True if both vectors lie on the same line (either orientation).
    ///
    /// The test is relative: `||a·b| - |a||b|| <= threshold * |a||b|`.
    fn is_parallel_to(&self, other: &Vec3, threshold: f64) -> bool;

    /// True if the vectors are orthogonal: `|a·b| <= threshold * |a||b|`.
    fn is_perpendicular_to(&self, other: &Vec3, threshold: f64) -> bool;

    /// Cosine of the angle between both vectors.
    fn cosine_to(&self, other: &Vec3) -> Result<f64>;
}

impl VectorExt for Vec3 {
    fn checked_normalize(&self) -> Result<Vec3> {
        let len = self.norm();
        if len == 0.0 || !len.is_finite() {
            return Err(MathError::ZeroLengthVector);
        }
        Ok(self / len)
    }

    fn is_null(&self, threshold: f64) -> bool {
        self.x.abs() < threshold && self.y.abs() < threshold && self.z.abs() < threshold
    }

    fn is_parallel_to(&self, other: &Vec3, threshold: f64) -> bool {
        let magnitude = self.norm() * other.norm();
        (self.dot(other).abs() - magnitude).abs() <= threshold * magnitude
    }

    fn is_perpendicular_to(&self, other: &Vec3, threshold: f64) -> bool {
        self.dot(other).abs() <= threshold * self.norm() * other.norm()
    }

    fn cosine_to(&self, other: &Vec3) -> Result<f64> {
        let magnitude = self.norm() * other.norm();
        if magnitude == 0.0 {
            return Err(MathError::ZeroLengthVector);
        }
        Ok(self.dot(other) / magnitude)
    }
}

/// Tolerance-aware queries on [`Point3`].
pub trait PointExt {
    /// Coordinate-wise closeness: every `|Δ| < threshold`.
    fn is_close(&self, other: &Point3, threshold: f64) -> bool;

    /// True if the point is within `threshold` of the origin on every axis.
    fn is_zero(&self, threshold: f64) -> bool;
}

impl PointExt for Point3 {
    fn is_close(&self, other: &Point3, threshold: f64) -> bool {
        (self.x - other.x).abs() < threshold
            && (self.y - other.y).abs() < threshold
            && (self.z - other.z).abs() < threshold
    }

    fn is_zero(&self, threshold: f64) -> bool {
        self.coords.is_null(threshold)
    }
}

// =============================================================================
// Rotation
// =============================================================================

/// A 3x3 linear transform, used for rotations and reflections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// The underlying 3x3 matrix.
    pub matrix: Matrix3<f64>,
}

impl Rotation {
    /// Identity rotation.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Rotation about the X axis by `angle` degrees.
    pub fn x(angle: f64) -> Self {
        let (s, c) = angle.to_radians().sin_cos();
        Self {
            matrix: Matrix3::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c),
        }
    }

    /// Rotation about the Y axis by `angle` degrees.
    pub fn y(angle: f64) -> Self {
        let (s, c) = angle.to_radians().sin_cos();
        Self {
            matrix: Matrix3::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c),
        }
    }

    /// Rotation about the Z axis by `angle` degrees.
    pub fn z(angle: f64) -> Self {
        let (s, c) = angle.to_radians().sin_cos();
        Self {
            matrix: Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Rotation about X by `phi`, then Y by `theta`, then Z by `psi` (`Rz·Ry·Rx`).
    pub fn xyz(phi: f64, theta: f64, psi: f64) -> Self {
        Self::z(psi).then(&Self::y(theta)).then(&Self::x(phi))
    }

    /// Rotation about an arbitrary axis through the origin by `angle` degrees.
    ///
    /// Uses Rodrigues' rotation formula. The axis does not need to be
    /// normalized but must not be zero.
    pub fn around_axis(angle: f64, axis: &Vec3) -> Result<Self> {
        let axis = axis.checked_normalize()?;
        let (s, c) = angle.to_radians().sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (axis.x, axis.y, axis.z);
        Ok(Self {
            matrix: Matrix3::new(
                t * x * x + c,
                t * x * y - s * z,
                t * x * z + s * y,
                t * x * y + s * z,
                t * y * y + c,
                t * y * z - s * x,
                t * x * z - s * y,
                t * y * z + s * x,
                t * z * z + c,
            ),
        })
    }

    /// Mirror across the XY plane (negates Z).
    pub fn reflection_xy() -> Self {
        Self {
            matrix: Matrix3::from_diagonal(&Vec3::new(1.0, 1.0, -1.0)),
        }
    }

    /// Mirror across the XZ plane (negates Y).
    pub fn reflection_xz() -> Self {
        Self {
            matrix: Matrix3::from_diagonal(&Vec3::new(1.0, -1.0, 1.0)),
        }
    }

    /// Mirror across the YZ plane (negates X).
    pub fn reflection_yz() -> Self {
        Self {
            matrix: Matrix3::from_diagonal(&Vec3::new(-1.0, 1.0, 1.0)),
        }
    }

    /// Compose: `self * other`, so `other` is applied first.
    pub fn then(&self, other: &Rotation) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a vector.
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        self.matrix * v
    }

    /// Transform a point about `center` instead of the origin.
    pub fn apply_point_about(&self, p: &Point3, center: &Point3) -> Point3 {
        center + self.matrix * (p - center)
    }

    /// Determinant of the matrix (`1` for rotations, `-1` for reflections).
    pub fn determinant(&self) -> f64 {
        self.matrix.determinant()
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

// =============================================================================
// Tolerance
// =============================================================================

/// Tolerance constants for geometric comparisons.
///
/// Plane normals in this system are not normalized (they are the cross
/// product of two plane edges), so every half-space test divides by the
/// normal length before comparing against `linear`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Signed-distance threshold for half-space and on-plane tests.
    pub linear: f64,
    /// Threshold for parallel, perpendicular and null vector tests.
    pub parallel: f64,
    /// Relative threshold below which a three-plane determinant is degenerate.
    /// Zero restores an exact `== 0` test.
    pub determinant: f64,
    /// Relative coordinate-wise threshold for merging duplicate vertices.
    pub vertex_merge: f64,
}

impl Tolerance {
    /// Default tolerances.
    pub const DEFAULT: Self = Self {
        linear: 1e-6,
        parallel: 1e-4,
        determinant: 1e-12,
        vertex_merge: 1e-9,
    };

    /// Check if two points are the same vertex within `vertex_merge`.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        let scale = a.coords.amax().max(b.coords.amax()).max(1.0);
        (a - b).amax() <= self.vertex_merge * scale
    }

    /// Check if a signed distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if a triple product is degenerate relative to its operands.
    pub fn is_degenerate(&self, determinant: f64, scale: f64) -> bool {
        determinant.abs() <= self.determinant * scale
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
