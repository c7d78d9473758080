#![warn(missing_docs)]

//! Plane geometry for brushkit.
//!
//! A brush face is bounded by a [`Plane`] given as three ordered points.
//! The order is part of the plane's identity: it fixes the normal
//! direction, and with it which side of the plane is "inside".

use brushkit_math::{Point3, Result, Rotation, Tolerance, Vec3, VectorExt};
use serde::{Deserialize, Serialize};

// =============================================================================
// Plane
// =============================================================================

/// A plane through three ordered, non-collinear points.
///
/// `normal = (p1 - p2) × (p3 - p2)` and `d = -normal · p1`. The normal is
/// not normalized. The half-space `{x : normal·x + d <= 0}` is the inside
/// of any brush this plane bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Point3; 3]", into = "[Point3; 3]")]
pub struct Plane {
    points: [Point3; 3],
    normal: Vec3,
    d: f64,
}

impl Plane {
    /// Create a plane from three points, in order.
    pub fn new(p1: Point3, p2: Point3, p3: Point3) -> Self {
        let mut plane = Self {
            points: [p1, p2, p3],
            normal: Vec3::zeros(),
            d: 0.0,
        };
        plane.update_derived();
        plane
    }

    fn update_derived(&mut self) {
        let [p1, p2, p3] = &self.points;
        self.normal = (p1 - p2).cross(&(p3 - p2));
        self.d = -self.normal.dot(&p1.coords);
    }

    /// The three defining points, in their original order.
    pub fn points(&self) -> &[Point3; 3] {
        &self.points
    }

    /// First defining point.
    pub fn p1(&self) -> &Point3 {
        &self.points[0]
    }

    /// Second defining point.
    pub fn p2(&self) -> &Point3 {
        &self.points[1]
    }

    /// Third defining point.
    pub fn p3(&self) -> &Point3 {
        &self.points[2]
    }

    /// Normal vector (not normalized).
    pub fn normal(&self) -> &Vec3 {
        &self.normal
    }

    /// Unit normal, failing when the points are collinear.
    pub fn unit_normal(&self) -> Result<Vec3> {
        self.normal.checked_normalize()
    }

    /// Plane offset: `-normal · p1`.
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Raw plane equation `normal · p + d`, scaled by the normal length.
    pub fn evaluate(&self, p: &Point3) -> f64 {
        self.normal.dot(&p.coords) + self.d
    }

    /// Signed Euclidean distance from the plane; positive is outside.
    ///
    /// Returns `0.0` for a plane with collinear points.
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        let len = self.normal.norm();
        if len == 0.0 {
            return 0.0;
        }
        self.evaluate(p) / len
    }

    /// Perpendicular distance between the plane and a point.
    pub fn distance_to_point(&self, p: &Point3) -> f64 {
        self.signed_distance(p).abs()
    }

    /// Distance between two parallel planes, or `0.0` if they intersect.
    pub fn distance_to_plane(&self, other: &Plane, tol: &Tolerance) -> f64 {
        if self.is_parallel(other, tol) {
            self.distance_to_point(other.p1())
        } else {
            0.0
        }
    }

    /// True if the three points are collinear (no defined normal).
    ///
    /// Measured relative to the edge lengths so it is scale independent.
    pub fn collinear_points(&self, tol: &Tolerance) -> bool {
        let ab = self.points[1] - self.points[0];
        let ac = self.points[2] - self.points[0];
        self.normal.norm() <= tol.parallel * ab.norm() * ac.norm()
    }

    /// True if both normals lie on the same line.
    pub fn is_parallel(&self, other: &Plane, tol: &Tolerance) -> bool {
        self.normal.is_parallel_to(&other.normal, tol.parallel)
    }

    /// True if the normals are orthogonal.
    pub fn is_perpendicular(&self, other: &Plane, tol: &Tolerance) -> bool {
        self.normal.is_perpendicular_to(&other.normal, tol.parallel)
    }

    /// True if both planes describe the same infinite plane (either facing).
    pub fn is_overlap(&self, other: &Plane, tol: &Tolerance) -> bool {
        self.is_parallel(other, tol) && self.distance_to_plane(other, tol) < tol.linear
    }

    /// True if `p` is in front of (outside) the plane by more than `threshold`.
    pub fn is_point_above(&self, p: &Point3, threshold: f64) -> bool {
        self.signed_distance(p) > threshold
    }

    /// True if `p` is behind (inside) the plane by more than `threshold`.
    pub fn is_point_below(&self, p: &Point3, threshold: f64) -> bool {
        self.signed_distance(p) < -threshold
    }

    /// True if `p` lies on the plane within `threshold`.
    pub fn is_point_on_plane(&self, p: &Point3, threshold: f64) -> bool {
        self.signed_distance(p).abs() < threshold
    }

    /// Orthogonal projection of `p` onto the plane.
    pub fn project_point(&self, p: &Point3) -> Result<Point3> {
        let n = self.unit_normal()?;
        Ok(p - n * (p - self.points[0]).dot(&n))
    }

    /// Translate the defining points by `offset`.
    pub fn translate(&mut self, offset: &Vec3) {
        for p in &mut self.points {
            *p += *offset;
        }
        self.update_derived();
    }

    /// Rotate the defining points about `center`.
    pub fn rotate_about(&mut self, rotation: &Rotation, center: &Point3) {
        for p in &mut self.points {
            *p = rotation.apply_point_about(p, center);
        }
        self.update_derived();
    }

    /// Iterate over the defining points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point3> {
        self.points.iter()
    }
}

impl From<[Point3; 3]> for Plane {
    fn from([p1, p2, p3]: [Point3; 3]) -> Self {
        Self::new(p1, p2, p3)
    }
}

impl From<Plane> for [Point3; 3] {
    fn from(plane: Plane) -> Self {
        plane.points
    }
}

impl<'a> IntoIterator for &'a Plane {
    type Item = &'a Point3;
    type IntoIter = std::slice::Iter<'a, Point3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Intersection
// =============================================================================

/// Intersect three planes, returning their single common point.
///
/// Solves `ni · x + di = 0` by Cramer's rule written with cross products.
/// Returns `None` when the triple product is degenerate relative to the
/// normal magnitudes (two planes parallel, or all three sharing a line).
pub fn intersect_planes(a: &Plane, b: &Plane, c: &Plane, tol: &Tolerance) -> Option<Point3> {
    let (n1, n2, n3) = (a.normal(), b.normal(), c.normal());
    let cross23 = n2.cross(n3);
    let denom = n1.dot(&cross23);
    let scale = n1.norm() * n2.norm() * n3.norm();
    if tol.is_degenerate(denom, scale) {
        return None;
    }
    let p = -(a.d() * cross23 + b.d() * n3.cross(n1) + c.d() * n1.cross(n2)) / denom;
    Some(Point3::from(p))
}
