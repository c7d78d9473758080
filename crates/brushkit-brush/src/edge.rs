//! Line segments between consecutive face vertices.

use brushkit_math::{Point3, PointExt, Result, Vec3, VectorExt};

/// A segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Start point.
    pub start: Point3,
    /// End point.
    pub end: Point3,
}

impl Edge {
    /// Create an edge between two points.
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Unit direction from `start` to `end`.
    pub fn direction(&self) -> Result<Vec3> {
        (self.end - self.start).checked_normalize()
    }

    /// Midpoint of the segment.
    pub fn midpoint(&self) -> Point3 {
        Point3::from((self.start.coords + self.end.coords) * 0.5)
    }

    /// True if both edges run along parallel lines.
    pub fn is_parallel(&self, other: &Edge, threshold: f64) -> bool {
        (self.end - self.start).is_parallel_to(&(other.end - other.start), threshold)
    }

    /// True if both edges are orthogonal.
    pub fn is_perpendicular(&self, other: &Edge, threshold: f64) -> bool {
        (self.end - self.start).is_perpendicular_to(&(other.end - other.start), threshold)
    }

    /// True if both endpoints match, in the same order.
    pub fn similar_to(&self, other: &Edge, threshold: f64) -> bool {
        self.start.is_close(&other.start, threshold) && self.end.is_close(&other.end, threshold)
    }

    /// The same segment walked backwards.
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }
}
