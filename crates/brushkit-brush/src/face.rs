//! Brush faces: one bounding plane plus its texture projection.

use brushkit_geom::Plane;
use brushkit_math::{Point3, Rotation, Tolerance, Vec3, VectorExt};
use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::error::Result;
use crate::texture::{TextureMatch, TextureProjection};

/// One bounding half-space of a brush.
///
/// The vertex ring is derived: it stays empty until the owning brush runs
/// vertex enumeration, and is not updated when the plane moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    id: usize,
    plane: Plane,
    texture: TextureProjection,
    #[serde(skip)]
    vertices: Vec<Point3>,
}

impl Face {
    /// Create a face with id `0`; the brush assigns the real id on insertion.
    pub fn new(plane: Plane, texture: TextureProjection) -> Self {
        Self {
            id: 0,
            plane,
            texture,
            vertices: Vec::new(),
        }
    }

    /// Id, unique within the owning brush.
    pub fn id(&self) -> usize {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: usize) {
        self.id = id;
    }

    /// The bounding plane.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// The texture projection.
    pub fn texture(&self) -> &TextureProjection {
        &self.texture
    }

    /// Mutable access to the texture projection.
    pub fn texture_mut(&mut self) -> &mut TextureProjection {
        &mut self.texture
    }

    /// Outward plane normal (not normalized).
    pub fn normal(&self) -> &Vec3 {
        self.plane.normal()
    }

    /// Unit normal of the texture plane (`u × v`).
    pub fn texture_normal(&self) -> Result<Vec3> {
        Ok(self.texture.unit_normal()?)
    }

    /// Vertex ring, clockwise seen from outside. Empty before enumeration.
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub(crate) fn clear_vertices(&mut self) {
        self.vertices.clear();
    }

    pub(crate) fn push_vertex(&mut self, vertex: Point3) {
        self.vertices.push(vertex);
    }

    /// Centroid with the default tolerances; see [`Face::centroid_within`].
    pub fn centroid(&self) -> Option<Point3> {
        self.centroid_within(&Tolerance::DEFAULT)
    }

    /// Mean of the vertex ring.
    ///
    /// `None` when the ring is empty or the plane points are collinear
    /// under `tol`.
    pub fn centroid_within(&self, tol: &Tolerance) -> Option<Point3> {
        if self.vertices.is_empty() || self.plane.collinear_points(tol) {
            return None;
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vec3::zeros(), |acc, v| acc + v.coords);
        Some(Point3::from(sum / self.vertices.len() as f64))
    }

    /// Closed loop of edges around the ring; empty below three vertices.
    pub fn edges(&self) -> Vec<Edge> {
        let n = self.vertices.len();
        if n < 3 {
            return Vec::new();
        }
        (0..n)
            .map(|i| Edge::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect()
    }

    /// True if the texture name matches `name` (case-insensitive).
    pub fn has_texture(&self, name: &str, mode: TextureMatch) -> bool {
        self.texture.matches(name, mode)
    }

    /// Replace the texture name.
    pub fn set_texture(&mut self, name: &str) {
        self.texture.set_name(name);
    }

    /// Validity with the default tolerances; see [`Face::is_valid_within`].
    pub fn is_valid(&self) -> bool {
        self.is_valid_within(&Tolerance::DEFAULT)
    }

    /// A face is valid when its plane points are not collinear and neither
    /// texture axis is parallel to the plane normal.
    pub fn is_valid_within(&self, tol: &Tolerance) -> bool {
        let n = self.plane.normal();
        !(self.plane.collinear_points(tol)
            || n.is_parallel_to(&self.texture.u_axis, tol.parallel)
            || n.is_parallel_to(&self.texture.v_axis, tol.parallel))
    }

    /// Translate the plane and shift the texture offsets to follow it.
    pub fn move_by(&mut self, offset: &Vec3) {
        self.plane.translate(offset);
        self.texture.update_offset(offset);
    }

    /// Rotate the plane about `center` and the texture axes with it.
    ///
    /// The offsets are then updated with a zero displacement, which leaves
    /// them unchanged; the call order is kept for map compatibility.
    pub fn rotate(&mut self, rotation: &Rotation, center: &Point3) {
        self.plane.rotate_about(rotation, center);
        self.texture.rotate_axes(rotation);
        self.texture.update_offset(&Vec3::zeros());
    }

    /// Rotate about the X axis through `center` by `angle` degrees.
    pub fn rotate_x(&mut self, angle: f64, center: &Point3) {
        self.rotate(&Rotation::x(angle), center);
    }

    /// Rotate about the Y axis through `center` by `angle` degrees.
    pub fn rotate_y(&mut self, angle: f64, center: &Point3) {
        self.rotate(&Rotation::y(angle), center);
    }

    /// Rotate about the Z axis through `center` by `angle` degrees.
    pub fn rotate_z(&mut self, angle: f64, center: &Point3) {
        self.rotate(&Rotation::z(angle), center);
    }

    /// Rotate about X, then Y, then Z through `center`.
    pub fn rotate_xyz(&mut self, phi: f64, theta: f64, psi: f64, center: &Point3) {
        self.rotate(&Rotation::xyz(phi, theta, psi), center);
    }

    /// Rotate about an arbitrary axis through the origin.
    pub fn rotate_around_axis(&mut self, angle: f64, axis: &Vec3) -> Result<()> {
        let rotation = Rotation::around_axis(angle, axis)?;
        self.rotate(&rotation, &Point3::origin());
        Ok(())
    }

    /// Order the vertex ring clockwise as seen from outside the brush.
    ///
    /// Selection sort over directions from the centroid: for each slot,
    /// candidates are limited to the forward half-plane through the current
    /// vertex and the normal, and the one best aligned with the current
    /// vertex direction is swapped into the next slot.
    pub(crate) fn sort_vertices_clockwise(&mut self, tol: &Tolerance) {
        let n = self.vertices.len();
        if n < 3 {
            return;
        }
        let center = self.centroid_within(tol);
        let (Some(center), Ok(normal)) = (center, self.plane.unit_normal()) else {
            return;
        };

        for i in 0..n - 2 {
            let current = self.vertices[i];
            let Ok(a) = (current - center).checked_normalize() else {
                continue;
            };
            let side = Plane::new(current, center, center + normal);

            let mut best: Option<(usize, f64)> = None;
            for m in i + 1..n {
                let candidate = self.vertices[m];
                if side.is_point_below(&candidate, tol.linear) {
                    continue;
                }
                let Ok(b) = (candidate - center).checked_normalize() else {
                    continue;
                };
                let alignment = a.dot(&b);
                if best.map_or(true, |(_, max)| alignment > max) {
                    best = Some((m, alignment));
                }
            }

            if let Some((m, _)) = best {
                self.vertices.swap(i + 1, m);
            }
        }
    }
}
