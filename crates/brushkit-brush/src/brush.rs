//! Convex brushes: an ordered set of faces bounding one solid.

use brushkit_math::{Point3, Rotation, Tolerance, Vec3};
use serde::{Deserialize, Serialize};

use crate::bounds::Aabb3;
use crate::edge::Edge;
use crate::enumerate::enumerate_vertices;
use crate::error::{BrushError, Result};
use crate::face::Face;
use crate::texture::TextureMatch;

/// Fewest half-spaces that can bound a finite 3D region.
pub const MIN_FACES: usize = 4;

/// Which point of the brush [`Brush::move_to`] places at the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveReference {
    /// Mean of the brush vertices.
    #[default]
    Centroid,
    /// Center of the axis-aligned bounding box.
    BoundingBox,
}

/// A convex solid defined as the intersection of its faces' half-spaces.
///
/// # Vertex cache
///
/// Vertices (and the per-face rings) are enumerated on first access and
/// then cached. The cache is **not** invalidated by any mutation: after
/// moving, rotating or editing faces, call
/// [`invalidate_vertices`](Self::invalidate_vertices) or
/// [`recompute_vertices`](Self::recompute_vertices) before querying
/// geometry again. Queries on a stale cache silently return the old
/// geometry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Brush {
    id: usize,
    faces: Vec<Face>,
    face_counter: usize,
    #[serde(default)]
    tolerance: Tolerance,
    #[serde(skip)]
    vertices: Option<Vec<Point3>>,
    #[serde(skip)]
    origin: Option<Point3>,
}

impl Brush {
    /// Build a brush from at least [`MIN_FACES`] faces and enumerate its
    /// vertices eagerly.
    pub fn new(faces: Vec<Face>) -> Result<Self> {
        if faces.len() < MIN_FACES {
            return Err(BrushError::invalid_argument(format!(
                "expected {MIN_FACES} or more faces but found {}",
                faces.len()
            )));
        }
        let mut brush = Self::empty();
        brush.add_faces(faces);
        brush.recompute_vertices();
        Ok(brush)
    }

    /// A brush with no faces, for incremental building.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Use `tolerance` for every geometric test of this brush.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Tolerances used by this brush.
    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    /// Replace the tolerances. Leaves the vertex cache untouched.
    pub fn set_tolerance(&mut self, tolerance: Tolerance) {
        self.tolerance = tolerance;
    }

    /// Brush id, assigned by the owning entity.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Set the brush id.
    pub fn set_id(&mut self, id: usize) {
        self.id = id;
    }

    /// Append faces, giving each the next sequential id.
    ///
    /// The vertex cache is not invalidated.
    pub fn add_faces(&mut self, faces: impl IntoIterator<Item = Face>) {
        for mut face in faces {
            face.set_id(self.face_counter);
            self.face_counter += 1;
            self.faces.push(face);
        }
    }

    /// Faces in insertion order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Mutable faces. Edits leave the vertex cache stale.
    pub fn faces_mut(&mut self) -> &mut [Face] {
        &mut self.faces
    }

    /// Face with the given id.
    pub fn face(&self, id: usize) -> Option<&Face> {
        self.faces.iter().find(|f| f.id() == id)
    }

    /// Number of faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Iterate over the faces.
    pub fn iter(&self) -> std::slice::Iter<'_, Face> {
        self.faces.iter()
    }

    // =========================================================================
    // Vertex cache
    // =========================================================================

    /// Brush vertices, enumerating them on first access.
    pub fn vertices(&mut self) -> &[Point3] {
        let tol = self.tolerance;
        self.vertices
            .get_or_insert_with(|| enumerate_vertices(&mut self.faces, &tol))
    }

    /// The cached vertices, without computing them.
    pub fn cached_vertices(&self) -> Option<&[Point3]> {
        self.vertices.as_deref()
    }

    /// Drop the cached vertices, face rings and origin.
    pub fn invalidate_vertices(&mut self) {
        self.vertices = None;
        self.origin = None;
        for face in &mut self.faces {
            face.clear_vertices();
        }
    }

    /// Enumerate the vertices again, replacing any cached result.
    pub fn recompute_vertices(&mut self) -> &[Point3] {
        self.invalidate_vertices();
        self.vertices()
    }

    /// Cached centroid; cleared together with the vertex cache.
    pub fn origin(&mut self) -> Point3 {
        if let Some(origin) = self.origin {
            return origin;
        }
        let origin = self.centroid();
        self.origin = Some(origin);
        origin
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Mean of the brush vertices, or the origin when there are none.
    pub fn centroid(&mut self) -> Point3 {
        let vertices = self.vertices();
        if vertices.is_empty() {
            return Point3::origin();
        }
        let sum = vertices
            .iter()
            .fold(Vec3::zeros(), |acc, v| acc + v.coords);
        Point3::from(sum / vertices.len() as f64)
    }

    /// Bounding box of the vertices, `None` when there are none.
    pub fn bounds(&mut self) -> Option<Aabb3> {
        Aabb3::from_points(self.vertices())
    }

    /// Center of the bounding box, or the origin when there are no vertices.
    pub fn bounding_box_origin(&mut self) -> Point3 {
        self.bounds()
            .map(|aabb| aabb.center())
            .unwrap_or_else(Point3::origin)
    }

    /// Edges of every face ring (each shared edge appears once per face).
    pub fn edges(&mut self) -> Vec<Edge> {
        self.vertices();
        self.faces.iter().flat_map(Face::edges).collect()
    }

    /// True if `p` lies inside or on every face's half-space.
    ///
    /// A brush without faces contains nothing.
    pub fn is_point_inside(&self, p: &Point3) -> bool {
        !self.faces.is_empty()
            && self
                .faces
                .iter()
                .all(|f| !f.plane().is_point_above(p, self.tolerance.linear))
    }

    /// Approximate overlap test: true if a vertex of either brush lies
    /// inside the other.
    ///
    /// Convex solids that cross without either one's corners entering the
    /// other (two slabs forming a plus sign) are reported as disjoint.
    pub fn collide_with(&mut self, other: &mut Brush) -> bool {
        let (Some(mut a), Some(b)) = (self.bounds(), other.bounds()) else {
            return false;
        };
        a.expand(self.tolerance.linear.max(other.tolerance.linear));
        if !a.overlaps(&b) {
            return false;
        }
        if self.vertices().iter().any(|v| other.is_point_inside(v)) {
            return true;
        }
        other.vertices().iter().any(|v| self.is_point_inside(v))
    }

    /// True if any face uses the texture.
    pub fn has_texture(&self, name: &str, mode: TextureMatch) -> bool {
        self.faces.iter().any(|f| f.has_texture(name, mode))
    }

    /// Apply one texture to every face.
    pub fn set_texture(&mut self, name: &str) {
        for face in &mut self.faces {
            face.set_texture(name);
        }
    }

    /// Replace `old` with `new` on the faces that use `old`.
    pub fn replace_texture(&mut self, old: &str, new: &str) {
        for face in &mut self.faces {
            if face.has_texture(old, TextureMatch::Exact) {
                face.set_texture(new);
            }
        }
    }

    // =========================================================================
    // Transforms (none of these refresh the vertex cache)
    // =========================================================================

    /// Translate every face by `(dx, dy, dz)`.
    pub fn move_by(&mut self, dx: f64, dy: f64, dz: f64) {
        let offset = Vec3::new(dx, dy, dz);
        for face in &mut self.faces {
            face.move_by(&offset);
        }
    }

    /// Translate so the chosen reference point lands on `target`.
    ///
    /// The reference is measured from the current vertex cache.
    pub fn move_to(&mut self, target: &Point3, reference: MoveReference) {
        let from = match reference {
            MoveReference::Centroid => self.centroid(),
            MoveReference::BoundingBox => self.bounding_box_origin(),
        };
        let offset = target - from;
        self.move_by(offset.x, offset.y, offset.z);
    }

    fn rotate(&mut self, rotation: &Rotation, center: &Point3) {
        for face in &mut self.faces {
            face.rotate(rotation, center);
        }
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

    /// Rotate about X by `phi`, Y by `theta`, then Z by `psi`, through `center`.
    pub fn rotate_xyz(&mut self, phi: f64, theta: f64, psi: f64, center: &Point3) {
        self.rotate(&Rotation::xyz(phi, theta, psi), center);
    }

    /// Rotate about an arbitrary axis through the origin by `angle` degrees.
    pub fn rotate_around_axis(&mut self, angle: f64, axis: &Vec3) -> Result<()> {
        let rotation = Rotation::around_axis(angle, axis)?;
        self.rotate(&rotation, &Point3::origin());
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Brush {
    type Item = &'a Face;
    type IntoIter = std::slice::Iter<'a, Face>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
