//! Vertex enumeration: recovering a brush's corners from its planes.
//!
//! Every triple of face planes is intersected; a candidate point survives
//! if it lies inside (or on) every other face's half-space. Survivors are
//! deduplicated, attached to the faces that produced them, and each face
//! ring is finally sorted clockwise.
//!
//! The scan is `O(n^4)` in the face count, which stays cheap for the 4-40
//! faces real brushes carry.

use brushkit_geom::intersect_planes;
use brushkit_math::{Point3, Tolerance};
use rayon::prelude::*;

use crate::brush::Brush;
use crate::face::Face;

/// Counters collected during one enumeration pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct EnumerationStats {
    /// Plane triples examined.
    pub triples: usize,
    /// Triples without a unique intersection point.
    pub degenerate: usize,
    /// Intersections outside at least one other half-space.
    pub outside: usize,
    /// Intersections equal to an already accepted vertex.
    pub duplicates: usize,
}

/// Enumerate the vertices bounded by `faces`, filling each face's ring.
///
/// Any previous face rings are discarded first. Returns the brush vertices
/// in acceptance order.
pub(crate) fn enumerate_vertices(faces: &mut [Face], tol: &Tolerance) -> Vec<Point3> {
    let (vertices, stats) = enumerate_with_stats(faces, tol);
    tracing::debug!(
        faces = faces.len(),
        vertices = vertices.len(),
        triples = stats.triples,
        degenerate = stats.degenerate,
        outside = stats.outside,
        duplicates = stats.duplicates,
        "enumerated brush vertices"
    );
    vertices
}

pub(crate) fn enumerate_with_stats(
    faces: &mut [Face],
    tol: &Tolerance,
) -> (Vec<Point3>, EnumerationStats) {
    for face in faces.iter_mut() {
        face.clear_vertices();
    }

    let n = faces.len();
    let mut stats = EnumerationStats::default();
    let mut vertices: Vec<Point3> = Vec::new();

    for i in 0..n.saturating_sub(2) {
        for j in i + 1..n - 1 {
            for k in j + 1..n {
                stats.triples += 1;
                let Some(vertex) =
                    intersect_planes(faces[i].plane(), faces[j].plane(), faces[k].plane(), tol)
                else {
                    tracing::trace!(i, j, k, "degenerate plane triple");
                    stats.degenerate += 1;
                    continue;
                };

                let outside = (0..n)
                    .filter(|&m| m != i && m != j && m != k)
                    .any(|m| faces[m].plane().is_point_above(&vertex, tol.linear));
                if outside {
                    stats.outside += 1;
                    continue;
                }

                // A corner where more than three planes meet is produced by
                // several triples; later triples only complete the face rings.
                let vertex = match vertices.iter().find(|v| tol.points_equal(v, &vertex)) {
                    Some(existing) => {
                        stats.duplicates += 1;
                        *existing
                    }
                    None => {
                        vertices.push(vertex);
                        vertex
                    }
                };
                for f in [i, j, k] {
                    attach(&mut faces[f], vertex);
                }
            }
        }
    }

    for face in faces.iter_mut() {
        face.sort_vertices_clockwise(tol);
        if face.vertices().len() < 3 {
            tracing::warn!(
                face = face.id(),
                vertices = face.vertices().len(),
                "face does not bound the brush"
            );
        }
    }

    (vertices, stats)
}

fn attach(face: &mut Face, vertex: Point3) {
    if !face.vertices().contains(&vertex) {
        face.push_vertex(vertex);
    }
}

/// Compute the vertex cache of every brush, in parallel across brushes.
///
/// Brushes whose cache is already computed are left untouched.
pub fn enumerate_all(brushes: &mut [Brush]) {
    brushes.par_iter_mut().for_each(|brush| {
        brush.vertices();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{cuboid_faces, is_clockwise};
    use brushkit_geom::Plane;
    use brushkit_math::Vec3;

    use crate::texture::TextureProjection;

    fn pyramid_faces() -> Vec<Face> {
        // Square base at z = 0 from (-1,-1) to (1,1), apex at (0,0,1).
        // Sides run counter-clockwise around the base seen from above.
        let apex = Point3::new(0.0, 0.0, 1.0);
        let tex = || TextureProjection::with_axes("rock", Vec3::x(), -Vec3::y());
        let side = |a: Point3, b: Point3| Face::new(Plane::new(a, apex, b), tex());
        vec![
            Face::new(
                Plane::new(
                    Point3::new(-1.0, 1.0, 0.0),
                    Point3::new(-1.0, -1.0, 0.0),
                    Point3::new(1.0, -1.0, 0.0),
                ),
                tex(),
            ),
            side(Point3::new(-1.0, -1.0, 0.0), Point3::new(1.0, -1.0, 0.0)),
            side(Point3::new(1.0, -1.0, 0.0), Point3::new(1.0, 1.0, 0.0)),
            side(Point3::new(1.0, 1.0, 0.0), Point3::new(-1.0, 1.0, 0.0)),
            side(Point3::new(-1.0, 1.0, 0.0), Point3::new(-1.0, -1.0, 0.0)),
        ]
    }

    #[test]
    fn test_cube_has_eight_vertices() {
        let mut faces = cuboid_faces(Point3::origin(), Vec3::new(1.0, 1.0, 1.0), "null");
        let (vertices, stats) = enumerate_with_stats(&mut faces, &Tolerance::DEFAULT);
        assert_eq!(vertices.len(), 8);
        assert_eq!(stats.triples, 20);
        // 3 pairs of parallel planes, each pair combined with 4 other planes.
        assert_eq!(stats.degenerate, 12);
        assert_eq!(stats.duplicates, 0);
        for face in &faces {
            assert_eq!(face.vertices().len(), 4);
            assert!(is_clockwise(face.vertices(), face.normal()));
        }
    }

    #[test]
    fn test_pyramid_apex_reaches_every_side() {
        let mut faces = pyramid_faces();
        let (vertices, stats) = enumerate_with_stats(&mut faces, &Tolerance::DEFAULT);
        assert_eq!(vertices.len(), 5);
        assert!(stats.duplicates > 0);
        assert_eq!(faces[0].vertices().len(), 4);
        for side in &faces[1..] {
            assert_eq!(side.vertices().len(), 3);
            let apex = Point3::new(0.0, 0.0, 1.0);
            assert!(side.vertices().iter().any(|v| (v - apex).norm() < 1e-9));
            assert!(is_clockwise(side.vertices(), side.normal()));
        }
    }

    #[test]
    fn test_vertices_satisfy_every_half_space() {
        let mut faces = pyramid_faces();
        let vertices = enumerate_vertices(&mut faces, &Tolerance::DEFAULT);
        for v in &vertices {
            for face in &faces {
                assert!(face.plane().signed_distance(v) <= 1e-9);
            }
        }
    }

    #[test]
    fn test_reenumeration_does_not_duplicate_rings() {
        let mut faces = cuboid_faces(Point3::origin(), Vec3::new(2.0, 3.0, 4.0), "null");
        enumerate_vertices(&mut faces, &Tolerance::DEFAULT);
        let first: Vec<Vec<Point3>> = faces.iter().map(|f| f.vertices().to_vec()).collect();
        enumerate_vertices(&mut faces, &Tolerance::DEFAULT);
        let second: Vec<Vec<Point3>> = faces.iter().map(|f| f.vertices().to_vec()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_open_plane_set_has_no_vertices() {
        // Drop the top and bottom: an infinite square prism has no corners.
        let mut faces = cuboid_faces(Point3::origin(), Vec3::new(1.0, 1.0, 1.0), "null");
        faces.drain(0..2);
        let vertices = enumerate_vertices(&mut faces, &Tolerance::DEFAULT);
        assert!(vertices.is_empty());
        assert!(faces.iter().all(|f| f.vertices().is_empty()));
    }
}
