//! Shared fixtures for unit tests.

use brushkit_geom::Plane;
use brushkit_math::{Point3, Vec3};

use crate::brush::Brush;
use crate::face::Face;
use crate::texture::TextureProjection;

/// Horizontal face at height `z` with an upward normal.
pub(crate) fn top_face(z: f64) -> Face {
    Face::new(
        Plane::new(
            Point3::new(0.0, 0.0, z),
            Point3::new(0.0, 1.0, z),
            Point3::new(1.0, 1.0, z),
        ),
        TextureProjection::with_axes("null", Vec3::x(), -Vec3::y()),
    )
}

/// The six faces of an axis-aligned box with minimum corner `min`.
pub(crate) fn cuboid_faces(min: Point3, size: Vec3, texture: &str) -> Vec<Face> {
    let (x, y, z) = (min.x, min.y, min.z);
    let (w, l, h) = (size.x, size.y, size.z);
    let face = |a: [f64; 3], b: [f64; 3], c: [f64; 3], u: Vec3, v: Vec3| {
        Face::new(
            Plane::new(Point3::from(a), Point3::from(b), Point3::from(c)),
            TextureProjection::with_axes(texture, u, v),
        )
    };
    vec![
        face(
            [x, y, z + h],
            [x, y + l, z + h],
            [x + w, y + l, z + h],
            Vec3::x(),
            -Vec3::y(),
        ),
        face([x, y + l, z], [x, y, z], [x + w, y, z], Vec3::x(), -Vec3::y()),
        face(
            [x + w, y + l, z],
            [x + w, y + l, z + h],
            [x, y + l, z + h],
            -Vec3::x(),
            -Vec3::z(),
        ),
        face(
            [x + w, y, z + h],
            [x + w, y, z],
            [x, y, z],
            Vec3::x(),
            -Vec3::z(),
        ),
        face(
            [x, y, z],
            [x, y + l, z],
            [x, y + l, z + h],
            -Vec3::y(),
            -Vec3::z(),
        ),
        face(
            [x + w, y + l, z],
            [x + w, y, z],
            [x + w, y, z + h],
            Vec3::y(),
            -Vec3::z(),
        ),
    ]
}

/// Axis-aligned box brush with minimum corner `min`.
pub(crate) fn cuboid(min: Point3, size: Vec3) -> Brush {
    Brush::new(cuboid_faces(min, size, "null")).expect("six faces")
}

/// True if every consecutive pair turns clockwise seen from the tip of `normal`.
pub(crate) fn is_clockwise(ring: &[Point3], normal: &Vec3) -> bool {
    let n = ring.len();
    let sum = ring.iter().fold(Vec3::zeros(), |acc, p| acc + p.coords);
    let center = Point3::from(sum / n as f64);
    (0..n).all(|i| {
        let a = ring[i] - center;
        let b = ring[(i + 1) % n] - center;
        a.cross(&b).dot(normal) < 0.0
    })
}
