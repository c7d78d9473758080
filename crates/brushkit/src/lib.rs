#![warn(missing_docs)]

//! Convex brush geometry for GoldSrc (Valve220) level maps.
//!
//! A brush is stored as the planes of its faces; this crate recovers its
//! vertices, winds each face, and transforms brushes while keeping their
//! texture projections aligned.
//!
//! # Example
//!
//! ```
//! use brushkit::{parse_brush, write_brush, Point3};
//!
//! let text = "\
//! {
//! ( 0 0 64 ) ( 0 64 64 ) ( 64 64 64 ) CRATE01 [ 1 0 0 0 ] [ 0 -1 0 0 ] 0 1 1
//! ( 0 64 0 ) ( 0 0 0 ) ( 64 0 0 ) CRATE01 [ 1 0 0 0 ] [ 0 -1 0 0 ] 0 1 1
//! ( 64 64 0 ) ( 64 64 64 ) ( 0 64 64 ) CRATE01 [ -1 0 0 0 ] [ 0 0 -1 0 ] 0 1 1
//! ( 64 0 64 ) ( 64 0 0 ) ( 0 0 0 ) CRATE01 [ 1 0 0 0 ] [ 0 0 -1 0 ] 0 1 1
//! ( 0 0 0 ) ( 0 64 0 ) ( 0 64 64 ) CRATE01 [ 0 -1 0 0 ] [ 0 0 -1 0 ] 0 1 1
//! ( 64 64 0 ) ( 64 0 0 ) ( 64 0 64 ) CRATE01 [ 0 1 0 0 ] [ 0 0 -1 0 ] 0 1 1
//! }
//! ";
//! let mut brush = parse_brush(text).unwrap();
//! assert_eq!(brush.vertices().len(), 8);
//! assert!(brush.is_point_inside(&Point3::new(32.0, 32.0, 32.0)));
//!
//! brush.rotate_z(90.0, &Point3::new(32.0, 32.0, 0.0));
//! brush.recompute_vertices();
//! assert!(write_brush(&brush).starts_with("{\n"));
//! ```

pub use brushkit_brush;
pub use brushkit_geom;
pub use brushkit_map;
pub use brushkit_math;

pub use brushkit_brush::{
    enumerate_all, Aabb3, Brush, BrushError, Edge, Face, MoveReference, TextureMatch,
    TextureProjection, MIN_FACES,
};
pub use brushkit_geom::{intersect_planes, Plane};
pub use brushkit_map::{parse_brush, parse_face, write_brush, write_face, MapError};
pub use brushkit_math::{
    MathError, Point3, PointExt, Rotation, Tolerance, Vec3, VectorExt,
};
