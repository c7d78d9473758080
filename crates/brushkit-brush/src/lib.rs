#![warn(missing_docs)]

//! Convex brushes for GoldSrc-style level geometry.
//!
//! A brush is the intersection of the inner half-spaces of its faces. Each
//! face carries the three points that define its plane and a Valve220
//! texture projection. Vertices are not stored in map data; they are
//! recovered by intersecting plane triples and keeping the points inside
//! every half-space:
//!
//! 1. **Enumerate** every plane triple and intersect it
//! 2. **Filter** points outside any other face
//! 3. **Merge** duplicates and attach each vertex to its faces
//! 4. **Wind** every face ring clockwise seen from outside
//!
//! Results are cached on the brush and must be refreshed explicitly after
//! a transform, see [`Brush`].

mod bounds;
mod brush;
mod edge;
mod enumerate;
mod error;
mod face;
mod texture;

#[cfg(test)]
mod testing;

pub use bounds::Aabb3;
pub use brush::{Brush, MoveReference, MIN_FACES};
pub use edge::Edge;
pub use enumerate::enumerate_all;
pub use error::{BrushError, Result};
pub use face::Face;
pub use texture::{TextureMatch, TextureProjection};
