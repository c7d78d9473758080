//! Writer for Valve220 face records and brush blocks.
//!
//! Numbers use Rust's shortest round-trip formatting, so a record written
//! from parsed data parses back to bit-identical values.

use std::fmt;

use brushkit_brush::{Brush, Face};
use brushkit_math::{Point3, Vec3};

/// Serialize one face as a single-line record (no trailing newline).
///
/// Writes the three defining plane points, never the vertex ring.
pub fn write_face(face: &Face) -> String {
    FaceRecord(face).to_string()
}

/// Serialize a brush as a `{ ... }` block, one face record per line.
///
/// A brush without faces produces an empty string.
pub fn write_brush(brush: &Brush) -> String {
    BrushBlock(brush).to_string()
}

/// Display adapter for one face record.
pub struct FaceRecord<'a>(pub &'a Face);

/// Display adapter for a brush block.
pub struct BrushBlock<'a>(pub &'a Brush);

struct PointField<'a>(&'a Point3);

struct AxisField<'a>(&'a Vec3, f64);

impl fmt::Display for PointField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.0;
        write!(f, "( {} {} {} )", p.x, p.y, p.z)
    }
}

impl fmt::Display for AxisField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let AxisField(axis, offset) = self;
        write!(f, "[ {} {} {} {} ]", axis.x, axis.y, axis.z, offset)
    }
}

impl fmt::Display for FaceRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face = self.0;
        for p in face.plane() {
            write!(f, "{} ", PointField(p))?;
        }
        let t = face.texture();
        write!(
            f,
            "{} {} {} {} {} {}",
            t.name(),
            AxisField(&t.u_axis, t.u_offset),
            AxisField(&t.v_axis, t.v_offset),
            t.rotation,
            t.u_scale,
            t.v_scale
        )
    }
}

impl fmt::Display for BrushBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let brush = self.0;
        if brush.face_count() == 0 {
            return Ok(());
        }
        writeln!(f, "{{")?;
        for face in brush {
            writeln!(f, "{}", FaceRecord(face))?;
        }
        writeln!(f, "}}")
    }
}
