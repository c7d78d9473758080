//! Valve220 texture projection attached to a brush face.

use brushkit_math::{Result, Rotation, Vec3, VectorExt};
use serde::{Deserialize, Serialize};

/// How a texture name is compared by [`has_texture`](crate::Face::has_texture).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureMatch {
    /// The whole name must match.
    #[default]
    Exact,
    /// The query must appear somewhere in the name.
    Contains,
}

/// UV axes, offsets, rotation and scales mapping face points to texels.
///
/// Texture names are stored upper-cased. `rotation` is carried for the
/// writer only; it is never recomputed from the axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureProjection {
    name: String,
    /// U axis in world space.
    pub u_axis: Vec3,
    /// U offset in texels.
    pub u_offset: f64,
    /// V axis in world space.
    pub v_axis: Vec3,
    /// V offset in texels.
    pub v_offset: f64,
    /// Rotation in degrees (informational).
    pub rotation: f64,
    /// U scale.
    pub u_scale: f64,
    /// V scale.
    pub v_scale: f64,
}

impl TextureProjection {
    /// Create a projection, in map record field order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        u_axis: Vec3,
        u_offset: f64,
        v_axis: Vec3,
        v_offset: f64,
        rotation: f64,
        u_scale: f64,
        v_scale: f64,
    ) -> Self {
        Self {
            name: name.to_uppercase(),
            u_axis,
            u_offset,
            v_axis,
            v_offset,
            rotation,
            u_scale,
            v_scale,
        }
    }

    /// Projection with the given axes, zero offsets and unit scale.
    pub fn with_axes(name: &str, u_axis: Vec3, v_axis: Vec3) -> Self {
        Self::new(name, u_axis, 0.0, v_axis, 0.0, 0.0, 1.0, 1.0)
    }

    /// Texture name (upper-case).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the texture name.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_uppercase();
    }

    /// Compare the name against `query`, ignoring case.
    pub fn matches(&self, query: &str, mode: TextureMatch) -> bool {
        let query = query.to_uppercase();
        match mode {
            TextureMatch::Exact => self.name == query,
            TextureMatch::Contains => self.name.contains(&query),
        }
    }

    /// `u_axis × v_axis`, not normalized.
    pub fn normal(&self) -> Vec3 {
        self.u_axis.cross(&self.v_axis)
    }

    /// Unit `u_axis × v_axis`.
    pub fn unit_normal(&self) -> Result<Vec3> {
        self.normal().checked_normalize()
    }

    /// Shift the offsets so the texture follows a translation.
    ///
    /// Exact only for displacements measured from the world origin: after
    /// a rotation about any other center the texture drifts. An axis with a
    /// zero scale keeps its offset.
    pub fn update_offset(&mut self, displacement: &Vec3) {
        if self.u_scale != 0.0 {
            self.u_offset -= displacement.dot(&self.u_axis) / self.u_scale;
        }
        if self.v_scale != 0.0 {
            self.v_offset -= displacement.dot(&self.v_axis) / self.v_scale;
        }
    }

    /// Rotate both UV axes.
    pub fn rotate_axes(&mut self, rotation: &Rotation) {
        self.u_axis = rotation.apply_vec(&self.u_axis);
        self.v_axis = rotation.apply_vec(&self.v_axis);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn floor() -> TextureProjection {
        TextureProjection::new(
            "grass01",
            Vec3::new(1.0, 0.0, 0.0),
            4.0,
            Vec3::new(0.0, -1.0, 0.0),
            8.0,
            0.0,
            0.5,
            2.0,
        )
    }

    #[test]
    fn test_name_is_uppercased() {
        let mut t = floor();
        assert_eq!(t.name(), "GRASS01");
        t.set_name("{blue");
        assert_eq!(t.name(), "{BLUE");
    }

    #[test]
    fn test_matches() {
        let t = floor();
        assert!(t.matches("grass01", TextureMatch::Exact));
        assert!(!t.matches("grass", TextureMatch::Exact));
        assert!(t.matches("Grass", TextureMatch::Contains));
        assert!(!t.matches("sky", TextureMatch::Contains));
    }

    #[test]
    fn test_update_offset() {
        let mut t = floor();
        t.update_offset(&Vec3::new(16.0, 32.0, 64.0));
        // u: 4 - 16 / 0.5, v: 8 - (-32) / 2
        assert!((t.u_offset - (4.0 - 32.0)).abs() < 1e-12);
        assert!((t.v_offset - (8.0 + 16.0)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_displacement_keeps_offsets() {
        let mut t = floor();
        t.update_offset(&Vec3::zeros());
        assert_eq!(t.u_offset, 4.0);
        assert_eq!(t.v_offset, 8.0);
    }

    #[test]
    fn test_zero_scale_axis_keeps_offset() {
        let mut t = floor();
        t.u_scale = 0.0;
        t.update_offset(&Vec3::new(16.0, 32.0, 0.0));
        assert_eq!(t.u_offset, 4.0);
        assert!((t.v_offset - 24.0).abs() < 1e-12);

        t.update_offset(&Vec3::zeros());
        assert!(t.u_offset.is_finite() && t.v_offset.is_finite());
    }

    #[test]
    fn test_rotate_axes() {
        let mut t = floor();
        t.rotate_axes(&Rotation::z(90.0));
        assert_relative_eq!(t.u_axis, Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(t.v_axis, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
        // Rotation is informational and stays untouched.
        assert_eq!(t.rotation, 0.0);
    }

    #[test]
    fn test_normal() {
        let t = floor();
        assert_relative_eq!(t.unit_normal().unwrap(), Vec3::new(0.0, 0.0, -1.0));
        let flat = TextureProjection::with_axes("x", Vec3::x(), Vec3::x());
        assert!(flat.unit_normal().is_err());
    }
}
