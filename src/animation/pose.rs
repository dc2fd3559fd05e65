//! Interpolated pose and its matrix form.

use glam::{Mat4, Vec3};

/// A pose at one instant of an animation: translation, Euler rotation
/// angles (radians, about the global X, Y, Z axes), and non-uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub translate: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Pose {
    /// The implicit rest pose every animation starts from.
    pub const IDENTITY: Pose = Pose {
        translate: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Builds the pose matrix in the fixed per-keyframe operation order:
    /// translate, then rotate X, Y, Z about the global axes, then scale.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translate)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_z(self.rotation.z)
            * Mat4::from_scale(self.scale)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
