use glam::{EulerRot, Mat4, Quat, Vec3};

/// Translation, orientation and scale of a node pose.
///
/// An immutable value: timelines produce thousands of these per frame, so
/// there is no cached matrix or dirty state. The matrix form is the fixed
/// `translate * rotate * scale` product; the external composer multiplies
/// it with ancestor matrices, so the order must not change.
///
/// Zero scale components are valid and intentional: they collapse the node
/// to invisibility without detaching it from the graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    #[must_use]
    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub fn from_scale(scale: Vec3) -> Self {
        Self {
            scale,
            ..Self::IDENTITY
        }
    }

    /// Pose rotated by XYZ Euler angles (radians), the form scene setup
    /// code usually authors orientations in.
    #[must_use]
    pub fn from_euler(x: f32, y: f32, z: f32) -> Self {
        Self::from_rotation(Quat::from_euler(EulerRot::XYZ, x, y, z))
    }

    /// Matrix form: `translate(translation) * rotate(rotation) * scale(scale)`.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
