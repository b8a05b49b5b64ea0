use glam::{Quat, Vec3};

use crate::scene::transform::Transform;

/// Values that can be blended between two keyframes.
pub trait Interpolatable: Copy {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Quat {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        // glam's slerp already takes the shorter arc; renormalize to absorb
        // the drift repeated blends accumulate.
        start.slerp(end, t).normalize()
    }
}

impl Interpolatable for Transform {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        Transform {
            translation: Vec3::interpolate_linear(start.translation, end.translation, t),
            rotation: Quat::interpolate_linear(start.rotation, end.rotation, t),
            scale: Vec3::interpolate_linear(start.scale, end.scale, t),
        }
    }
}
