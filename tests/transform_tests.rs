//! Transform value type tests
//!
//! Tests for:
//! - Identity default and constructors
//! - Fixed translate * rotate * scale matrix composition
//! - Zero scale as a valid, intentional state
//! - Component-wise interpolation (lerp translation/scale, slerp rotation)
//! - Rotation renormalization after interpolation

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Quat, Vec3};
use kinema::Transform;
use kinema::animation::Interpolatable;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn mat4_approx(a: Mat4, b: Mat4) -> bool {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .all(|(x, y)| approx_eq(*x, *y))
}

// ============================================================================
// Constructors
// ============================================================================

#[test]
fn default_is_identity() {
    let t = Transform::default();
    assert_eq!(t.translation, Vec3::ZERO);
    assert_eq!(t.rotation, Quat::IDENTITY);
    assert_eq!(t.scale, Vec3::ONE);
    assert_eq!(t.to_matrix(), Mat4::IDENTITY);
}

#[test]
fn from_translation_rotation_scale() {
    assert_eq!(
        Transform::from_translation(Vec3::X).translation,
        Vec3::X
    );
    let q = Quat::from_rotation_y(FRAC_PI_2);
    assert_eq!(Transform::from_rotation(q).rotation, q);
    assert_eq!(Transform::from_scale(Vec3::splat(2.0)).scale, Vec3::splat(2.0));
}

#[test]
fn from_euler_matches_quat() {
    let t = Transform::from_euler(0.3, 0.7, 1.2);
    let expected = Quat::from_euler(glam::EulerRot::XYZ, 0.3, 0.7, 1.2);
    let angle = t.rotation.angle_between(expected);
    assert!(angle < 1e-4, "Euler rotation mismatch: angle={angle}");
}

// ============================================================================
// Matrix composition order
// ============================================================================

#[test]
fn to_matrix_is_translate_rotate_scale_product() {
    let translation = Vec3::new(1.0, -2.0, 3.0);
    let rotation = Quat::from_rotation_y(0.8);
    let scale = Vec3::new(2.0, 0.5, 1.5);

    let t = Transform::new(translation, rotation, scale);
    let expected =
        Mat4::from_translation(translation) * Mat4::from_quat(rotation) * Mat4::from_scale(scale);

    assert!(
        mat4_approx(t.to_matrix(), expected),
        "to_matrix must be the fixed T*R*S product"
    );
}

#[test]
fn zero_scale_collapses_basis_keeps_translation() {
    let t = Transform::new(Vec3::new(4.0, 5.0, 6.0), Quat::IDENTITY, Vec3::ZERO);
    let mat = t.to_matrix();

    assert!(vec3_approx(mat.x_axis.truncate(), Vec3::ZERO));
    assert!(vec3_approx(mat.y_axis.truncate(), Vec3::ZERO));
    assert!(vec3_approx(mat.z_axis.truncate(), Vec3::ZERO));
    assert!(vec3_approx(mat.w_axis.truncate(), Vec3::new(4.0, 5.0, 6.0)));
}

// ============================================================================
// Interpolation
// ============================================================================

#[test]
fn midpoint_translation_and_scale_are_arithmetic_means() {
    let a = Transform::new(Vec3::ZERO, Quat::IDENTITY, Vec3::ONE);
    let b = Transform::new(Vec3::new(10.0, 20.0, 30.0), Quat::IDENTITY, Vec3::splat(3.0));

    let mid = Transform::interpolate_linear(a, b, 0.5);
    assert!(vec3_approx(mid.translation, Vec3::new(5.0, 10.0, 15.0)));
    assert!(vec3_approx(mid.scale, Vec3::splat(2.0)));
}

#[test]
fn midpoint_rotation_is_equidistant() {
    let a = Transform::from_rotation(Quat::IDENTITY);
    let b = Transform::from_rotation(Quat::from_rotation_y(FRAC_PI_2));

    let mid = Transform::interpolate_linear(a, b, 0.5);

    // Applied to a reference vector, the midpoint orientation must be
    // equidistant in angle from both endpoints' results.
    let v = Vec3::X;
    let from_a = (a.rotation * v).angle_between(mid.rotation * v);
    let from_b = (b.rotation * v).angle_between(mid.rotation * v);
    assert!(
        approx_eq(from_a, from_b),
        "midpoint not equidistant: {from_a} vs {from_b}"
    );
    assert!(
        approx_eq(from_a, FRAC_PI_2 / 2.0),
        "expected quarter-pi from each end, got {from_a}"
    );
}

#[test]
fn interpolated_rotation_stays_unit_length() {
    let a = Transform::from_rotation(Quat::from_rotation_x(0.4));
    let b = Transform::from_rotation(Quat::from_rotation_z(2.6));

    for i in 0..=10 {
        let t = i as f32 * 0.1;
        let blended = Transform::interpolate_linear(a, b, t);
        assert!(
            approx_eq(blended.rotation.length(), 1.0),
            "t={t}: rotation drifted to length {}",
            blended.rotation.length()
        );
    }
}

#[test]
fn slerp_takes_shorter_arc() {
    // Orientations differing by more than 180 degrees in quaternion sign
    // must not flip through the long way around.
    let a = Quat::from_rotation_y(0.1);
    let b = -Quat::from_rotation_y(0.3); // same rotation, opposite sign

    let mid = Quat::interpolate_linear(a, b, 0.5);
    let expected = Quat::from_rotation_y(0.2);
    let angle = mid.angle_between(expected);
    assert!(angle < 1e-4, "long-arc flip detected: angle={angle}");
}
