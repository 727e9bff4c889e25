// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(dead_code)]

use xform_core::{Mat4, Vec3};

pub fn approx_eq16(a: [f32; 16], b: [f32; 16], eps: f32) {
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() <= eps, "index {i}: {a:?} vs {b:?}");
    }
}

pub fn assert_mat_near(a: &Mat4, b: &Mat4, eps: f32) {
    approx_eq16(a.to_array(), b.to_array(), eps);
}

pub fn assert_vec3_near(a: Vec3, b: Vec3, eps: f32) {
    assert!(a.equals(&b, eps), "{a} vs {b} (eps {eps})");
}

/// Rotation, per-axis scale and translation composed into one affine matrix.
pub fn trs(pitch: f32, yaw: f32, roll: f32, scale: [f32; 3], origin: [f32; 3]) -> Mat4 {
    let mut m = Mat4::from_rotation_translation(
        &xform_core::Rotator::new(pitch, yaw, roll),
        &Vec3::from(origin),
    );
    for (row, s) in scale.into_iter().enumerate() {
        for col in 0..3 {
            m[row][col] *= s;
        }
    }
    m
}
