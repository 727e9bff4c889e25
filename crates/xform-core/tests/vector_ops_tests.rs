// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use xform_core::{Vec3, Vec4, KINDA_SMALL_NUMBER, SMALL_NUMBER};

#[test]
fn vec3_cross_follows_right_hand_rule() {
    assert_eq!(Vec3::UNIT_X.cross(&Vec3::UNIT_Y), Vec3::UNIT_Z);
    assert_eq!(Vec3::UNIT_Y.cross(&Vec3::UNIT_X), -Vec3::UNIT_Z);
}

#[test]
fn vec3_safe_normal_guards_zero_length() {
    assert_eq!(Vec3::ZERO.normal(), Vec3::ZERO);
    assert_eq!(Vec3::new(1e-5, 0.0, 0.0).safe_normal(SMALL_NUMBER), Vec3::ZERO);
    let n = Vec3::new(3.0, 0.0, 4.0).normal();
    assert!(n.equals(&Vec3::new(0.6, 0.0, 0.8), 1e-6));
}

#[test]
fn vec3_normalize_reports_success() {
    let mut v = Vec3::new(0.0, -2.0, 0.0);
    assert!(v.normalize(SMALL_NUMBER));
    assert_eq!(v, Vec3::new(0.0, -1.0, 0.0));
    let mut z = Vec3::ZERO;
    assert!(!z.normalize(SMALL_NUMBER));
    assert!(z.is_zero());
}

#[test]
fn vec3_operators_and_indexing() {
    let mut v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v + Vec3::ONE, Vec3::new(2.0, 3.0, 4.0));
    assert_eq!(v - Vec3::ONE, Vec3::new(0.0, 1.0, 2.0));
    assert_eq!(2.0 * v, v * 2.0);
    assert_eq!(v * Vec3::new(2.0, 0.5, -1.0), Vec3::new(2.0, 1.0, -3.0));
    assert_eq!(v / 2.0, Vec3::new(0.5, 1.0, 1.5));
    v[2] = 9.0;
    v += Vec3::ONE;
    v -= Vec3::new(1.0, 1.0, 0.0);
    assert_eq!(v.to_array(), [1.0, 2.0, 10.0]);
    assert!(v.nearly_eq(&Vec3::new(1.0, 2.0, 10.00001)));
    assert!(!v.nearly_eq(&Vec3::new(1.0, 2.0, 10.1)));
}

#[test]
fn vec4_division_by_zero_propagates_ieee_values() {
    let v = Vec4::new(1.0, -1.0, 0.0, 2.0);
    let q = v / 0.0;
    assert_eq!(q.x(), f32::INFINITY);
    assert_eq!(q.y(), f32::NEG_INFINITY);
    assert!(q.z().is_nan());
    assert!(q.contains_nan());

    let c = v / Vec4::new(1.0, 0.0, 1.0, 1.0);
    assert_eq!(c.y(), f32::NEG_INFINITY);
}

#[test]
fn vec4_three_component_helpers_ignore_w() {
    let a = Vec4::new(1.0, 0.0, 0.0, 7.0);
    let b = Vec4::new(0.0, 1.0, 0.0, -3.0);
    assert_eq!(a.cross3(&b), Vec4::new(0.0, 0.0, 1.0, 0.0));
    assert_eq!(a.dot3(&b), 0.0);
    assert_eq!(a.dot4(&b), -21.0);
    assert_eq!(a.size3(), 1.0);
    assert!(a.is_unit3(KINDA_SMALL_NUMBER));
    assert!((a.size() - 50.0_f32.sqrt()).abs() < 1e-6);
    assert!(Vec4::new(0.0, 0.0, 0.0, 5.0).is_nearly_zero3(SMALL_NUMBER));
}

#[test]
fn vec4_normals() {
    let v = Vec4::new(0.0, 3.0, 4.0, 9.0);
    assert!(v
        .safe_normal(SMALL_NUMBER)
        .equals(&Vec4::new(0.0, 0.6, 0.8, 0.0), 1e-6));
    assert_eq!(Vec4::new(0.0, 0.0, 0.0, 1.0).safe_normal(SMALL_NUMBER), Vec4::ZERO);
    assert!(v.unsafe_normal3().equals(&Vec4::new(0.0, 0.6, 0.8, 0.0), 1e-6));
    assert!(Vec4::ZERO.unsafe_normal3().contains_nan());
}

#[test]
fn vec4_reflect3_mirrors_about_normal() {
    let n = Vec4::new(0.0, 0.0, 1.0, 0.0);
    let v = Vec4::new(1.0, 2.0, 3.0, 0.0);
    // 2 (v·n) n - v
    assert_eq!(v.reflect3(&n), Vec4::new(-1.0, -2.0, 3.0, 0.0));
}

#[test]
fn vec4_from_vec3_and_back() {
    let v = Vec4::from_vec3(Vec3::new(1.0, 2.0, 3.0), 1.0);
    assert_eq!(v.w(), 1.0);
    assert_eq!(Vec3::from(v), Vec3::new(1.0, 2.0, 3.0));
    let mut w = v;
    w *= 2.0;
    w += Vec4::new(0.0, 0.0, 0.0, -2.0);
    assert_eq!(w, Vec4::new(2.0, 4.0, 6.0, 0.0));
    assert_eq!(-w, Vec4::new(-2.0, -4.0, -6.0, -0.0));
}
