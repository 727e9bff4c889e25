// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use xform_core::{Mat4, Quat, Rotator, Vec3, SMALL_NUMBER};

const EPS: f32 = 1e-5;

#[test]
fn zero_rotator_is_identity_quat() {
    let q = Quat::from_rotator(&Rotator::ZERO);
    assert!(q.equals(&Quat::IDENTITY, 0.0));
    assert_eq!(Quat::default(), Quat::IDENTITY);
}

#[test]
fn yaw_quarter_turn_is_about_z() {
    let q = Quat::from_rotator(&Rotator::new(0.0, 90.0, 0.0));
    let h = core::f32::consts::FRAC_1_SQRT_2;
    assert!(q.equals(&Quat::new(0.0, 0.0, h, h), EPS), "{q}");
    assert!((q.size() - 1.0).abs() < EPS);
}

#[test]
fn rotator_round_trips_through_quat() {
    for r in [
        Rotator::new(10.0, 20.0, 30.0),
        Rotator::new(-60.0, 170.0, -100.0),
        Rotator::new(45.0, -135.0, 179.0),
    ] {
        let back = Quat::from_rotator(&r).rotator();
        assert!(back.equals(&r, 1e-3), "{r} -> {back}");
        assert!(Rotator::from_quat(&r.quaternion()).equals(&r, 1e-3));
        assert!(Rotator::from(Quat::from(r)).equals(&r, 1e-3));
    }
}

#[test]
fn gimbal_lock_pins_pitch() {
    for (pitch, expected) in [(90.0_f32, 90.0_f32), (-90.0, -90.0)] {
        let r = Rotator::new(pitch, 30.0, 0.0);
        let back = Quat::from_rotator(&r).rotator();
        assert_eq!(back.pitch, expected);
        // Yaw and roll are folded together; the orientation survives.
        let a = Mat4::from_rotator(&r);
        let b = Mat4::from_rotator(&back);
        assert!(a.equals(&b, 1e-4), "{r} -> {back}");
    }
}

#[test]
fn matrix_round_trip_covers_every_branch() {
    // Positive trace, and each of the three diagonal-dominant branches.
    for r in [
        Rotator::new(10.0, 20.0, 30.0),
        Rotator::new(0.0, 0.0, 180.0),
        Rotator::new(180.0, 0.0, 0.0),
        Rotator::new(0.0, 180.0, 0.0),
        Rotator::new(0.0, 170.0, 175.0),
    ] {
        let m = Mat4::from_rotator(&r);
        let q = Quat::from_matrix(&m);
        assert!(q.equals(&Quat::from_rotator(&r), 1e-4), "{r}: {q}");
        assert!(q.to_matrix(&Vec3::ZERO).equals(&m, 1e-4));
    }
}

#[test]
fn nil_matrix_maps_to_identity() {
    assert_eq!(Quat::from_matrix(&Mat4::ZERO), Quat::IDENTITY);
    let mut tiny = Mat4::ZERO;
    tiny[3] = [1.0, 2.0, 3.0, 1.0];
    assert_eq!(tiny.to_quat(), Quat::IDENTITY);
}

#[test]
fn conjugate_is_inverse_rotation() {
    let r = Rotator::new(20.0, 40.0, 60.0);
    let q = Quat::from_rotator(&r);
    let forward = q.to_matrix(&Vec3::ZERO);
    let backward = q.inverse().to_matrix(&Vec3::ZERO);
    assert!((forward * backward).equals(&Mat4::IDENTITY, 1e-5));
    assert_eq!(q.conjugate(), q.inverse());
}

#[test]
fn normalized_scales_to_unit_or_falls_back_to_identity() {
    let q = Quat::new(0.0, 0.0, 3.0, 4.0).normalized(SMALL_NUMBER);
    assert!(q.equals(&Quat::new(0.0, 0.0, 0.6, 0.8), 1e-6));
    assert!(q.is_normalized());
    assert_eq!(Quat::new(0.0, 0.0, 0.0, 0.0).normalized(SMALL_NUMBER), Quat::IDENTITY);
}

#[test]
fn equals_treats_negated_quat_as_same_rotation() {
    let q = Quat::new(0.1, -0.2, 0.3, 0.9);
    let neg = Quat::new(-0.1, 0.2, -0.3, -0.9);
    assert!(q.equals(&neg, 1e-6));
    assert!(!q.equals(&q.conjugate(), 1e-6));
}
