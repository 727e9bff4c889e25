// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use xform_core::Rotator;

const EPS: f32 = 1e-4;

#[test]
fn lerp_takes_the_short_way_across_the_seam() {
    let a = Rotator::new(0.0, 10.0, 0.0);
    let b = Rotator::new(0.0, 350.0, 0.0);
    let mid = Rotator::lerp(&a, &b, 0.5);
    // 10 -> 350 is -20 the short way; halfway is 0.
    assert!(mid.equals(&Rotator::ZERO, EPS), "{mid}");
}

#[test]
fn lerp_range_takes_the_long_way() {
    let a = Rotator::new(0.0, 10.0, 0.0);
    let b = Rotator::new(0.0, 350.0, 0.0);
    let mid = Rotator::lerp_range(&a, &b, 0.5);
    assert!(mid.equals(&Rotator::new(0.0, 180.0, 0.0), EPS), "{mid}");
    assert!(!mid.equals(&Rotator::lerp(&a, &b, 0.5), 1.0));
}

#[test]
fn lerp_and_lerp_range_agree_on_small_differences() {
    let a = Rotator::new(10.0, 20.0, 30.0);
    let b = Rotator::new(40.0, 50.0, 60.0);
    for t in [0.0_f32, 0.25, 0.5, 1.0] {
        let short = Rotator::lerp(&a, &b, t);
        let long = Rotator::lerp_range(&a, &b, t);
        assert!(short.equals(&long, EPS), "t={t}: {short} vs {long}");
    }
}

#[test]
fn lerp_endpoints() {
    let a = Rotator::new(-30.0, 100.0, 5.0);
    let b = Rotator::new(60.0, -100.0, 15.0);
    assert_eq!(Rotator::lerp(&a, &b, 0.0), a);
    assert!(Rotator::lerp(&a, &b, 1.0).equals(&b, EPS));
    assert!(Rotator::lerp_range(&a, &b, 1.0).equals(&b, EPS));
}

#[test]
fn lerp_result_is_not_normalized() {
    let a = Rotator::new(0.0, 170.0, 0.0);
    let b = Rotator::new(0.0, -170.0, 0.0);
    let end = Rotator::lerp(&a, &b, 1.0);
    // a + normalized(b - a) = 170 + 20
    assert!((end.yaw - 190.0).abs() < EPS);
    assert!(end.equals(&b, EPS));
}
