// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use xform_core::{Mat4, ParseError, Plane, Quat, Rotator, Vec3, Vec4};

#[test]
fn vector_display_uses_three_decimals() {
    assert_eq!(Vec3::new(1.0, -2.5, 0.125).to_string(), "X=1.000 Y=-2.500 Z=0.125");
    assert_eq!(
        Vec4::new(0.0, 1.0, 2.0, -3.0).to_string(),
        "X=0.000 Y=1.000 Z=2.000 W=-3.000"
    );
    assert_eq!(
        Plane::new(0.0, 0.0, 1.0, 4.5).to_string(),
        "X=0.000 Y=0.000 Z=1.000 W=4.500"
    );
}

#[test]
fn rotator_display_uses_six_decimals() {
    assert_eq!(
        Rotator::new(10.0, -20.5, 0.0).to_string(),
        "P=10.000000 Y=-20.500000 R=0.000000"
    );
}

#[test]
fn quat_display_uses_nine_decimals() {
    assert_eq!(
        Quat::IDENTITY.to_string(),
        "X=0.000000000 Y=0.000000000 Z=0.000000000 W=1.000000000"
    );
}

#[test]
fn matrix_display_renders_bracketed_rows() {
    assert_eq!(
        Mat4::IDENTITY.to_string(),
        "[1 0 0 0] [0 1 0 0] [0 0 1 0] [0 0 0 1] "
    );
}

#[test]
fn display_text_parses_back() {
    let v = Vec3::new(1.25, -7.5, 1000.0);
    assert_eq!(v.to_string().parse::<Vec3>(), Ok(v));

    let v4 = Vec4::new(0.5, 0.25, -0.125, 8.0);
    assert_eq!(v4.to_string().parse::<Vec4>(), Ok(v4));

    let r = Rotator::new(12.5, -90.0, 359.75);
    assert_eq!(r.to_string().parse::<Rotator>(), Ok(r));

    let m = Mat4::from_rotation_translation(&r, &Vec3::new(0.1, 0.2, 0.3));
    assert_eq!(m.to_string().parse::<Mat4>(), Ok(m));
}

#[test]
fn rotator_parses_fields_in_any_order() {
    let r: Result<Rotator, _> = "R=3 Y=2 P=1".parse();
    assert_eq!(r, Ok(Rotator::new(1.0, 2.0, 3.0)));
}

#[test]
fn parse_errors_name_the_problem() {
    assert_eq!(
        "X=1 Z=3".parse::<Vec3>(),
        Err(ParseError::MissingField { label: "Y=" })
    );
    assert_eq!(
        "P=1 Y=oops R=0".parse::<Rotator>(),
        Err(ParseError::InvalidNumber {
            label: "Y=",
            text: "oops".to_owned()
        })
    );
    assert_eq!(
        "[1 0 0 0] [0 1 0 0]".parse::<Mat4>(),
        Err(ParseError::WrongArity {
            expected: 16,
            found: 8
        })
    );
    let err = "X=1".parse::<Vec4>().unwrap_err();
    assert_eq!(err.to_string(), "missing field `Y=`");
}

#[test]
fn compact_rotator_text() {
    assert_eq!(Rotator::new(0.0, 720.0, -360.0).to_compact_string(), "R(0)");
    assert_eq!(
        Rotator::new(1.5, 2.25, 3.0).to_compact_string(),
        "R(P=1.50, Y=2.25, R=3.00)"
    );
    assert_eq!(Rotator::new(0.0, 0.0, 90.0).to_compact_string(), "R(R=90.00)");
}
