// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use core::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::constants::{KINDA_SMALL_NUMBER, SMALL_NUMBER};
use crate::diagnostics;
use crate::math::{scalar, Axis, Mat4, Quat, Vec3};
use crate::text::{parse_labeled, ParseError};

/// Orientation as Euler angles in degrees.
///
/// - `pitch` rotates about Y (nose up positive), `yaw` about Z (turn right
///   positive), `roll` about X (tilt right positive).
/// - Composition order is yaw, then pitch, then roll (see
///   [`Mat4::from_rotator`]).
/// - No canonical range is enforced; `370°` and `10°` are different values
///   that describe the same orientation. `==` compares raw components, while
///   [`Rotator::equals`] and [`Rotator::is_nearly_zero`] compare
///   orientations.
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Rotator {
    /// Rotation about the right axis (Y), degrees.
    pub pitch: f32,
    /// Rotation about the up axis (Z), degrees.
    pub yaw: f32,
    /// Rotation about the forward axis (X), degrees.
    pub roll: f32,
}

impl Rotator {
    /// No rotation.
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    /// Creates a rotator from pitch, yaw and roll in degrees.
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        let out = Self { pitch, yaw, roll };
        out.auto_check_nan();
        out
    }

    /// Same angle on every axis.
    pub fn splat(angle: f32) -> Self {
        Self::new(angle, angle, angle)
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.pitch), f(self.yaw), f(self.roll))
    }

    fn auto_check_nan(&self) {
        diagnostics::auto_check_nan(self.contains_nan(), "Rotator", self);
    }

    /// Wraps an angle into `[0, 360)`.
    ///
    /// Tiny negative angles whose `+ 360` rounds up to exactly 360 wrap to 0.
    ///
    /// ```
    /// use xform_core::Rotator;
    /// assert_eq!(Rotator::clamp_axis(-90.0), 270.0);
    /// assert_eq!(Rotator::clamp_axis(720.0), 0.0);
    /// assert_eq!(Rotator::clamp_axis(-1e-6), 0.0);
    /// ```
    pub fn clamp_axis(angle: f32) -> f32 {
        let angle = scalar::fmod(angle, 360.0);
        if angle < 0.0 {
            let wrapped = angle + 360.0;
            if wrapped >= 360.0 {
                0.0
            } else {
                wrapped
            }
        } else {
            angle
        }
    }

    /// Wraps an angle into `(-180, 180]`.
    ///
    /// ```
    /// use xform_core::Rotator;
    /// assert_eq!(Rotator::normalize_axis(270.0), -90.0);
    /// assert_eq!(Rotator::normalize_axis(-180.0), 180.0);
    /// ```
    pub fn normalize_axis(angle: f32) -> f32 {
        let angle = Self::clamp_axis(angle);
        if angle > 180.0 {
            angle - 360.0
        } else {
            angle
        }
    }

    /// Quantizes an angle to 8 bits (256 steps per turn).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn compress_axis_to_byte(angle: f32) -> u8 {
        (scalar::round_to_int(angle * 256.0 / 360.0) & 0xFF) as u8
    }

    /// Expands a byte produced by [`Rotator::compress_axis_to_byte`] to
    /// `[0, 360)` degrees.
    pub fn decompress_axis_from_byte(value: u8) -> f32 {
        f32::from(value) * 360.0 / 256.0
    }

    /// Quantizes an angle to 16 bits (65536 steps per turn).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn compress_axis_to_short(angle: f32) -> u16 {
        (scalar::round_to_int(angle * 65536.0 / 360.0) & 0xFFFF) as u16
    }

    /// Expands a value produced by [`Rotator::compress_axis_to_short`] to
    /// `[0, 360)` degrees.
    pub fn decompress_axis_from_short(value: u16) -> f32 {
        f32::from(value) * 360.0 / 65536.0
    }

    /// Every axis wrapped into `[0, 360)`.
    pub fn clamp(&self) -> Self {
        self.map(Self::clamp_axis)
    }

    /// Every axis wrapped into `[0, 360)`. Same as [`Rotator::clamp`].
    pub fn denormalized(&self) -> Self {
        self.clamp()
    }

    /// Every axis wrapped into `(-180, 180]`.
    pub fn normalized(&self) -> Self {
        self.map(Self::normalize_axis)
    }

    /// In-place [`Rotator::normalized`].
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Orientation equality: every axis difference, wrapped into
    /// `(-180, 180]`, is within `tolerance`.
    ///
    /// ```
    /// use xform_core::Rotator;
    /// let a = Rotator::new(0.0, 10.0, 0.0);
    /// let b = Rotator::new(0.0, 370.0, 0.0);
    /// assert_ne!(a, b);
    /// assert!(a.equals(&b, 1e-3));
    /// ```
    pub fn equals(&self, other: &Self, tolerance: f32) -> bool {
        Self::normalize_axis(self.pitch - other.pitch).abs() <= tolerance
            && Self::normalize_axis(self.yaw - other.yaw).abs() <= tolerance
            && Self::normalize_axis(self.roll - other.roll).abs() <= tolerance
    }

    /// Every axis, wrapped into `(-180, 180]`, is within `tolerance` of zero.
    pub fn is_nearly_zero(&self, tolerance: f32) -> bool {
        Self::normalize_axis(self.pitch).abs() <= tolerance
            && Self::normalize_axis(self.yaw).abs() <= tolerance
            && Self::normalize_axis(self.roll).abs() <= tolerance
    }

    /// Every axis is an exact multiple of 360.
    pub fn is_zero(&self) -> bool {
        Self::clamp_axis(self.pitch) == 0.0
            && Self::clamp_axis(self.yaw) == 0.0
            && Self::clamp_axis(self.roll) == 0.0
    }

    /// Adds per-axis deltas in place.
    pub fn add_deltas(&mut self, delta_pitch: f32, delta_yaw: f32, delta_roll: f32) {
        self.pitch += delta_pitch;
        self.yaw += delta_yaw;
        self.roll += delta_roll;
        self.auto_check_nan();
    }

    /// The other Euler triple describing the same orientation:
    /// `(180 - pitch, yaw + 180, roll + 180)`.
    pub fn equivalent(&self) -> Self {
        Self::new(180.0 - self.pitch, self.yaw + 180.0, self.roll + 180.0)
    }

    /// Sum of the absolute per-axis differences, without wrapping.
    pub fn manhattan_distance(&self, other: &Self) -> f32 {
        (self.pitch - other.pitch).abs()
            + (self.yaw - other.yaw).abs()
            + (self.roll - other.roll).abs()
    }

    /// Replaces `other` by its [`Rotator::equivalent`] when that is strictly
    /// closer to `self` in Manhattan distance.
    pub fn set_closest_to_me(&self, other: &mut Self) {
        let alternative = other.equivalent();
        if self.manhattan_distance(&alternative) < self.manhattan_distance(other) {
            *other = alternative;
        }
    }

    /// Shortest-path interpolation: `a + normalized(b - a) * t`.
    ///
    /// The result is not normalized.
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        *a + (*b - *a).normalized() * t
    }

    /// Component-wise interpolation of the raw angles, normalized afterwards.
    ///
    /// Unlike [`Rotator::lerp`] this can travel the long way round, e.g.
    /// from 10° to 350° through 180°.
    pub fn lerp_range(a: &Self, b: &Self, t: f32) -> Self {
        (*a * (1.0 - t) + *b * t).normalized()
    }

    /// Each axis snapped to the matching axis of `grid`.
    pub fn grid_snap(&self, grid: &Self) -> Self {
        Self::new(
            scalar::grid_snap(self.pitch, grid.pitch),
            scalar::grid_snap(self.yaw, grid.yaw),
            scalar::grid_snap(self.roll, grid.roll),
        )
    }

    /// Unit forward (X) direction after applying yaw and pitch.
    pub fn vector(&self) -> Vec3 {
        let (sp, cp) = scalar::sin_cos(scalar::deg_to_rad(self.pitch));
        let (sy, cy) = scalar::sin_cos(scalar::deg_to_rad(self.yaw));
        Vec3::new(cp * cy, cp * sy, sp)
    }

    /// `(roll, pitch, yaw)` as a vector, matching the X/Y/Z rotation axes.
    pub fn euler(&self) -> Vec3 {
        Vec3::new(self.roll, self.pitch, self.yaw)
    }

    /// Inverse of [`Rotator::euler`].
    pub fn from_euler(euler: &Vec3) -> Self {
        Self::new(euler.y(), euler.z(), euler.x())
    }

    /// Rotation that undoes this one.
    pub fn inverse(&self) -> Self {
        Mat4::from_rotator(self).transposed().rotator()
    }

    /// Rotates `v` by this rotator.
    pub fn rotate_vector(&self, v: &Vec3) -> Vec3 {
        Mat4::from_rotator(self).transform_vector(v).xyz()
    }

    /// Rotates `v` by the inverse of this rotator.
    pub fn unrotate_vector(&self, v: &Vec3) -> Vec3 {
        Mat4::from_rotator(self).transposed().transform_vector(v).xyz()
    }

    /// Angle for the rotation about `axis`: X is roll, Y is pitch, Z is yaw.
    /// [`Axis::None`] yields 0.
    pub fn component_for_axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.roll,
            Axis::Y => self.pitch,
            Axis::Z => self.yaw,
            Axis::None => 0.0,
        }
    }

    /// Sets the angle for the rotation about `axis`; [`Axis::None`] is a
    /// no-op.
    pub fn set_component_for_axis(&mut self, axis: Axis, angle: f32) {
        match axis {
            Axis::X => self.roll = angle,
            Axis::Y => self.pitch = angle,
            Axis::Z => self.yaw = angle,
            Axis::None => return,
        }
        self.auto_check_nan();
    }

    /// Splits each axis into whole turns and a remainder in `(-180, 180]`.
    ///
    /// Returns `(winding, remainder)` with `winding + remainder == self`.
    pub fn winding_and_remainder(&self) -> (Self, Self) {
        let remainder = self.normalized();
        let winding = *self - remainder;
        (winding, remainder)
    }

    /// `true` if any axis is NaN or infinite.
    pub fn contains_nan(&self) -> bool {
        !(self.pitch.is_finite() && self.yaw.is_finite() && self.roll.is_finite())
    }

    /// Logs a NaN diagnostic when any axis is non-finite and returns whether
    /// one was found. Runs regardless of the `nan_diagnostic` feature.
    pub fn diagnostic_check_nan(&self) -> bool {
        diagnostics::check_nan(self.contains_nan(), "Rotator", self)
    }

    /// Short human-readable form: `"R(0)"` for a nearly-zero rotator,
    /// otherwise `"R(P=…, Y=…, R=…)"` with two decimals and nearly-zero axes
    /// left out.
    ///
    /// ```
    /// use xform_core::Rotator;
    /// assert_eq!(Rotator::ZERO.to_compact_string(), "R(0)");
    /// assert_eq!(Rotator::new(0.0, 45.0, 0.0).to_compact_string(), "R(Y=45.00)");
    /// assert_eq!(
    ///     Rotator::new(10.0, 0.0, -5.5).to_compact_string(),
    ///     "R(P=10.00, R=-5.50)"
    /// );
    /// ```
    pub fn to_compact_string(&self) -> String {
        if self.is_nearly_zero(KINDA_SMALL_NUMBER) {
            return String::from("R(0)");
        }
        let fields: Vec<String> = [("P", self.pitch), ("Y", self.yaw), ("R", self.roll)]
            .into_iter()
            .filter(|&(_, angle)| !scalar::is_nearly_zero(angle, SMALL_NUMBER))
            .map(|(label, angle)| format!("{label}={angle:.2}"))
            .collect();
        format!("R({})", fields.join(", "))
    }

    /// Quaternion for this orientation.
    pub fn quaternion(&self) -> Quat {
        Quat::from_rotator(self)
    }

    /// Rotator for a quaternion orientation.
    pub fn from_quat(q: &Quat) -> Self {
        q.rotator()
    }
}

impl Add for Rotator {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.pitch + rhs.pitch, self.yaw + rhs.yaw, self.roll + rhs.roll)
    }
}

impl Sub for Rotator {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.pitch - rhs.pitch, self.yaw - rhs.yaw, self.roll - rhs.roll)
    }
}

impl Mul<f32> for Rotator {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.map(|angle| angle * rhs)
    }
}

impl Mul<Rotator> for f32 {
    type Output = Rotator;
    fn mul(self, rhs: Rotator) -> Rotator {
        rhs * self
    }
}

impl AddAssign for Rotator {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Rotator {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Rotator {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl From<Quat> for Rotator {
    fn from(value: Quat) -> Self {
        value.rotator()
    }
}

impl fmt::Display for Rotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P={:.6} Y={:.6} R={:.6}", self.pitch, self.yaw, self.roll)
    }
}

impl FromStr for Rotator {
    type Err = ParseError;

    /// Parses `"P=… Y=… R=…"`; the fields may appear in any order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [pitch, yaw, roll] = parse_labeled(s, ["P=", "Y=", "R="])?;
        Ok(Self::new(pitch, yaw, roll))
    }
}
