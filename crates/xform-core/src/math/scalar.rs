// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers consumed by the vector, rotator and matrix code.
//!
//! Transcendentals and `fmod` go through `libm` rather than the platform
//! runtime so identical inputs produce identical bits on every target.

use core::f32::consts::PI;

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// `min > max` is a caller bug; in release builds the result is `max`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (PI / 180.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (180.0 / PI)
}

/// Square root.
#[inline]
pub fn sqrt(value: f32) -> f32 {
    libm::sqrtf(value)
}

/// Reciprocal square root. Defined for `value > 0`; `0` yields `+inf`.
#[inline]
pub fn inv_sqrt(value: f32) -> f32 {
    1.0 / libm::sqrtf(value)
}

/// IEEE floating-point remainder; the result carries the sign of `x`.
#[inline]
pub fn fmod(x: f32, y: f32) -> f32 {
    libm::fmodf(x, y)
}

/// `true` when `value` is neither NaN nor infinite.
#[inline]
pub fn is_finite(value: f32) -> bool {
    value.is_finite()
}

/// Branch-free style select: `a` when `comparand >= 0`, otherwise `b`.
#[inline]
pub fn float_select(comparand: f32, a: f32, b: f32) -> f32 {
    if comparand >= 0.0 {
        a
    } else {
        b
    }
}

/// Rounds to the nearest integer with halves rounding up (`floor(x + 0.5)`).
///
/// Out-of-range inputs saturate to `i32::MIN`/`i32::MAX`; NaN maps to 0.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn round_to_int(value: f32) -> i32 {
    libm::floorf(value + 0.5) as i32
}

/// Snaps `location` to the nearest multiple of `grid`; a zero grid is a no-op.
pub fn grid_snap(location: f32, grid: f32) -> f32 {
    if grid == 0.0 {
        location
    } else {
        libm::floorf((location + 0.5 * grid) / grid) * grid
    }
}

/// `|value| <= tolerance`.
#[inline]
pub fn is_nearly_zero(value: f32, tolerance: f32) -> bool {
    value.abs() <= tolerance
}

/// `|a - b| <= tolerance`.
#[inline]
pub fn is_nearly_equal(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}

/// Sine and cosine of `radians`.
#[inline]
pub fn sin_cos(radians: f32) -> (f32, f32) {
    (libm::sinf(radians), libm::cosf(radians))
}

/// Four-quadrant arctangent of `y / x` in radians.
#[inline]
pub fn atan2(y: f32, x: f32) -> f32 {
    libm::atan2f(y, x)
}

/// Arcsine in radians; the input is clamped to `[-1, 1]` first.
#[inline]
pub fn asin(value: f32) -> f32 {
    libm::asinf(clamp(value, -1.0, 1.0))
}
