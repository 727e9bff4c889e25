// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use bytemuck::{Pod, Zeroable};

use crate::constants::{KINDA_SMALL_NUMBER, QUAT_SINGULARITY_THRESHOLD};
use crate::diagnostics::{ensure_failed, ENSURES_ENABLED};
use crate::math::{scalar, Axis, Mat4, Rotator, Vec3};

const NORMALIZED_THRESHOLD: f32 = 0.01;

// Cyclic successor of each axis index.
const NEXT: [usize; 3] = [1, 2, 0];

/// Rotation quaternion `(x, y, z, w)` with `w` as the scalar part.
///
/// Only the conversions to and from [`Rotator`] and [`Mat4`] live here. The
/// rotation conventions match [`Mat4::from_rotator`]: for any rotator `r`,
/// `Quat::from_rotator(&r).to_matrix(&Vec3::ZERO)` equals
/// `Mat4::from_rotator(&r)` up to rounding.
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Quat {
    /// Vector part, X.
    pub x: f32,
    /// Vector part, Y.
    pub y: f32,
    /// Vector part, Z.
    pub z: f32,
    /// Scalar part.
    pub w: f32,
}

impl Quat {
    /// No rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from raw components; no normalization is applied.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Returns `[x, y, z, w]`.
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Unit quaternion for `rotator`, built from half-angle products.
    pub fn from_rotator(rotator: &Rotator) -> Self {
        let half = |degrees: f32| scalar::sin_cos(scalar::deg_to_rad(degrees) * 0.5);
        let (sp, cp) = half(rotator.pitch);
        let (sy, cy) = half(rotator.yaw);
        let (sr, cr) = half(rotator.roll);
        Self::new(
            cr * sp * sy - sr * cp * cy,
            -cr * sp * cy - sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
            cr * cp * cy + sr * sp * sy,
        )
    }

    /// Euler angles for this rotation.
    ///
    /// Within the gimbal singularity (pitch within about 0.08° of ±90) pitch
    /// is pinned to ±90 and the shared yaw/roll freedom is folded into roll.
    pub fn rotator(&self) -> Rotator {
        let Self { x, y, z, w } = *self;
        let singularity_test = z * x - w * y;
        let yaw_y = 2.0 * (w * z + x * y);
        let yaw_x = 1.0 - 2.0 * (y * y + z * z);
        let yaw = scalar::rad_to_deg(scalar::atan2(yaw_y, yaw_x));

        if singularity_test < -QUAT_SINGULARITY_THRESHOLD {
            let roll = Rotator::normalize_axis(-yaw - 2.0 * scalar::rad_to_deg(scalar::atan2(x, w)));
            Rotator::new(-90.0, yaw, roll)
        } else if singularity_test > QUAT_SINGULARITY_THRESHOLD {
            let roll = Rotator::normalize_axis(yaw - 2.0 * scalar::rad_to_deg(scalar::atan2(x, w)));
            Rotator::new(90.0, yaw, roll)
        } else {
            let pitch = scalar::rad_to_deg(scalar::asin(2.0 * singularity_test));
            let roll = scalar::rad_to_deg(scalar::atan2(
                -2.0 * (w * x + y * z),
                1.0 - 2.0 * (x * x + y * y),
            ));
            Rotator::new(pitch, yaw, roll)
        }
    }

    /// Rotation matrix for this (unit) quaternion with `origin` in row 3.
    pub fn to_matrix(&self, origin: &Vec3) -> Mat4 {
        let Self { x, y, z, w } = *self;
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx, xy, xz) = (x * x2, x * y2, x * z2);
        let (yy, yz, zz) = (y * y2, y * z2, z * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);
        Mat4::from_rows([
            [1.0 - (yy + zz), xy + wz, xz - wy, 0.0],
            [xy - wz, 1.0 - (xx + zz), yz + wx, 0.0],
            [xz + wy, yz - wx, 1.0 - (xx + yy), 0.0],
            [origin.x(), origin.y(), origin.z(), 1.0],
        ])
    }

    /// Quaternion of the rotation part of `m`, which must be free of scale.
    ///
    /// A matrix whose three axes are all nearly zero yields
    /// [`Quat::IDENTITY`].
    pub fn from_matrix(m: &Mat4) -> Self {
        if [Axis::X, Axis::Y, Axis::Z]
            .into_iter()
            .all(|axis| m.scaled_axis(axis).is_nearly_zero(KINDA_SMALL_NUMBER))
        {
            return Self::IDENTITY;
        }

        let trace = m[0][0] + m[1][1] + m[2][2];
        if trace > 0.0 {
            let inv_s = scalar::inv_sqrt(trace + 1.0);
            let s = 0.5 * inv_s;
            return Self::new(
                (m[1][2] - m[2][1]) * s,
                (m[2][0] - m[0][2]) * s,
                (m[0][1] - m[1][0]) * s,
                0.5 / inv_s,
            );
        }

        // Largest diagonal element picks the numerically stable branch.
        let mut i = 0;
        if m[1][1] > m[0][0] {
            i = 1;
        }
        if m[2][2] > m[i][i] {
            i = 2;
        }
        let j = NEXT[i];
        let k = NEXT[j];

        let inv_s = scalar::inv_sqrt(m[i][i] - m[j][j] - m[k][k] + 1.0);
        let s = 0.5 * inv_s;
        let mut q = [0.0_f32; 4];
        q[i] = 0.5 / inv_s;
        q[3] = (m[j][k] - m[k][j]) * s;
        q[j] = (m[i][j] + m[j][i]) * s;
        q[k] = (m[i][k] + m[k][i]) * s;
        Self::new(q[0], q[1], q[2], q[3])
    }

    /// Negated vector part.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Inverse rotation; equal to the conjugate for unit quaternions.
    pub fn inverse(&self) -> Self {
        if ENSURES_ENABLED && !self.is_normalized() {
            ensure_failed("Quat::inverse(), quaternion is not normalized, result is not an inverse");
        }
        self.conjugate()
    }

    /// Squared length.
    pub fn size_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Length.
    pub fn size(&self) -> f32 {
        scalar::sqrt(self.size_squared())
    }

    /// Unit-length copy, or [`Quat::IDENTITY`] when the squared length is
    /// below `tolerance`.
    pub fn normalized(&self, tolerance: f32) -> Self {
        let square_sum = self.size_squared();
        if square_sum >= tolerance {
            let scale = scalar::inv_sqrt(square_sum);
            Self::new(
                self.x * scale,
                self.y * scale,
                self.z * scale,
                self.w * scale,
            )
        } else {
            Self::IDENTITY
        }
    }

    /// Rotation equality within `tolerance`; `q` and `-q` compare equal.
    pub fn equals(&self, other: &Self, tolerance: f32) -> bool {
        let a = self.to_array();
        let b = other.to_array();
        let same = a.iter().zip(b).all(|(p, q)| (p - q).abs() <= tolerance);
        let negated = a.iter().zip(b).all(|(p, q)| (p + q).abs() <= tolerance);
        same || negated
    }

    /// `true` when the squared length is within 0.01 of one.
    pub fn is_normalized(&self) -> bool {
        (1.0 - self.size_squared()).abs() < NORMALIZED_THRESHOLD
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Rotator> for Quat {
    fn from(value: Rotator) -> Self {
        Self::from_rotator(&value)
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X={:.9} Y={:.9} Z={:.9} W={:.9}",
            self.x, self.y, self.z, self.w
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_round_trips_through_matrix() {
        let m = Quat::IDENTITY.to_matrix(&Vec3::ZERO);
        assert_eq!(m, Mat4::IDENTITY);
        assert_eq!(Quat::from_matrix(&Mat4::IDENTITY), Quat::IDENTITY);
    }

    #[test]
    fn nil_matrix_yields_identity() {
        assert_eq!(Quat::from_matrix(&Mat4::ZERO), Quat::IDENTITY);
    }

    #[test]
    fn half_turn_takes_the_diagonal_branch() {
        let r = Rotator::new(0.0, 180.0, 0.0);
        let q = Quat::from_matrix(&Mat4::from_rotator(&r));
        assert!(q.equals(&Quat::from_rotator(&r), 1e-5));
    }
}
