// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Builders that produce a [`Mat4`] from bases, eye/target pairs, rotators
//! and quaternions, and the conversions back.

use crate::math::{scalar, Axis, Mat4, Quat, Rotator, Vec3};

impl Mat4 {
    /// Change-of-basis matrix.
    ///
    /// The basis vectors land in the columns (`m[r][0..3] = (x[r], y[r],
    /// z[r])`) and row 3 holds `origin` projected onto each basis vector. For
    /// an orthonormal basis this maps world space into the basis frame with
    /// `origin` added before the projection.
    pub fn basis_vectors(x: &Vec3, y: &Vec3, z: &Vec3, origin: &Vec3) -> Self {
        Self::from_rows([
            [x.x(), y.x(), z.x(), 0.0],
            [x.y(), y.y(), z.y(), 0.0],
            [x.z(), y.z(), z.z(), 0.0],
            [origin.dot(x), origin.dot(y), origin.dot(z), 1.0],
        ])
    }

    /// View matrix for an eye at `eye` looking at `target`.
    ///
    /// The view axis `target - eye` becomes +Z. When `up` is parallel to the
    /// view axis the X and Y axes collapse to zero; callers must avoid that
    /// configuration.
    ///
    /// ```
    /// use xform_core::{Mat4, Vec3};
    /// let eye = Vec3::new(0.0, 0.0, -5.0);
    /// let view = Mat4::look_at(&eye, &Vec3::ZERO, &Vec3::UNIT_Y);
    /// let p = view.transform_position(&eye);
    /// assert!(p.xyz().is_nearly_zero(1e-6));
    /// ```
    pub fn look_at(eye: &Vec3, target: &Vec3, up: &Vec3) -> Self {
        let z = (*target - *eye).normal();
        let x = up.cross(&z).normal();
        let y = z.cross(&x);
        Self::basis_vectors(&x, &y, &z, &-*eye)
    }

    /// Rotation matrix for `rotator` (yaw about Z, then pitch about Y, then
    /// roll about X) with no translation.
    ///
    /// Row 0 is the forward direction [`Rotator::vector`].
    pub fn from_rotator(rotator: &Rotator) -> Self {
        Self::from_rotation_translation(rotator, &Vec3::ZERO)
    }

    /// Rotation by `rotator` followed by translation to `origin`.
    pub fn from_rotation_translation(rotator: &Rotator, origin: &Vec3) -> Self {
        let (sp, cp) = scalar::sin_cos(scalar::deg_to_rad(rotator.pitch));
        let (sy, cy) = scalar::sin_cos(scalar::deg_to_rad(rotator.yaw));
        let (sr, cr) = scalar::sin_cos(scalar::deg_to_rad(rotator.roll));
        Self::from_rows([
            [cp * cy, cp * sy, sp, 0.0],
            [sr * sp * cy - cr * sy, sr * sp * sy + cr * cy, -sr * cp, 0.0],
            [-(cr * sp * cy + sr * sy), cy * sr - cr * sp * sy, cr * cp, 0.0],
            [origin.x(), origin.y(), origin.z(), 1.0],
        ])
    }

    /// Euler angles of the rotation part.
    ///
    /// Scale is tolerated. Pitch comes back in `[-90, 90]`; yaw and roll in
    /// `(-180, 180]`. Near ±90° pitch yaw and roll are not independent and
    /// only their combination is recovered.
    pub fn rotator(&self) -> Rotator {
        let x_axis = self.scaled_axis(Axis::X);
        let y_axis = self.scaled_axis(Axis::Y);
        let z_axis = self.scaled_axis(Axis::Z);

        let pitch = scalar::rad_to_deg(scalar::atan2(
            x_axis.z(),
            scalar::sqrt(x_axis.x() * x_axis.x() + x_axis.y() * x_axis.y()),
        ));
        let yaw = scalar::rad_to_deg(scalar::atan2(x_axis.y(), x_axis.x()));

        let sy_axis = Self::from_rotator(&Rotator::new(pitch, yaw, 0.0)).scaled_axis(Axis::Y);
        let roll = scalar::rad_to_deg(scalar::atan2(z_axis.dot(&sy_axis), y_axis.dot(&sy_axis)));
        Rotator::new(pitch, yaw, roll)
    }

    /// Rotation matrix for a unit quaternion.
    pub fn from_quat(q: &Quat) -> Self {
        q.to_matrix(&Vec3::ZERO)
    }

    /// Rotation by a unit quaternion followed by translation to `origin`.
    pub fn from_quat_translation(q: &Quat, origin: &Vec3) -> Self {
        q.to_matrix(origin)
    }

    /// Quaternion of the rotation part; see [`Quat::from_matrix`].
    pub fn to_quat(&self) -> Quat {
        Quat::from_matrix(self)
    }
}
