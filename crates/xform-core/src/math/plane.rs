// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::Neg;

use bytemuck::{Pod, Zeroable};

use crate::math::{Mat4, Vec3, Vec4};

/// Plane `dot(normal, p) = w`.
///
/// The normal is not required to be unit length, but planes produced by
/// [`Mat4`] frustum extraction and [`Plane::transform_by`] are normalized.
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Plane {
    normal: Vec3,
    w: f32,
}

impl Plane {
    /// Creates a plane from the normal components and `w`.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            normal: Vec3::new(x, y, z),
            w,
        }
    }

    /// Creates a plane from a normal and its signed distance along it.
    pub const fn from_normal_w(normal: Vec3, w: f32) -> Self {
        Self { normal, w }
    }

    /// Plane through `base` with the given `normal`.
    pub fn from_point_normal(base: Vec3, normal: Vec3) -> Self {
        Self::from_normal_w(normal, base.dot(&normal))
    }

    /// Reinterprets `(x, y, z, w)` as a plane.
    pub fn from_vec4(v: Vec4) -> Self {
        Self::from_normal_w(v.xyz(), v.w())
    }

    /// Plane normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Signed distance of the plane from the origin along the normal.
    pub fn w(&self) -> f32 {
        self.w
    }

    /// `(x, y, z, w)` as a vector.
    pub fn to_vec4(&self) -> Vec4 {
        Vec4::from_vec3(self.normal, self.w)
    }

    /// Signed distance of `p` from the plane, scaled by the normal length.
    pub fn plane_dot(&self, p: &Vec3) -> f32 {
        self.normal.dot(p) - self.w
    }

    /// Same plane with the opposite orientation.
    pub fn flip(&self) -> Self {
        -*self
    }

    /// Component-wise comparison within `tolerance`.
    pub fn equals(&self, other: &Self, tolerance: f32) -> bool {
        self.to_vec4().equals(&other.to_vec4(), tolerance)
    }

    /// Transforms the plane by an arbitrary (possibly non-uniformly scaled)
    /// matrix.
    ///
    /// Transforming the normal with `m` itself is wrong under non-uniform
    /// scale; the normal goes through the adjoint transpose instead and is
    /// flipped when `m` reverses orientation.
    pub fn transform_by(&self, m: &Mat4) -> Self {
        self.transform_by_using_adjoint_t(m, m.determinant(), &m.transpose_adjoint())
    }

    /// [`Plane::transform_by`] with `det(m)` and `m.transpose_adjoint()`
    /// supplied by the caller, for transforming many planes by one matrix.
    pub fn transform_by_using_adjoint_t(&self, m: &Mat4, det_m: f32, ta: &Mat4) -> Self {
        let mut new_normal = ta.transform_vector(&self.normal).xyz().normal();
        if det_m < 0.0 {
            new_normal = -new_normal;
        }
        let base = m.transform_position(&(self.normal * self.w)).xyz();
        Self::from_point_normal(base, new_normal)
    }
}

impl Neg for Plane {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_normal_w(-self.normal, -self.w)
    }
}

impl From<Vec4> for Plane {
    fn from(value: Vec4) -> Self {
        Self::from_vec4(value)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_vec4())
    }
}
