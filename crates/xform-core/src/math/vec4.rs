// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use core::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::math::{scalar, Vec3};
use crate::text::{parse_labeled, ParseError};

/// Homogeneous 4-component vector, the result type of matrix transforms.
///
/// Arithmetic is a fast path: dividing by a zero scalar or component
/// propagates IEEE inf/NaN instead of being intercepted. Use
/// [`Vec4::contains_nan`] to check results when that matters.
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Vec4 {
    data: [f32; 4],
}

impl Vec4 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Extends `v` with the given `w`.
    pub const fn from_vec3(v: Vec3, w: f32) -> Self {
        let [x, y, z] = v.to_array();
        Self::new(x, y, z, w)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// W component.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// Drops `w`.
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Dot product of the xyz parts.
    pub fn dot3(&self, other: &Self) -> f32 {
        self.xyz().dot(&other.xyz())
    }

    /// Dot product of all four components.
    pub fn dot4(&self, other: &Self) -> f32 {
        self.dot3(other) + self.data[3] * other.data[3]
    }

    /// Cross product of the xyz parts; `w` of the result is zero.
    pub fn cross3(&self, other: &Self) -> Self {
        Self::from_vec3(self.xyz().cross(&other.xyz()), 0.0)
    }

    /// Length of all four components.
    pub fn size(&self) -> f32 {
        scalar::sqrt(self.size_squared())
    }

    /// Squared length of all four components.
    pub fn size_squared(&self) -> f32 {
        self.dot4(self)
    }

    /// Length of the xyz part.
    pub fn size3(&self) -> f32 {
        scalar::sqrt(self.size_squared3())
    }

    /// Squared length of the xyz part.
    pub fn size_squared3(&self) -> f32 {
        self.dot3(self)
    }

    /// Unit-length xyz with `w = 0`, or all zeros when the squared xyz length
    /// does not exceed `tolerance`.
    pub fn safe_normal(&self, tolerance: f32) -> Self {
        let square_sum = self.size_squared3();
        if square_sum > tolerance {
            let scale = scalar::inv_sqrt(square_sum);
            return Self::from_vec3(self.xyz() * scale, 0.0);
        }
        Self::ZERO
    }

    /// Unit-length xyz with `w = 0`, without a zero-length guard.
    ///
    /// A zero xyz part yields NaN components.
    pub fn unsafe_normal3(&self) -> Self {
        let scale = scalar::inv_sqrt(self.size_squared3());
        Self::from_vec3(self.xyz() * scale, 0.0)
    }

    /// `true` when the squared xyz length is within `length_squared_tolerance`
    /// of one.
    pub fn is_unit3(&self, length_squared_tolerance: f32) -> bool {
        (1.0 - self.size_squared3()).abs() < length_squared_tolerance
    }

    /// `true` when every xyz component is within `tolerance` of zero.
    pub fn is_nearly_zero3(&self, tolerance: f32) -> bool {
        self.xyz().is_nearly_zero(tolerance)
    }

    /// Reflects the xyz part about `normal`: `2 (v·n) n - v`.
    pub fn reflect3(&self, normal: &Self) -> Self {
        *normal * (2.0 * self.dot3(normal)) - *self
    }

    /// Component-wise comparison within `tolerance`.
    pub fn equals(&self, other: &Self, tolerance: f32) -> bool {
        self.data
            .iter()
            .zip(other.data)
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// `true` if any component is NaN or infinite.
    pub fn contains_nan(&self) -> bool {
        self.data.iter().any(|c| !c.is_finite())
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(value: Vec4) -> Self {
        value.data
    }
}

impl From<Vec4> for Vec3 {
    fn from(value: Vec4) -> Self {
        value.xyz()
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vec4 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

fn zip_with(a: Vec4, b: Vec4, f: impl Fn(f32, f32) -> f32) -> Vec4 {
    Vec4::new(f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3]))
}

impl Neg for Vec4 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self[0], -self[1], -self[2], -self[3])
    }
}

impl Add for Vec4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        zip_with(self, rhs, |a, b| a + b)
    }
}

impl Sub for Vec4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        zip_with(self, rhs, |a, b| a - b)
    }
}

impl Mul for Vec4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        zip_with(self, rhs, |a, b| a * b)
    }
}

impl Div for Vec4 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        zip_with(self, rhs, |a, b| a / b)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self[0] * rhs, self[1] * rhs, self[2] * rhs, self[3] * rhs)
    }
}

impl Mul<Vec4> for f32 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Vec4 {
        rhs * self
    }
}

impl Div<f32> for Vec4 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        self * (1.0 / rhs)
    }
}

impl AddAssign for Vec4 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec4 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vec4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Vec4 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl MulAssign<f32> for Vec4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X={:.3} Y={:.3} Z={:.3} W={:.3}",
            self[0], self[1], self[2], self[3]
        )
    }
}

impl FromStr for Vec4 {
    type Err = ParseError;

    /// Parses `"X=… Y=… Z=… W=…"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labeled(s, ["X=", "Y=", "Z=", "W="]).map(Self::from)
    }
}
