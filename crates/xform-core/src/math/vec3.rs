// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::constants::{KINDA_SMALL_NUMBER, SMALL_NUMBER};
use crate::math::scalar;
use crate::text::{parse_labeled, ParseError};

/// 3D vector used for points, directions and per-axis scale.
///
/// * Components are stored as a fixed array and are reachable by index
///   (`v[0]`, `v[1]`, `v[2]`) as well as through [`Vec3::x`] and friends.
/// * Whether a value is a point or a direction is decided by the caller:
///   use [`crate::Mat4::transform_position`] for points (`w = 1`) and
///   [`crate::Mat4::transform_vector`] for directions (`w = 0`).
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// All components one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis (forward).
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis (right).
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis (up).
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Vector with every component set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 3] {
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

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        scalar::sqrt(self.length_squared())
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Unit-length copy, or the zero vector when the squared length is below
    /// `tolerance`.
    ///
    /// Never divides by zero. Exactly-unit input is returned unchanged.
    pub fn safe_normal(&self, tolerance: f32) -> Self {
        let square_sum = self.length_squared();
        if square_sum == 1.0 {
            return *self;
        }
        if square_sum < tolerance {
            return Self::ZERO;
        }
        *self * scalar::inv_sqrt(square_sum)
    }

    /// [`Vec3::safe_normal`] with the default [`SMALL_NUMBER`] tolerance.
    pub fn normal(&self) -> Self {
        self.safe_normal(SMALL_NUMBER)
    }

    /// Normalizes in place when the squared length exceeds `tolerance`.
    ///
    /// Returns `false` (leaving the vector untouched) otherwise.
    pub fn normalize(&mut self, tolerance: f32) -> bool {
        let square_sum = self.length_squared();
        if square_sum > tolerance {
            *self *= scalar::inv_sqrt(square_sum);
            return true;
        }
        false
    }

    /// `true` when every component is within `tolerance` of zero.
    pub fn is_nearly_zero(&self, tolerance: f32) -> bool {
        self.data.iter().all(|c| c.abs() <= tolerance)
    }

    /// `true` when every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&c| c == 0.0)
    }

    /// Component-wise comparison within `tolerance`.
    pub fn equals(&self, other: &Self, tolerance: f32) -> bool {
        self.data
            .iter()
            .zip(other.data)
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// [`Vec3::equals`] with [`KINDA_SMALL_NUMBER`].
    pub fn nearly_eq(&self, other: &Self) -> bool {
        self.equals(other, KINDA_SMALL_NUMBER)
    }

    /// `true` if any component is NaN or infinite.
    pub fn contains_nan(&self) -> bool {
        self.data.iter().any(|c| !c.is_finite())
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self[0] + rhs[0], self[1] + rhs[1], self[2] + rhs[2])
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self[0] - rhs[0], self[1] - rhs[1], self[2] - rhs[2])
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self[0] * rhs, self[1] * rhs, self[2] * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Mul for Vec3 {
    type Output = Self;
    /// Component-wise product.
    fn mul(self, rhs: Self) -> Self {
        Self::new(self[0] * rhs[0], self[1] * rhs[1], self[2] * rhs[2])
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    /// Multiplies by the reciprocal; dividing by zero yields inf/NaN.
    fn div(self, rhs: f32) -> Self {
        self * (1.0 / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self[0], -self[1], -self[2])
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X={:.3} Y={:.3} Z={:.3}", self[0], self[1], self[2])
    }
}

impl FromStr for Vec3 {
    type Err = ParseError;

    /// Parses `"X=… Y=… Z=…"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labeled(s, ["X=", "Y=", "Z="]).map(Self::from)
    }
}
