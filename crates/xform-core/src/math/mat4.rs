// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign};
use core::str::FromStr;

use bytemuck::{Pod, Zeroable};
use tracing::debug;

use crate::constants::SMALL_NUMBER;
use crate::diagnostics::{ensure_failed, ENSURES_ENABLED};
use crate::math::{scalar, Axis, Plane, Vec3, Vec4};
use crate::text::{parse_bracketed, ParseError};

/// Row‑major 4×4 matrix.
///
/// - Elements are addressed `m[row][col]`.
/// - Vectors are rows: `v' = v · M`. Rows 0–2 are the (scaled) X/Y/Z axes of
///   the transform and row 3 holds the translation.
/// - `a * b` composes "apply `a`, then `b`". This is the opposite of the
///   column-vector textbook reading; callers composing rotators and matrices
///   rely on it.
/// - Affine transforms have `m[r][3] = 0` for `r < 3` and `m[3][3] = 1`, but
///   general values are allowed.
///
/// # Examples
/// ```
/// use xform_core::{Mat4, Vec3};
/// let mut t = Mat4::IDENTITY;
/// t.set_origin(Vec3::new(5.0, -3.0, 2.0));
/// let p = t.transform_position(&Vec3::new(2.0, 4.0, -1.0));
/// assert_eq!(p.to_array(), [7.0, 1.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Mat4 {
    m: [[f32; 4]; 4],
}

/// Why a matrix can or cannot be inverted.
///
/// Both [`Mat4::inverse`] and [`Mat4::inverse_fast`] classify their input this
/// way; the axis check runs before the determinant check.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Invertibility {
    /// Non-degenerate axes and a finite, non-zero determinant.
    Invertible,
    /// All three scaled axes have squared length below `SMALL_NUMBER`.
    NilMatrix,
    /// The determinant is zero or not finite.
    Singular,
}

impl Mat4 {
    /// All elements zero.
    pub const ZERO: Self = Self::from_rows([[0.0; 4]; 4]);

    /// The identity matrix.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the zero matrix.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Creates a matrix from rows.
    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    /// Returns the rows.
    pub fn to_rows(self) -> [[f32; 4]; 4] {
        self.m
    }

    /// Returns the elements in row-major order.
    pub fn to_array(self) -> [f32; 16] {
        bytemuck::cast(self.m)
    }

    /// Rows 0–3 taken from four planes (`x, y, z, w` each).
    pub fn from_planes(x: Plane, y: Plane, z: Plane, w: Plane) -> Self {
        Self::from_rows([
            x.to_vec4().to_array(),
            y.to_vec4().to_array(),
            z.to_vec4().to_array(),
            w.to_vec4().to_array(),
        ])
    }

    /// Basis-and-origin matrix: rows 0–2 from `x`, `y`, `z` with a zero last
    /// column, row 3 from `origin` with `1` in the last column.
    pub fn from_axes(x: Vec3, y: Vec3, z: Vec3, origin: Vec3) -> Self {
        Self::from_rows([
            Vec4::from_vec3(x, 0.0).to_array(),
            Vec4::from_vec3(y, 0.0).to_array(),
            Vec4::from_vec3(z, 0.0).to_array(),
            Vec4::from_vec3(origin, 1.0).to_array(),
        ])
    }

    /// Resets to the identity matrix.
    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Matrix product `self · rhs`: the transform of `self` followed by `rhs`.
    ///
    /// # Examples
    /// ```
    /// use xform_core::{Mat4, Vec3};
    /// let mut shift = Mat4::IDENTITY;
    /// shift.set_origin(Vec3::new(1.0, 0.0, 0.0));
    /// let double = Mat4::IDENTITY.apply_scale(2.0);
    /// // shift first, then scale: (0,0,0) -> (1,0,0) -> (2,0,0)
    /// let p = shift.multiply(&double).transform_position(&Vec3::ZERO);
    /// assert_eq!(p.xyz().to_array(), [2.0, 0.0, 0.0]);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [[0.0_f32; 4]; 4];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                *cell = self.m[row][0] * rhs.m[0][col]
                    + self.m[row][1] * rhs.m[1][col]
                    + self.m[row][2] * rhs.m[2][col]
                    + self.m[row][3] * rhs.m[3][col];
            }
        }
        Self::from_rows(out)
    }

    /// Element-wise comparison within `tolerance`.
    pub fn equals(&self, other: &Self, tolerance: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// Homogeneous transform of a row vector: `v · M`.
    pub fn transform_vec4(&self, v: &Vec4) -> Vec4 {
        let mut out = [0.0_f32; 4];
        for (col, cell) in out.iter_mut().enumerate() {
            *cell = v[0] * self.m[0][col]
                + v[1] * self.m[1][col]
                + v[2] * self.m[2][col]
                + v[3] * self.m[3][col];
        }
        Vec4::from(out)
    }

    /// Transforms a location (`w = 1`); translation applies.
    pub fn transform_position(&self, v: &Vec3) -> Vec4 {
        self.transform_vec4(&Vec4::from_vec3(*v, 1.0))
    }

    /// Transforms a direction (`w = 0`); translation is ignored.
    ///
    /// Surface normals under non-uniform scale need
    /// [`Mat4::transpose_adjoint`] instead (see [`Plane::transform_by`]).
    pub fn transform_vector(&self, v: &Vec3) -> Vec4 {
        self.transform_vec4(&Vec4::from_vec3(*v, 0.0))
    }

    /// Inverts (via [`Mat4::inverse_fast`]) and transforms a location.
    pub fn inverse_transform_position(&self, v: &Vec3) -> Vec3 {
        self.inverse_fast().transform_position(v).xyz()
    }

    /// Inverts (via [`Mat4::inverse_fast`]) and transforms a direction.
    pub fn inverse_transform_vector(&self, v: &Vec3) -> Vec3 {
        self.inverse_fast().transform_vector(v).xyz()
    }

    /// Transpose.
    pub fn transposed(&self) -> Self {
        let mut out = [[0.0_f32; 4]; 4];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, cell) in out_row.iter_mut().enumerate() {
                *cell = self.m[col][row];
            }
        }
        Self::from_rows(out)
    }

    /// Determinant by cofactor expansion along column 0.
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0][0]
            * (m[1][1] * (m[2][2] * m[3][3] - m[2][3] * m[3][2])
                - m[2][1] * (m[1][2] * m[3][3] - m[1][3] * m[3][2])
                + m[3][1] * (m[1][2] * m[2][3] - m[1][3] * m[2][2]))
            - m[1][0]
                * (m[0][1] * (m[2][2] * m[3][3] - m[2][3] * m[3][2])
                    - m[2][1] * (m[0][2] * m[3][3] - m[0][3] * m[3][2])
                    + m[3][1] * (m[0][2] * m[2][3] - m[0][3] * m[2][2]))
            + m[2][0]
                * (m[0][1] * (m[1][2] * m[3][3] - m[1][3] * m[3][2])
                    - m[1][1] * (m[0][2] * m[3][3] - m[0][3] * m[3][2])
                    + m[3][1] * (m[0][2] * m[1][3] - m[0][3] * m[1][2]))
            - m[3][0]
                * (m[0][1] * (m[1][2] * m[2][3] - m[1][3] * m[2][2])
                    - m[1][1] * (m[0][2] * m[2][3] - m[0][3] * m[2][2])
                    + m[2][1] * (m[0][2] * m[1][3] - m[0][3] * m[1][2]))
    }

    /// Determinant of the 3×3 rotation/scale part.
    ///
    /// Negative for mirrored bases, near zero for collapsed ones.
    pub fn rot_determinant(&self) -> f32 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[1][0] * (m[0][1] * m[2][2] - m[0][2] * m[2][1])
            + m[2][0] * (m[0][1] * m[1][2] - m[0][2] * m[1][1])
    }

    // An axis is nil when its squared length is below SMALL_NUMBER; this also
    // covers axes whose components are each within SMALL_NUMBER of zero.
    fn is_nil(&self) -> bool {
        (0..3).all(|row| self.row_square_sum(row) < SMALL_NUMBER)
    }

    /// Classifies the matrix for inversion. The nil-axis check runs first.
    pub fn invertibility(&self) -> Invertibility {
        if self.is_nil() {
            return Invertibility::NilMatrix;
        }
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Invertibility::Singular;
        }
        Invertibility::Invertible
    }

    /// Inverse without a safety net.
    ///
    /// Assumes the matrix is invertible. With ensures enabled (debug builds or
    /// the `ensure_release` feature) a nil or singular input is reported
    /// through [`crate::diagnostics::ensure_failed`]; the inversion is
    /// attempted regardless and may contain NaN/inf or zeros. Use
    /// [`Mat4::inverse`] when validity matters.
    pub fn inverse_fast(&self) -> Self {
        if ENSURES_ENABLED {
            match self.invertibility() {
                Invertibility::NilMatrix => ensure_failed(
                    "Mat4::inverse_fast(), trying to invert a nil matrix, this results in NaNs! Use inverse() instead.",
                ),
                Invertibility::Singular => ensure_failed(
                    "Mat4::inverse_fast(), trying to invert a non-invertible matrix, this results in NaNs! Use inverse() instead.",
                ),
                Invertibility::Invertible => {}
            }
        }
        self.inverse_4x4()
    }

    /// Total inverse: returns [`Mat4::IDENTITY`] when all three scaled axes
    /// have squared length below [`SMALL_NUMBER`] or the determinant is
    /// exactly zero.
    ///
    /// Never panics and never introduces NaN from degenerate input.
    pub fn inverse(&self) -> Self {
        if self.is_nil() {
            return Self::IDENTITY;
        }
        if self.determinant() == 0.0 {
            return Self::IDENTITY;
        }
        self.inverse_4x4()
    }

    /// Adjugate over determinant with `f64` intermediates.
    ///
    /// A zero determinant scales the adjugate by zero instead of dividing.
    #[allow(clippy::cast_possible_truncation)]
    fn inverse_4x4(&self) -> Self {
        let s: [f64; 16] = self.to_array().map(f64::from);
        let mut inv = [0.0_f64; 16];
        inv[0] = s[5] * s[10] * s[15] - s[5] * s[11] * s[14] - s[9] * s[6] * s[15]
            + s[9] * s[7] * s[14]
            + s[13] * s[6] * s[11]
            - s[13] * s[7] * s[10];
        inv[1] = -s[1] * s[10] * s[15] + s[1] * s[11] * s[14] + s[9] * s[2] * s[15]
            - s[9] * s[3] * s[14]
            - s[13] * s[2] * s[11]
            + s[13] * s[3] * s[10];
        inv[2] = s[1] * s[6] * s[15] - s[1] * s[7] * s[14] - s[5] * s[2] * s[15]
            + s[5] * s[3] * s[14]
            + s[13] * s[2] * s[7]
            - s[13] * s[3] * s[6];
        inv[3] = -s[1] * s[6] * s[11] + s[1] * s[7] * s[10] + s[5] * s[2] * s[11]
            - s[5] * s[3] * s[10]
            - s[9] * s[2] * s[7]
            + s[9] * s[3] * s[6];
        inv[4] = -s[4] * s[10] * s[15] + s[4] * s[11] * s[14] + s[8] * s[6] * s[15]
            - s[8] * s[7] * s[14]
            - s[12] * s[6] * s[11]
            + s[12] * s[7] * s[10];
        inv[5] = s[0] * s[10] * s[15] - s[0] * s[11] * s[14] - s[8] * s[2] * s[15]
            + s[8] * s[3] * s[14]
            + s[12] * s[2] * s[11]
            - s[12] * s[3] * s[10];
        inv[6] = -s[0] * s[6] * s[15] + s[0] * s[7] * s[14] + s[4] * s[2] * s[15]
            - s[4] * s[3] * s[14]
            - s[12] * s[2] * s[7]
            + s[12] * s[3] * s[6];
        inv[7] = s[0] * s[6] * s[11] - s[0] * s[7] * s[10] - s[4] * s[2] * s[11]
            + s[4] * s[3] * s[10]
            + s[8] * s[2] * s[7]
            - s[8] * s[3] * s[6];
        inv[8] = s[4] * s[9] * s[15] - s[4] * s[11] * s[13] - s[8] * s[5] * s[15]
            + s[8] * s[7] * s[13]
            + s[12] * s[5] * s[11]
            - s[12] * s[7] * s[9];
        inv[9] = -s[0] * s[9] * s[15] + s[0] * s[11] * s[13] + s[8] * s[1] * s[15]
            - s[8] * s[3] * s[13]
            - s[12] * s[1] * s[11]
            + s[12] * s[3] * s[9];
        inv[10] = s[0] * s[5] * s[15] - s[0] * s[7] * s[13] - s[4] * s[1] * s[15]
            + s[4] * s[3] * s[13]
            + s[12] * s[1] * s[7]
            - s[12] * s[3] * s[5];
        inv[11] = -s[0] * s[5] * s[11] + s[0] * s[7] * s[9] + s[4] * s[1] * s[11]
            - s[4] * s[3] * s[9]
            - s[8] * s[1] * s[7]
            + s[8] * s[3] * s[5];
        inv[12] = -s[4] * s[9] * s[14] + s[4] * s[10] * s[13] + s[8] * s[5] * s[14]
            - s[8] * s[6] * s[13]
            - s[12] * s[5] * s[10]
            + s[12] * s[6] * s[9];
        inv[13] = s[0] * s[9] * s[14] - s[0] * s[10] * s[13] - s[8] * s[1] * s[14]
            + s[8] * s[2] * s[13]
            + s[12] * s[1] * s[10]
            - s[12] * s[2] * s[9];
        inv[14] = -s[0] * s[5] * s[14] + s[0] * s[6] * s[13] + s[4] * s[1] * s[14]
            - s[4] * s[2] * s[13]
            - s[12] * s[1] * s[6]
            + s[12] * s[2] * s[5];
        inv[15] = s[0] * s[5] * s[10] - s[0] * s[6] * s[9] - s[4] * s[1] * s[10]
            + s[4] * s[2] * s[9]
            + s[8] * s[1] * s[6]
            - s[8] * s[2] * s[5];

        let mut det = s[0] * inv[0] + s[1] * inv[4] + s[2] * inv[8] + s[3] * inv[12];
        if det != 0.0 {
            det = 1.0 / det;
        }
        let flat: [f32; 16] = inv.map(|v| (v * det) as f32);
        Self::from_rows(bytemuck::cast(flat))
    }

    /// Adjoint transpose of the 3×3 part with a unit `w`; the matrix that
    /// correctly carries normals through non-uniform scale.
    pub fn transpose_adjoint(&self) -> Self {
        let m = &self.m;
        Self::from_rows([
            [
                m[1][1] * m[2][2] - m[1][2] * m[2][1],
                m[1][2] * m[2][0] - m[1][0] * m[2][2],
                m[1][0] * m[2][1] - m[1][1] * m[2][0],
                0.0,
            ],
            [
                m[2][1] * m[0][2] - m[2][2] * m[0][1],
                m[2][2] * m[0][0] - m[2][0] * m[0][2],
                m[2][0] * m[0][1] - m[2][1] * m[0][0],
                0.0,
            ],
            [
                m[0][1] * m[1][2] - m[0][2] * m[1][1],
                m[0][2] * m[1][0] - m[0][0] * m[1][2],
                m[0][0] * m[1][1] - m[0][1] * m[1][0],
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    fn row_square_sum(&self, row: usize) -> f32 {
        let r = &self.m[row];
        r[0] * r[0] + r[1] * r[1] + r[2] * r[2]
    }

    fn scale_row3(&mut self, row: usize, factor: f32) {
        for cell in &mut self.m[row][..3] {
            *cell *= factor;
        }
    }

    /// Normalizes rows 0–2 of the 3×3 part to unit length.
    ///
    /// Rows whose squared length is below `tolerance` are left as they are.
    pub fn remove_scaling(&mut self, tolerance: f32) {
        for row in 0..3 {
            let square_sum = self.row_square_sum(row);
            let factor = scalar::float_select(
                square_sum - tolerance,
                scalar::inv_sqrt(square_sum),
                1.0,
            );
            self.scale_row3(row, factor);
        }
    }

    /// Copy with [`Mat4::remove_scaling`] applied.
    pub fn without_scale(&self, tolerance: f32) -> Self {
        let mut out = *self;
        out.remove_scaling(tolerance);
        out
    }

    /// Removes the per-axis scale in place and returns it.
    ///
    /// Each of rows 0–2 whose squared length exceeds `tolerance` is divided by
    /// its length; the other rows are untouched and report a scale of 0.
    pub fn extract_scaling(&mut self, tolerance: f32) -> Vec3 {
        let mut scale = Vec3::ZERO;
        for row in 0..3 {
            let square_sum = self.row_square_sum(row);
            if square_sum > tolerance {
                let length = scalar::sqrt(square_sum);
                scale[row] = length;
                self.scale_row3(row, 1.0 / length);
            }
        }
        scale
    }

    /// Per-axis scale: the length of each of rows 0–2, or 0 for rows whose
    /// squared length does not exceed `tolerance`.
    pub fn scale_vector(&self, tolerance: f32) -> Vec3 {
        let mut scale = Vec3::ZERO;
        for row in 0..3 {
            let square_sum = self.row_square_sum(row);
            if square_sum > tolerance {
                scale[row] = scalar::sqrt(square_sum);
            }
        }
        scale
    }

    /// Copy with the translation (row 3, xyz) zeroed.
    pub fn remove_translation(&self) -> Self {
        let mut out = *self;
        out.set_origin(Vec3::ZERO);
        out
    }

    /// Copy with `translation` added to row 3 (xyz); nothing else changes.
    pub fn concat_translation(&self, translation: &Vec3) -> Self {
        let mut out = *self;
        for (col, cell) in out.m[3][..3].iter_mut().enumerate() {
            *cell += translation[col];
        }
        out
    }

    /// `true` if any element is NaN or infinite.
    pub fn contains_nan(&self) -> bool {
        self.to_array().iter().any(|v| !v.is_finite())
    }

    /// Scales the translation component-wise by `scale`.
    pub fn scale_translation(&mut self, scale: &Vec3) {
        for (col, cell) in self.m[3][..3].iter_mut().enumerate() {
            *cell *= scale[col];
        }
    }

    /// Largest length among rows 0–2.
    pub fn maximum_axis_scale(&self) -> f32 {
        let max_sq = self
            .row_square_sum(0)
            .max(self.row_square_sum(1))
            .max(self.row_square_sum(2));
        scalar::sqrt(max_sq)
    }

    /// Uniform `scale` applied before this transform.
    pub fn apply_scale(&self, scale: f32) -> Self {
        let scale_matrix = Self::from_rows([
            [scale, 0.0, 0.0, 0.0],
            [0.0, scale, 0.0, 0.0],
            [0.0, 0.0, scale, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        scale_matrix * *self
    }

    /// Translation (row 3, xyz).
    pub fn origin(&self) -> Vec3 {
        Vec3::new(self.m[3][0], self.m[3][1], self.m[3][2])
    }

    /// Overwrites the translation (row 3, xyz).
    pub fn set_origin(&mut self, origin: Vec3) {
        self.m[3][..3].copy_from_slice(&origin.to_array());
    }

    /// Row 0, 1 or 2 as a vector, including scale. [`Axis::None`] yields zero.
    pub fn scaled_axis(&self, axis: Axis) -> Vec3 {
        axis.index().map_or(Vec3::ZERO, |row| {
            Vec3::new(self.m[row][0], self.m[row][1], self.m[row][2])
        })
    }

    /// All three scaled axes.
    pub fn scaled_axes(&self) -> (Vec3, Vec3, Vec3) {
        (
            self.scaled_axis(Axis::X),
            self.scaled_axis(Axis::Y),
            self.scaled_axis(Axis::Z),
        )
    }

    /// Unit-length axis; a zero-length axis yields the zero vector.
    pub fn unit_axis(&self, axis: Axis) -> Vec3 {
        self.scaled_axis(axis).normal()
    }

    /// All three unit axes.
    pub fn unit_axes(&self) -> (Vec3, Vec3, Vec3) {
        (
            self.unit_axis(Axis::X),
            self.unit_axis(Axis::Y),
            self.unit_axis(Axis::Z),
        )
    }

    /// Overwrites row `axis` (xyz).
    pub fn set_axis(&mut self, axis: Axis, value: Vec3) {
        if let Some(row) = axis.index() {
            self.m[row][..3].copy_from_slice(&value.to_array());
        }
    }

    /// Overwrites whichever of the three axes and the origin are `Some`.
    pub fn set_axes(
        &mut self,
        x: Option<Vec3>,
        y: Option<Vec3>,
        z: Option<Vec3>,
        origin: Option<Vec3>,
    ) {
        for (axis, value) in [(Axis::X, x), (Axis::Y, y), (Axis::Z, z)] {
            if let Some(value) = value {
                self.set_axis(axis, value);
            }
        }
        if let Some(origin) = origin {
            self.set_origin(origin);
        }
    }

    /// Column `col` of rows 0–2.
    pub fn column(&self, col: usize) -> Vec3 {
        Vec3::new(self.m[0][col], self.m[1][col], self.m[2][col])
    }

    /// Overwrites column `col` of rows 0–2.
    pub fn set_column(&mut self, col: usize, value: Vec3) {
        for row in 0..3 {
            self.m[row][col] = value[row];
        }
    }

    /// Mirrors the transform across `mirror_axis` and flips `flip_axis`.
    ///
    /// Negates column `mirror_axis` in all four rows, then negates row
    /// `flip_axis` in columns 0–2. The two are independent; passing the same
    /// axis twice negates the shared element twice.
    pub fn mirror(&mut self, mirror_axis: Axis, flip_axis: Axis) {
        if let Some(col) = mirror_axis.index() {
            for row in &mut self.m {
                row[col] = -row[col];
            }
        }
        if let Some(row) = flip_axis.index() {
            for cell in &mut self.m[row][..3] {
                *cell = -*cell;
            }
        }
    }

    /// Bit-pattern hash of the sixteen elements, for debugging.
    pub fn compute_hash(&self) -> u32 {
        let bits: [u32; 16] = bytemuck::cast(self.m);
        bits.iter()
            .zip(0_u32..)
            .fold(0, |acc, (&b, i)| acc ^ b.wrapping_add(i))
    }

    /// Logs the matrix at debug level.
    pub fn debug_print(&self) {
        debug!(target: "xform_core::mat4", "{self}");
    }

    /// Transposed upper 3×4 block: columns 0–2 laid out as rows of four.
    pub fn to_3x4_transpose(&self) -> [f32; 12] {
        let m = &self.m;
        [
            m[0][0], m[1][0], m[2][0], m[3][0], //
            m[0][1], m[1][1], m[2][1], m[3][1], //
            m[0][2], m[1][2], m[2][2], m[3][2],
        ]
    }
}

impl Index<usize> for Mat4 {
    type Output = [f32; 4];
    fn index(&self, row: usize) -> &[f32; 4] {
        &self.m[row]
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, row: usize) -> &mut [f32; 4] {
        &mut self.m[row]
    }
}

impl From<[[f32; 4]; 4]> for Mat4 {
    fn from(value: [[f32; 4]; 4]) -> Self {
        Self::from_rows(value)
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self::from_rows(bytemuck::cast(value))
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&Mat4> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: &Mat4) -> Self::Output {
        self.multiply(rhs)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;
    /// Weights every element; this is not a scale transform.
    fn mul(self, rhs: f32) -> Self::Output {
        Self::from_rows(self.m.map(|row| row.map(|v| v * rhs)))
    }
}

impl MulAssign<f32> for Mat4 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Add for Mat4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self.m;
        for (out_row, rhs_row) in out.iter_mut().zip(rhs.m) {
            for (cell, v) in out_row.iter_mut().zip(rhs_row) {
                *cell += v;
            }
        }
        Self::from_rows(out)
    }
}

impl AddAssign for Mat4 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Mat4 {
    /// Four `"[a b c d] "` groups, one per row, using round-trip float text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.m {
            write!(f, "[{} {} {} {}] ", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}

impl FromStr for Mat4 {
    type Err = ParseError;

    /// Parses the `Display` form (brackets optional, sixteen values).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bracketed::<16>(s).map(Self::from)
    }
}
