// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Frustum plane extraction from a combined view-projection matrix.
//!
//! Each face is a sum or difference of two matrix columns `(A, B, C, D)`. The
//! plane is normalized and its normal negated so it points out of the volume.

use crate::constants::DELTA;
use crate::math::{scalar, Mat4, Plane, Vec4};

fn make_frustum_plane(v: Vec4) -> Option<Plane> {
    let length_squared = v.size_squared3();
    if length_squared <= DELTA * DELTA {
        return None;
    }
    let s = scalar::inv_sqrt(length_squared);
    Some(Plane::new(-v.x() * s, -v.y() * s, -v.z() * s, v.w() * s))
}

impl Mat4 {
    fn column4(&self, col: usize) -> Vec4 {
        Vec4::new(self[0][col], self[1][col], self[2][col], self[3][col])
    }

    /// Near clipping plane (column 2), or `None` for a degenerate face.
    ///
    /// # Examples
    /// ```
    /// use xform_core::{Mat4, Plane};
    /// let near = Mat4::IDENTITY.frustum_near_plane();
    /// assert_eq!(near, Some(Plane::new(0.0, 0.0, -1.0, 0.0)));
    /// assert_eq!(Mat4::ZERO.frustum_near_plane(), None);
    /// ```
    pub fn frustum_near_plane(&self) -> Option<Plane> {
        make_frustum_plane(self.column4(2))
    }

    /// Far clipping plane (column 3 minus column 2).
    pub fn frustum_far_plane(&self) -> Option<Plane> {
        make_frustum_plane(self.column4(3) - self.column4(2))
    }

    /// Left clipping plane (column 3 plus column 0).
    pub fn frustum_left_plane(&self) -> Option<Plane> {
        make_frustum_plane(self.column4(3) + self.column4(0))
    }

    /// Right clipping plane (column 3 minus column 0).
    pub fn frustum_right_plane(&self) -> Option<Plane> {
        make_frustum_plane(self.column4(3) - self.column4(0))
    }

    /// Top clipping plane (column 3 minus column 1).
    pub fn frustum_top_plane(&self) -> Option<Plane> {
        make_frustum_plane(self.column4(3) - self.column4(1))
    }

    /// Bottom clipping plane (column 3 plus column 1).
    pub fn frustum_bottom_plane(&self) -> Option<Plane> {
        make_frustum_plane(self.column4(3) + self.column4(1))
    }
}
