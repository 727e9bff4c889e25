// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Default degeneracy threshold for squared lengths and near-zero axes.
pub const SMALL_NUMBER: f32 = 1.0e-8;

/// Default tolerance for "nearly equal" comparisons of values and angles.
pub const KINDA_SMALL_NUMBER: f32 = 1.0e-4;

/// Threshold below which a frustum plane normal is treated as degenerate.
///
/// Compared against squared normal length as `DELTA * DELTA`.
pub const DELTA: f32 = 1.0e-5;

/// Large finite sentinel.
pub const BIG_NUMBER: f32 = 3.4e38;

/// Pitch threshold past which a quaternion is treated as gimbal-locked when
/// converting back to Euler angles.
pub(crate) const QUAT_SINGULARITY_THRESHOLD: f32 = 0.4999995;
