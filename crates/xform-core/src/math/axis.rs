// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Selects a coordinate axis.
///
/// `None` is accepted wherever an axis is optional (e.g. [`crate::Mat4::mirror`]
/// with no flip) and is a no-op there.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// No axis.
    #[default]
    None,
    /// X axis (row/column 0).
    X,
    /// Y axis (row/column 1).
    Y,
    /// Z axis (row/column 2).
    Z,
}

impl Axis {
    /// Row/column index for the axis, `None` for [`Axis::None`].
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::X => Some(0),
            Self::Y => Some(1),
            Self::Z => Some(2),
        }
    }
}
