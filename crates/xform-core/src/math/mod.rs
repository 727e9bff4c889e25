// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Linear algebra primitives for engine transforms.
//!
//! Conventions shared by every type in this module:
//! - `f32` storage; angles on [`Rotator`] are degrees, scalar trig helpers take
//!   radians.
//! - Row vectors: a point `p` is transformed as `p' = p · M`, so `a * b` means
//!   "apply `a`, then `b`".
//! - Axis order X (forward), Y (right), Z (up); rotators compose yaw about Z,
//!   then pitch about Y, then roll about X.

mod axis;
mod basis;
mod frustum;
mod mat4;
mod plane;
mod quat;
mod rotator;
pub mod scalar;
mod vec3;
mod vec4;

pub use axis::Axis;
pub use mat4::{Invertibility, Mat4};
pub use plane::Plane;
pub use quat::Quat;
pub use rotator::Rotator;
pub use scalar::{clamp, deg_to_rad, rad_to_deg};
pub use vec3::Vec3;
pub use vec4::Vec4;
