// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! xform-core: fixed-size transform math for real-time engine code.
//!
//! The crate centres on the row-major [`Mat4`] and its interaction with
//! [`Rotator`] (Euler angles in degrees) and [`Plane`]. Vectors ([`Vec3`],
//! [`Vec4`]) and a thin [`Quat`] conversion boundary complete the surface.
//!
//! Every operation is pure, `O(1)` and allocation-free. Degenerate inputs are
//! handled by total functions (`Mat4::inverse` substitutes identity) or by
//! `Option` results (frustum extraction); nothing here panics on numeric input.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self,
    clippy::float_cmp
)]

/// Tolerances shared by the math routines.
pub mod constants;
/// Ensure-style and NaN diagnostics routed through `tracing`.
pub mod diagnostics;
/// Vectors, planes, rotators, matrices and the quaternion boundary.
pub mod math;
mod text;

pub use constants::{BIG_NUMBER, DELTA, KINDA_SMALL_NUMBER, SMALL_NUMBER};
pub use math::{Axis, Invertibility, Mat4, Plane, Quat, Rotator, Vec3, Vec4};
/// Error returned when parsing the labeled text form of a math type.
pub use text::ParseError;
