// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Non-fatal diagnostics.
//!
//! Two channels exist, both emitted through `tracing` so the host decides
//! whether and where they are recorded:
//!
//! - **ensure** (`error` level, target `xform_core::ensure`): a fast path was
//!   handed input it does not support (e.g. [`crate::Mat4::inverse_fast`] on a
//!   singular matrix). Execution continues with a best-effort result.
//! - **nan** (`warn` level, target `xform_core::nan`): a value contains a
//!   non-finite component. Automatic checks in constructors are compiled in
//!   only with the `nan_diagnostic` feature; explicit `diagnostic_check_nan`
//!   calls always run.

use core::fmt;

use tracing::{error, warn};

/// Whether ensure diagnostics are compiled into this build.
///
/// True in debug builds, and in release builds with the `ensure_release`
/// feature.
pub const ENSURES_ENABLED: bool = cfg!(any(debug_assertions, feature = "ensure_release"));

/// Whether constructors report non-finite components automatically.
pub const NAN_DIAGNOSTIC_ENABLED: bool = cfg!(feature = "nan_diagnostic");

/// Reports a failed ensure. Recoverable: the caller keeps going.
#[cold]
pub fn ensure_failed(message: &str) {
    error!(target: "xform_core::ensure", "{message}");
}

#[cold]
fn report_nan(type_name: &str, value: &dyn fmt::Display) {
    warn!(target: "xform_core::nan", "{type_name} contains NaN: {value}");
}

/// Logs `value` when `contains_nan` is set and returns `contains_nan`.
pub(crate) fn check_nan(contains_nan: bool, type_name: &str, value: &dyn fmt::Display) -> bool {
    if contains_nan {
        report_nan(type_name, value);
    }
    contains_nan
}

/// Constructor hook; a no-op unless the `nan_diagnostic` feature is enabled.
#[inline]
pub(crate) fn auto_check_nan(contains_nan: bool, type_name: &str, value: &dyn fmt::Display) {
    if NAN_DIAGNOSTIC_ENABLED {
        check_nan(contains_nan, type_name, value);
    }
}
