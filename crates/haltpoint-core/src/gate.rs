//! # Trap Gate
//!
//! `haltpoint!()` is the call-site construct. Its definition depends on the
//! build (see [`GateMode`](crate::mode::GateMode)):
//!
//! - **armed**: reads the trap-enable flag and, if it is set, executes the
//!   architecture's trap instruction inline at the call site. Otherwise it falls
//!   through.
//! - **inert**: expands to `()`. The flag is never read.
//! - **absent**: the macro does not exist, so any use is a compile error.
//!
//! The mode is decided inside this crate, so `cfg(debug_assertions)` in the
//! calling crate is not a reliable guard (`ndebug` disables the gate in a debug
//! build). Wrap call sites in [`if_gate!`](crate::if_gate) instead: its body is
//! kept exactly when `haltpoint!()` exists.
//!
//! ## Example
//!
//! ```rust
//! fn parse_frame(bytes: &[u8]) -> usize
//! {
//!     if bytes.is_empty() {
//!         // Stops here only when a debugger has armed the flag.
//!         haltpoint_core::if_gate! {
//!             haltpoint_core::haltpoint!();
//!         }
//!     }
//!     bytes.len()
//! }
//! # assert_eq!(parse_frame(&[]), 0);
//! ```
//!
//! ## Unguarded call sites
//!
//! Without the guard, a build with no gate rejects the call:
//!
#![cfg_attr(
    not(any(haltpoint_gate = "armed", haltpoint_gate = "inert")),
    doc = "```compile_fail,E0433"
)]
#![cfg_attr(any(haltpoint_gate = "armed", haltpoint_gate = "inert"), doc = "```")]
//! haltpoint_core::haltpoint!();
//! ```

/// Keep the enclosed statements or items only when `haltpoint!()` is defined.
///
/// ```rust
/// let mut reached = false;
/// haltpoint_core::if_gate! {
///     haltpoint_core::haltpoint!();
///     reached = true;
/// }
/// assert_eq!(reached, haltpoint_core::GATE_MODE.is_available());
/// ```
#[cfg(any(haltpoint_gate = "armed", haltpoint_gate = "inert"))]
#[macro_export]
macro_rules! if_gate {
    ($($body:tt)*) => {
        $($body)*
    };
}

/// Absent form: the enclosed tokens are dropped without being resolved.
#[cfg(not(any(haltpoint_gate = "armed", haltpoint_gate = "inert")))]
#[macro_export]
macro_rules! if_gate {
    ($($body:tt)*) => {};
}

/// Halt into an attached debugger if the trap-enable flag is armed.
#[cfg(haltpoint_gate = "armed")]
#[macro_export]
macro_rules! haltpoint {
    () => {
        if $crate::flag::is_armed() {
            $crate::gate::__halt(file!(), line!(), column!());
        }
    };
}

/// Inert form: compiles to nothing and never reads the flag.
#[cfg(haltpoint_gate = "inert")]
#[macro_export]
macro_rules! haltpoint {
    () => {
        ()
    };
}

/// Slow path of an armed gate whose flag was set.
///
/// Only called from the expansion of `haltpoint!()`. It exists in armed builds
/// only, so nothing outside the macro should name it.
#[cfg(haltpoint_gate = "armed")]
#[doc(hidden)]
#[inline(always)]
pub fn __halt(file: &'static str, line: u32, column: u32)
{
    tracing::warn!(file, line, column, trap = crate::arch::TRAP_MNEMONIC, "haltpoint hit, trapping");
    crate::arch::trap();
}
