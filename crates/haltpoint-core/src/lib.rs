//! # haltpoint-core
//!
//! Conditional software breakpoints for halting into an attached debugger.
//!
//! Drop `haltpoint!()` anywhere in a debug build. It costs one relaxed atomic
//! load until a debugger arms the process-wide flag, after which the next
//! call site to run executes a trap instruction and stops right there.
//!
//! ## Build Modes
//!
//! - **Debug** (`debug_assertions` or the `debug` feature, without `ndebug`):
//!   the gate checks the flag and traps.
//! - **Release + `allow-inert`**: the gate is a no-op.
//! - **Plain release**: the gate is undefined and every call site fails to
//!   compile, which keeps forgotten breakpoints visible.
//!
//! ## Arming
//!
//! The flag starts disarmed. Whoever talks to the debugger flips it through
//! [`flag::arm`] / [`flag::disarm`], or the debugger writes the exported
//! `haltpoint_via_gdb` symbol directly.
//!
//! ## Why unsafe code is needed
//!
//! Trap instructions are emitted with `core::arch::asm!`, and the flag is
//! exported under a fixed symbol name so debuggers can find it. Both require
//! `unsafe` (or an attribute the `unsafe_code` lint covers).

#![allow(unsafe_code)] // Required for inline asm and the exported flag symbol

pub mod arch;
pub mod error;
pub mod flag;
pub mod gate;
pub mod mode;
pub mod prelude;

// Re-export commonly used types
pub use error::{HaltpointError, HaltpointResult};
pub use flag::{arm, disarm, is_armed, ArmGuard};
pub use mode::{GateMode, GATE_MODE};
