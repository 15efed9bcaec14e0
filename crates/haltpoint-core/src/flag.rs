//! # Trap-Enable Flag
//!
//! The process-wide switch that decides whether an armed `haltpoint!()` call
//! site actually traps. The gate only ever reads it; arming and disarming is
//! left to whoever is coordinating with the debugger (an attach handshake, a
//! signal handler, a test harness).
//!
//! The flag starts **disarmed**. It is exported under the unmangled symbol
//! `haltpoint_via_gdb` with the same layout as a C `bool`, so a debugger can
//! flip it directly:
//!
//! ```text
//! (gdb) set var haltpoint_via_gdb = 1
//! (lldb) expr haltpoint_via_gdb = 1
//! ```
//!
//! ## Ordering
//!
//! All accesses are `Relaxed`. The gate is a best-effort rendezvous point, not
//! a synchronization primitive: a call site that races with a writer may see
//! either value.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{parse_switch, HaltpointResult};

/// Environment variable read by [`arm_from_env`].
pub const ARM_ENV_VAR: &str = "HALTPOINT_ARM";

#[export_name = "haltpoint_via_gdb"]
static VIA_GDB: AtomicBool = AtomicBool::new(false);

/// Arm the trap: subsequent gate invocations will halt.
pub fn arm()
{
    let previous = VIA_GDB.swap(true, Ordering::Relaxed);
    tracing::debug!(previous, "haltpoint armed");
}

/// Disarm the trap: subsequent gate invocations fall through.
pub fn disarm()
{
    let previous = VIA_GDB.swap(false, Ordering::Relaxed);
    tracing::debug!(previous, "haltpoint disarmed");
}

/// Set the flag and return the previous value.
pub fn set_armed(armed: bool) -> bool
{
    let previous = VIA_GDB.swap(armed, Ordering::Relaxed);
    tracing::debug!(previous, armed, "haltpoint flag set");
    previous
}

/// Current value of the flag.
///
/// This is the load performed by every armed call site, so it never logs.
#[inline(always)]
#[must_use]
pub fn is_armed() -> bool
{
    VIA_GDB.load(Ordering::Relaxed)
}

/// Arm or disarm the flag from the `HALTPOINT_ARM` environment variable.
///
/// Returns `Ok(Some(armed))` when the variable was present and applied, and
/// `Ok(None)` when it is unset (the flag is left untouched).
///
/// ## Errors
///
/// - `InvalidSetting`: the variable holds something other than a boolean
///   spelling; the flag is left untouched.
pub fn arm_from_env() -> HaltpointResult<Option<bool>>
{
    let Some(raw) = env::var_os(ARM_ENV_VAR) else {
        return Ok(None);
    };

    let armed = parse_switch(ARM_ENV_VAR, &raw.to_string_lossy())?;
    set_armed(armed);
    Ok(Some(armed))
}

/// RAII guard that arms the flag and restores the previous state on drop.
///
/// Useful for catching a single region of code:
///
/// ```rust
/// use haltpoint_core::flag::{self, ArmGuard};
///
/// assert!(!flag::is_armed());
/// {
///     let _guard = ArmGuard::new();
///     assert!(flag::is_armed());
/// }
/// assert!(!flag::is_armed());
/// ```
#[derive(Debug)]
#[must_use = "the flag is restored as soon as the guard is dropped"]
pub struct ArmGuard
{
    previous: bool,
}

impl ArmGuard
{
    /// Arm the flag, remembering what it was before.
    pub fn new() -> Self
    {
        Self {
            previous: set_armed(true),
        }
    }

    /// Whether the flag was already armed when this guard was created.
    #[must_use]
    pub const fn was_armed(&self) -> bool
    {
        self.previous
    }
}

impl Default for ArmGuard
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl Drop for ArmGuard
{
    fn drop(&mut self)
    {
        set_armed(self.previous);
    }
}

#[cfg(test)]
pub(crate) fn serial() -> std::sync::MutexGuard<'static, ()>
{
    use std::sync::{Mutex, PoisonError};

    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
