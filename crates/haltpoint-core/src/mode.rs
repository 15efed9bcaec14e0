//! Which form of the trap gate this build carries.
//!
//! The choice is made by `build.rs` and cannot change at runtime. `GATE_MODE`
//! mirrors it so callers can log or assert on it.

use std::fmt;
use std::str::FromStr;

use crate::error::HaltpointError;

/// Compiled form of `haltpoint!()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateMode
{
    /// Debug build: trap when the flag is armed.
    Armed,
    /// Non-debug build with `allow-inert`: the macro is a no-op.
    Inert,
    /// Plain release build: the macro is not defined.
    Absent,
}

impl GateMode
{
    #[must_use]
    pub const fn as_str(self) -> &'static str
    {
        match self {
            GateMode::Armed => "armed",
            GateMode::Inert => "inert",
            GateMode::Absent => "absent",
        }
    }

    /// Whether `haltpoint!()` can be written in this mode.
    #[must_use]
    pub const fn is_available(self) -> bool
    {
        !matches!(self, GateMode::Absent)
    }

    /// Whether invoking the gate can ever trap in this mode.
    #[must_use]
    pub const fn can_trap(self) -> bool
    {
        matches!(self, GateMode::Armed)
    }
}

impl fmt::Display for GateMode
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(self.as_str())
    }
}

impl FromStr for GateMode
{
    type Err = HaltpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.trim().to_ascii_lowercase().as_str() {
            "armed" => Ok(GateMode::Armed),
            "inert" => Ok(GateMode::Inert),
            "absent" => Ok(GateMode::Absent),
            _ => Err(HaltpointError::InvalidGateMode(s.to_string())),
        }
    }
}

/// The mode this crate was compiled in.
#[cfg(haltpoint_gate = "armed")]
pub const GATE_MODE: GateMode = GateMode::Armed;

#[cfg(haltpoint_gate = "inert")]
pub const GATE_MODE: GateMode = GateMode::Inert;

#[cfg(not(any(haltpoint_gate = "armed", haltpoint_gate = "inert")))]
pub const GATE_MODE: GateMode = GateMode::Absent;
