//! Common module for library exports

pub use crate::error::{HaltpointError, HaltpointResult};
pub use crate::flag::{arm, arm_from_env, disarm, is_armed, set_armed, ArmGuard};
#[cfg(any(haltpoint_gate = "armed", haltpoint_gate = "inert"))]
pub use crate::haltpoint;
pub use crate::if_gate;
pub use crate::mode::{GateMode, GATE_MODE};
