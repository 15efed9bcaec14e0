//! # Error Types
//!
//! The trap gate itself cannot fail: it either executes a trap instruction or
//! it executes nothing, and misuse in a plain release build is a compile error.
//! The errors here cover the helpers around it (reading settings from the
//! environment, parsing gate modes).
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.

use thiserror::Error;

/// Main error type for haltpoint helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HaltpointError
{
    /// A setting held a value that is not a recognized boolean
    ///
    /// Accepted spellings are `1`, `true`, `yes`, `on` and `0`, `false`,
    /// `no`, `off` (case-insensitive). An empty value counts as false.
    #[error("Invalid value for {name}: {value:?}")]
    InvalidSetting
    {
        /// Name of the setting (usually an environment variable)
        name: String,
        /// The raw value that failed to parse
        value: String,
    },

    /// A gate mode string was not one of `armed`, `inert`, or `absent`
    #[error("Unknown gate mode: {0}. Use 'armed', 'inert', or 'absent'")]
    InvalidGateMode(String),
}

/// Convenience type alias for `Result<T, HaltpointError>`
///
/// ```rust
/// use haltpoint_core::error::HaltpointResult;
/// fn foo() -> HaltpointResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type HaltpointResult<T> = std::result::Result<T, HaltpointError>;

/// Parse a boolean setting using the accepted spellings.
pub(crate) fn parse_switch(name: &str, value: &str) -> HaltpointResult<bool>
{
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(HaltpointError::InvalidSetting {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
