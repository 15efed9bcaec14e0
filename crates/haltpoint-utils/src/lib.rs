//! # haltpoint Utilities
//!
//! Shared helpers for programs that use haltpoint, mainly `tracing` subscriber
//! setup so trap and arming events end up somewhere readable.

pub mod logging;

// Re-export commonly used logging functions for convenience
pub use logging::{init_logging, init_logging_with_level, LogFormat, LogLevel, LoggingError};
pub use tracing::{debug, error, info, trace, warn};
