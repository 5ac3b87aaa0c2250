//! Wire types shared by the console-quill shim and collector.
//!
//! A forwarded console message is a single JSON object
//! (`{"level", "message", "timestamp"}`) posted to the collector's `/log`
//! path. Both sides of the wire depend on this crate so the contract lives
//! in one place.

pub mod constants;
pub mod log_event;

// Re-export primary types.
pub use log_event::{LogEvent, LogLevel};
