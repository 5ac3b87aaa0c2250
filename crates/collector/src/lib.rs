//! HTTP collector for forwarded console messages.
//!
//! Accepts the shim's `POST /log` events, stamps each with its receive
//! time, and appends it as one JSON line to a logfile. A status page on
//! `/` documents the contract. The shim never reads responses, so the
//! collector only has to exist, not negotiate.

pub mod server;
pub mod sink;

// Re-export primary types.
pub use server::{router, run};
pub use sink::{LogRecord, LogSink};

/// Errors from running the collector service.
#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
