//! Console interception and HTTP forwarding shim.
//!
//! Wraps the process-wide console so every `log`/`warn`/`error` call keeps
//! its original behavior and is also posted, fire-and-forget, to a
//! collector over HTTP. The collector address is derived from the location
//! of the shim's own script resource in the hosting document, falling back
//! to `http://localhost:9876` when no location can be found.
//!
//! Installation runs once per process and has no teardown path. Under any
//! failure the shim degrades to a no-op forwarder: a send that cannot
//! complete is dropped without surfacing anywhere.

pub mod console;
pub mod document;
pub mod endpoint;
mod forwarder;
mod shim;
pub mod value;

// Re-export primary types.
pub use console::{Console, StdConsole};
pub use document::{Document, ScriptRef, StaticDocument};
pub use endpoint::{Endpoint, EndpointError, Resolution};
pub use shim::{InstallError, install};
pub use value::ConsoleValue;
