/// Path under the collector base address that receives forwarded events.
pub const LOG_PATH: &str = "/log";

/// Scheme of the fallback collector endpoint.
pub const FALLBACK_SCHEME: &str = "http";

/// Host (with port) of the fallback collector endpoint.
pub const FALLBACK_HOST: &str = "localhost:9876";

/// Default port the collector listens on.
pub const DEFAULT_COLLECTOR_PORT: u16 = 9876;

/// Filename marker used to recognize the shim's own script element when
/// the host does not expose a currently-executing script reference.
pub const SCRIPT_MARKER: &str = "console-quill.js";
