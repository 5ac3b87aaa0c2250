//! Read-only view of the document hosting the shim.
//!
//! The interceptor only needs to know where script resources were loaded
//! from; hosts adapt whatever DOM, webview, or asset table they have to
//! this trait.

use quill_protocol::constants::SCRIPT_MARKER;

/// Reference to a script element and its resolved source URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRef {
    /// Resolved source URL; empty for inline scripts.
    pub src: String,
}

impl ScriptRef {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }
}

/// The hosting document, as far as the shim cares.
pub trait Document {
    /// The script being evaluated right now, when the host tracks one.
    fn current_script(&self) -> Option<ScriptRef>;

    /// Every script element, in document order.
    fn scripts(&self) -> Vec<ScriptRef>;
}

/// A `Document` built from plain data, for hosts that already know their
/// script table.
#[derive(Debug, Clone, Default)]
pub struct StaticDocument {
    pub current: Option<ScriptRef>,
    pub scripts: Vec<ScriptRef>,
}

impl Document for StaticDocument {
    fn current_script(&self) -> Option<ScriptRef> {
        self.current.clone()
    }

    fn scripts(&self) -> Vec<ScriptRef> {
        self.scripts.clone()
    }
}

/// Locates the shim's own script element.
///
/// Prefers the currently-executing script when the host exposes one.
/// Otherwise scans the script table in reverse for a source containing
/// the shim filename marker, so when several copies are present the last
/// one in document order wins. The tie-break is a heuristic, not a
/// correctness guarantee.
pub(crate) fn locate_shim_script(doc: &dyn Document) -> Option<ScriptRef> {
    if let Some(script) = doc.current_script() {
        return Some(script);
    }
    doc.scripts()
        .into_iter()
        .rev()
        .find(|script| script.src.contains(SCRIPT_MARKER))
}
