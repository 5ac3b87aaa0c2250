//! The process-wide console facility.
//!
//! `Console` is the seam the shim wraps: three entry points, each taking an
//! arbitrary-length argument list. The active console lives in a global
//! slot so hosts call `console::log(..)` without threading a handle
//! around, and the interceptor can decorate whatever backend is active.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::value::{self, ConsoleValue};

/// The console's three logging entry points.
pub trait Console: Send + Sync {
    fn log(&self, args: &[ConsoleValue]);
    fn warn(&self, args: &[ConsoleValue]);
    fn error(&self, args: &[ConsoleValue]);
}

/// Console backed by the process's standard streams.
///
/// `log` goes to stdout; `warn` and `error` go to stderr with a level tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn log(&self, args: &[ConsoleValue]) {
        println!("{}", value::join(args));
    }

    fn warn(&self, args: &[ConsoleValue]) {
        eprintln!("[warn] {}", value::join(args));
    }

    fn error(&self, args: &[ConsoleValue]) {
        eprintln!("[error] {}", value::join(args));
    }
}

static ACTIVE: LazyLock<RwLock<Arc<dyn Console>>> =
    LazyLock::new(|| RwLock::new(Arc::new(StdConsole)));

/// Returns the active console.
pub fn active() -> Arc<dyn Console> {
    ACTIVE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the active console backend.
pub fn set(console: Arc<dyn Console>) {
    *ACTIVE.write().unwrap_or_else(PoisonError::into_inner) = console;
}

/// Atomically captures the active console and installs a replacement built
/// from it. The capture and the swap happen under one write lock so no
/// call can slip between them.
pub(crate) fn swap(wrap: impl FnOnce(Arc<dyn Console>) -> Arc<dyn Console>) {
    let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    let original = slot.clone();
    *slot = wrap(original);
}

/// Logs through the active console.
pub fn log(args: &[ConsoleValue]) {
    active().log(args);
}

/// Warns through the active console.
pub fn warn(args: &[ConsoleValue]) {
    active().warn(args);
}

/// Reports an error through the active console.
pub fn error(args: &[ConsoleValue]) {
    active().error(args);
}
