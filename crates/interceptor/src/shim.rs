//! Shim installation.
//!
//! Wraps the active console in a decorator that calls the captured
//! original first and then submits a copy of the message for delivery.
//! Initialization runs once, synchronously: resolve the endpoint, spawn
//! the forwarder, swap the console, announce.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use quill_protocol::{LogEvent, LogLevel};

use crate::console::{self, Console};
use crate::document::Document;
use crate::endpoint::{self, Endpoint, Resolution};
use crate::forwarder::Forwarder;
use crate::value::{self, ConsoleValue};

/// Warning emitted when a script location was found but did not parse.
/// Goes out before the wrapper is installed, so it stays local.
const BAD_URL_WARNING: &str =
    "could not parse console-quill.js URL, using default collector endpoint";

/// Self-announcement logged through the wrapped console after install.
const ANNOUNCEMENT: &str =
    "console-quill initialized - console messages will be forwarded to the collector";

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Errors from shim installation.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    /// Wrapping twice would forward every message twice.
    #[error("console interceptor is already installed")]
    AlreadyInstalled,
}

/// Console decorator holding the captured original and the forwarder.
///
/// Each call is stateless: delegate to the original with the same
/// arguments, then build and submit the event. The original call's
/// behavior is fully preserved; the submission is invisible to the caller.
pub(crate) struct Interceptor {
    original: Arc<dyn Console>,
    forwarder: Forwarder,
}

impl Interceptor {
    pub(crate) fn new(original: Arc<dyn Console>, forwarder: Forwarder) -> Self {
        Self {
            original,
            forwarder,
        }
    }

    fn forward(&self, level: LogLevel, args: &[ConsoleValue]) {
        self.forwarder
            .submit(LogEvent::new(level, value::join(args)));
    }
}

impl Console for Interceptor {
    fn log(&self, args: &[ConsoleValue]) {
        self.original.log(args);
        self.forward(LogLevel::Log, args);
    }

    fn warn(&self, args: &[ConsoleValue]) {
        self.original.warn(args);
        self.forward(LogLevel::Warn, args);
    }

    fn error(&self, args: &[ConsoleValue]) {
        self.original.error(args);
        self.forward(LogLevel::Error, args);
    }
}

/// Installs the interceptor around the active console.
///
/// Resolves the collector endpoint from `document`, wraps the active
/// console so every `log`/`warn`/`error` call is also forwarded, and
/// announces itself through the wrapped console (the announcement is the
/// first forwarded message). Runs once per process; a second call fails
/// and changes nothing. There is no teardown path.
///
/// Returns the resolved endpoint.
pub fn install(document: &dyn Document) -> Result<Endpoint, InstallError> {
    if INSTALLED.swap(true, Ordering::SeqCst) {
        return Err(InstallError::AlreadyInstalled);
    }

    let resolution = endpoint::resolve(document);
    if matches!(resolution, Resolution::FallbackBadUrl(_)) {
        console::warn(&[ConsoleValue::scalar(BAD_URL_WARNING)]);
    }
    let endpoint = resolution.into_endpoint();

    let forwarder = Forwarder::spawn(&endpoint);
    console::swap(|original| Arc::new(Interceptor::new(original, forwarder)));
    tracing::info!(collector = %endpoint, "console interceptor installed");

    console::log(&[ConsoleValue::scalar(ANNOUNCEMENT)]);

    Ok(endpoint)
}
