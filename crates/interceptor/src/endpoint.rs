//! Collector endpoint resolution.
//!
//! The collector address is not configured anywhere: it is derived once
//! from the URL the shim's own script was loaded from, so the shim points
//! at whatever host served it. When no usable location exists the
//! hardcoded fallback applies.

use std::fmt;

use quill_protocol::constants::{FALLBACK_HOST, FALLBACK_SCHEME, LOG_PATH};
use url::Url;

use crate::document::{self, Document};

/// Scheme and host of the collector, fixed for the process's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    scheme: String,
    host: String,
}

/// Why a script URL could not yield an endpoint.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("URL has no host")]
    NoHost,
}

impl Endpoint {
    /// The hardcoded fallback endpoint.
    pub fn fallback() -> Self {
        Self {
            scheme: FALLBACK_SCHEME.to_string(),
            host: FALLBACK_HOST.to_string(),
        }
    }

    /// Derives an endpoint from a script source URL, keeping only
    /// `scheme://host`. An explicit non-default port stays part of the
    /// host; a scheme-default port is omitted.
    pub fn parse(src: &str) -> Result<Self, EndpointError> {
        let url = Url::parse(src)?;
        let host = url.host_str().ok_or(EndpointError::NoHost)?;
        let host = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        Ok(Self {
            scheme: url.scheme().to_string(),
            host,
        })
    }

    /// Base address, `scheme://host`.
    pub fn base(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }

    /// Full URL of the collector's log path.
    pub fn log_url(&self) -> String {
        format!("{}{}", self.base(), LOG_PATH)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)
    }
}

/// Outcome of endpoint resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Derived from the shim's own script URL.
    FromScript(Endpoint),
    /// A script location was found but did not parse as a usable URL.
    FallbackBadUrl(Endpoint),
    /// No script location was found.
    FallbackNoScript(Endpoint),
}

impl Resolution {
    /// The endpoint to use, whatever the provenance.
    pub fn endpoint(&self) -> &Endpoint {
        match self {
            Resolution::FromScript(e)
            | Resolution::FallbackBadUrl(e)
            | Resolution::FallbackNoScript(e) => e,
        }
    }

    pub fn into_endpoint(self) -> Endpoint {
        match self {
            Resolution::FromScript(e)
            | Resolution::FallbackBadUrl(e)
            | Resolution::FallbackNoScript(e) => e,
        }
    }
}

/// Resolves the collector endpoint from the hosting document.
///
/// A located script with an unparsable URL falls back loudly (the caller
/// emits a local warning); a document with no shim script at all falls
/// back silently. An inline script (empty src) counts as no location.
pub fn resolve(doc: &dyn Document) -> Resolution {
    match document::locate_shim_script(doc) {
        Some(script) if !script.src.is_empty() => match Endpoint::parse(&script.src) {
            Ok(endpoint) => Resolution::FromScript(endpoint),
            Err(_) => Resolution::FallbackBadUrl(Endpoint::fallback()),
        },
        _ => Resolution::FallbackNoScript(Endpoint::fallback()),
    }
}
