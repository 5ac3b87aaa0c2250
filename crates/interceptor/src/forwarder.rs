//! Fire-and-forget delivery of log events to the collector.
//!
//! Submission never blocks the intercepted call: events go onto an
//! unbounded channel and a background task posts each one independently.
//! Nothing about a delivery (success, status code, failure) is ever
//! observed by the caller.

use quill_protocol::LogEvent;
use tokio::sync::mpsc;

use crate::endpoint::Endpoint;

/// Queues events for best-effort HTTP delivery.
pub struct Forwarder {
    tx: mpsc::UnboundedSender<LogEvent>,
}

impl Forwarder {
    /// Spawns the delivery task on the current tokio runtime.
    ///
    /// Without a runtime, or with an HTTP client that fails to build, the
    /// forwarder degrades to a no-op: events are accepted and dropped.
    pub fn spawn(endpoint: &Endpoint) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let url = endpoint.log_url();

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            if let Ok(client) = reqwest::Client::builder().build() {
                handle.spawn(deliver_loop(rx, client, url));
            }
        }

        Self { tx }
    }

    /// Queues an event for delivery. Returns immediately; a closed or
    /// absent delivery task just means the event is dropped.
    pub fn submit(&self, event: LogEvent) {
        let _ = self.tx.send(event);
    }
}

/// Drains the queue, posting each event on its own task. Deliveries run
/// independently, so completion order is not defined.
async fn deliver_loop(
    mut rx: mpsc::UnboundedReceiver<LogEvent>,
    client: reqwest::Client,
    url: String,
) {
    while let Some(event) = rx.recv().await {
        let client = client.clone();
        let url = url.clone();
        tokio::spawn(async move {
            // The outcome is dropped entirely: reporting a failure through
            // the console would re-enter the interceptor.
            let _ = client.post(&url).json(&event).send().await;
        });
    }
}
