//! Axum routes and the serve loop.

use std::net::SocketAddr;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;

use crate::CollectorError;
use crate::sink::{LogRecord, LogSink};

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    sink: LogSink,
}

/// Builds the collector router over the given sink.
pub fn router(sink: LogSink) -> Router {
    Router::new()
        .route("/", get(status_page))
        .route("/log", post(receive_log))
        .with_state(AppState { sink })
}

/// Binds `127.0.0.1:{port}` and serves until ctrl-c.
pub async fn run(port: u16, sink: LogSink) -> Result<(), CollectorError> {
    let addr: SocketAddr = ([127, 0, 0, 1], port).into();
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("collector listening on http://{local_addr}");
    tracing::info!(logfile = %sink.path().display(), "appending received messages");

    axum::serve(listener, router(sink))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("collector shutting down");
        })
        .await?;

    Ok(())
}

/// Receives one forwarded console event.
///
/// Tolerant on input: `level` and `message` default when absent, unknown
/// levels pass through, and the shim-side timestamp is ignored in favor
/// of the receive time. The response carries a permissive CORS header so
/// page-embedded shims are not rejected by the browser.
async fn receive_log(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let level = body.get("level").and_then(|v| v.as_str()).unwrap_or("log");
    let message = body.get("message").and_then(|v| v.as_str()).unwrap_or("");
    let record = LogRecord::received(level, message);

    match state.sink.append(&record).await {
        Ok(()) => {
            tracing::debug!(level = %record.level, "log record appended");
            (
                StatusCode::OK,
                [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
                Json(serde_json::json!({"status": "ok"})),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to append log record");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Human-readable status page.
async fn status_page() -> Html<&'static str> {
    Html(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>console-quill collector</title></head>\n\
         <body>\n\
         <h1>console-quill collector</h1>\n\
         <p>Running and ready to receive console messages.</p>\n\
         <p>Forwarded events are JSON bodies posted to <code>/log</code>:</p>\n\
         <code>{\"level\": \"log\", \"message\": \"...\", \"timestamp\": \"...\"}</code>\n\
         </body>\n\
         </html>\n",
    )
}
