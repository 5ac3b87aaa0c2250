//! console-quill collector entry point.

use std::path::PathBuf;

use clap::Parser;
use quill_collector::LogSink;
use quill_protocol::constants::DEFAULT_COLLECTOR_PORT;
use tracing_subscriber::EnvFilter;

/// Receives forwarded console messages and appends them to a logfile.
#[derive(Debug, Parser)]
#[command(name = "quill-collector", version, about)]
struct Args {
    /// Path of the logfile (one JSON record per line).
    #[arg(long)]
    logfile: PathBuf,

    /// Port to listen on.
    #[arg(long, default_value_t = DEFAULT_COLLECTOR_PORT)]
    port: u16,
}

fn main() -> anyhow::Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = args.port,
        logfile = %args.logfile.display(),
        "starting console-quill collector"
    );

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(quill_collector::run(args.port, LogSink::new(args.logfile)))?;

    tracing::info!("collector shut down cleanly");
    Ok(())
}
