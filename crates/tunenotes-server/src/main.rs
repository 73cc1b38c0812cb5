use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tunenotes_core::{Config, Pipeline};
use tunenotes_server::routes::build_router;
use tunenotes_server::server::start_server;
use tunenotes_server::service::PipelineNotesService;
use tunenotes_server::state::AppState;

#[derive(Parser)]
#[command(name = "tunenotes")]
#[command(author, version, about = "Audio-to-notes transcription service")]
struct Args {
    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind address (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Listen port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => "tunenotes_server=info,tunenotes_core=info,tunenotes_transcribe=info",
        1 => "tunenotes_server=debug,tunenotes_core=debug,tunenotes_transcribe=debug,tower_http=debug",
        2 => "tunenotes_server=trace,tunenotes_core=trace,tunenotes_transcribe=trace,tower_http=trace",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let pipeline = Pipeline::new(config.clone());
    let notes = Arc::new(PipelineNotesService::new(pipeline));
    let state = Arc::new(AppState::new(config.clone(), notes));

    let app = build_router(state);
    start_server(&config, app).await
}
