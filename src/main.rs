use anyhow::Result;
use clap::Parser;
use live_describer::{
    create_router, AppState, CaptureBackendFactory, CaptureSource, Config, DescriberSession,
    GeminiClient, LogSpeaker, SessionConfig,
};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "live-describer", about = "Live audio captioning with spoken visual descriptions")]
struct Args {
    /// Path to the configuration file (without extension)
    #[arg(long, default_value = "config/live-describer")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} v0.1.0", cfg.service.name);

    // Missing credential is fatal before any session can start.
    let api_key = cfg.api_key()?;
    let backend = Arc::new(GeminiClient::new(api_key, cfg.describe.model.clone())?);

    let capture = CaptureBackendFactory::create(CaptureSource::Stdin)?;
    let speech = Arc::new(LogSpeaker::new());

    let session = DescriberSession::new(SessionConfig::default(), capture, backend, speech);
    let state = AppState::new(session);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    info!("HTTP control API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
