//! ytresolver - Media URL Resolution Service
//!
//! A small HTTP service that accepts a video identifier, asks yt-dlp for
//! a direct media URL and metadata, and returns the result as JSON.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use ytresolver::api::create_router;
use ytresolver::extractor::YtDlpExtractor;
use ytresolver::utils::Settings;

#[derive(Parser)]
struct Args {
    /// Listening port; overrides the PORT environment variable
    #[arg(long)]
    port: Option<u16>,

    /// Explicit yt-dlp binary to use instead of searching for one
    #[arg(long)]
    ytdlp_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ytresolver=info,tower_http=info".into()),
        )
        .init();

    let mut settings = Settings::from_env();
    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(path) = args.ytdlp_path {
        settings.ytdlp_path = Some(path);
    }

    // A missing yt-dlp is logged, not fatal; requests fail upstream until
    // the binary shows up.
    let extractor = YtDlpExtractor::new(settings.ytdlp_path.clone());
    let app = create_router(Arc::new(extractor));

    let addr = settings.bind_addr();
    tracing::info!("Starting server on http://{addr}/");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
