//! Font CSS rewriting proxy.
//!
//! Fetches `@font-face` CSS from the Google Fonts `css2` endpoint and
//! rewrites it per requested family before returning it to the client.
//!
//! # Request Flow
//! ```text
//! GET /css2?family=Roboto:wght@400:rename@Romeo&display=swap
//!     → parse family specs (css::family)
//!     → fetch upstream CSS with family replaced by its upstream value
//!     → parse @font-face blocks (css::font_face)
//!     → apply rename / exclude / include (css::transform)
//!     → regenerate CSS, respond with cache + CORS headers
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use font_proxy::config::{load_config, ProxyConfig};
use font_proxy::http::HttpServer;

#[derive(Parser)]
#[command(name = "font-proxy")]
#[command(about = "Rewriting proxy for Google Fonts @font-face CSS", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address from the config.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "font_proxy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("font-proxy v0.1.0 starting");

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            font_proxy::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
