#![allow(clippy::doc_markdown)]
//! `kgraph` Server - REST API for the in-memory knowledge graph.

use clap::Parser;
use kgraph_core::{KgConfig, ServerConfig};
use kgraph_server::{build_router, parse_cors_origins, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// kgraph Server - An in-memory knowledge graph API
#[derive(Parser, Debug)]
#[command(name = "kgraph-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "KGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Host address to bind to (overrides configuration)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides configuration)
    #[arg(short, long)]
    port: Option<u16>,

    /// Load the demo graph at startup
    #[arg(long)]
    seed: bool,
}

/// Build CORS layer from the configured origins.
fn build_cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.cors_origins.is_empty() {
        tracing::warn!("CORS: permissive (dev mode). Set server.cors_origins to restrict origins.");
        return CorsLayer::permissive();
    }

    let origin_list = parse_cors_origins(&server.cors_origins);
    tracing::info!("CORS: restricted to {} origin(s)", origin_list.len());
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origin_list))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = KgConfig::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.seed |= args.seed;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("{},tower_http=debug", config.logging.level)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(environment = %config.environment, "Starting kgraph server...");
    if let Some(path) = &args.config {
        tracing::info!("Configuration file: {}", path.display());
    }

    let state = Arc::new(AppState::new(config));
    if state.config.seed {
        kgraph_core::load_demo_graph(&state.service)?;
    }
    tracing::info!("Graph is in-memory. Data will NOT persist across restarts.");

    let app = build_router(state.clone())
        .layer(build_cors_layer(&state.config.server))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("kgraph server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
