mod config;
mod errors;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cv_parser::ResumeParser;

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "cv_parser={level},{bin}={level},tower_http={level}",
                level = &config.rust_log,
                bin = env!("CARGO_CRATE_NAME"),
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV parser API v{}", env!("CARGO_PKG_VERSION"));

    let lexicon = config.load_lexicon()?;
    match &config.lexicon_path {
        Some(path) => info!("Lexicon loaded from {}", path.display()),
        None => info!("Using built-in lexicon"),
    }

    let parser = ResumeParser::with_lexicon(lexicon);
    info!(
        "Résumé parser ready (formats: {})",
        parser.supported_extensions().join(", ")
    );

    let state = AppState {
        parser: Arc::new(parser),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the admin UI host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
