// src/main.rs
mod animation;
mod config;
mod content;
mod handlers;
mod icons;
mod middleware;
mod particles;
mod routes;
mod templates;

use crate::config::Config;
use crate::routes::create_router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("trace_the_change=info,tower_http=info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .with_level(true)
        .with_line_number(true)
        .init();

    tracing::info!("🚀 Starting Trace the Change site...");

    let config = Config::from_env()?;
    let addr = config.server_addr()?;

    match config.particle_seed {
        Some(seed) => tracing::info!("🎲 Particle seed fixed at {}", seed),
        None => tracing::info!("🎲 Particles placed from fresh entropy per request"),
    }
    if config.enable_hsts {
        tracing::info!("🔒 HSTS enabled");
    }

    let state = Arc::new(AppState { config });

    let app = create_router(state.clone()).layer(TraceLayer::new_for_http());

    tracing::info!("✅ Listening on {}", addr);
    tracing::info!("🌐 Page: http://{}/how-it-works", addr);
    tracing::info!("📁 Static files: {}/", state.config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
