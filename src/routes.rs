// src/routes.rs
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir};

use crate::content::HOW_IT_WORKS_PATH;
use crate::handlers::web;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route(HOW_IT_WORKS_PATH, get(web::how_it_works))
        .route("/health", get(health_check))
        // Static files
        .nest_service("/static", static_dir)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::security::security_headers,
        ))
        .layer(CompressionLayer::new())
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub deterministic_particles: bool,
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        deterministic_particles: state.config.particle_seed.is_some(),
    })
}
