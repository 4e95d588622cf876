// src/handlers/web.rs
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
};
use chrono::Datelike;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::sync::Arc;

use crate::particles::Viewport;
use crate::templates;
use crate::AppState;

/// Client-reported viewport size. Anything missing or malformed falls back
/// to the default particle bound.
#[derive(Debug, Default, Deserialize)]
pub struct ViewportQuery {
    pub vw: Option<String>,
    pub vh: Option<String>,
}

impl ViewportQuery {
    pub fn viewport(&self) -> Option<Viewport> {
        Viewport::parse(self.vw.as_deref(), self.vh.as_deref())
    }
}

fn page_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub async fn how_it_works(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ViewportQuery>, QueryRejection>,
) -> Html<String> {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable viewport query, using fallback bound");
            ViewportQuery::default()
        }
    };
    let viewport = query.viewport();
    if viewport.is_none() && (query.vw.is_some() || query.vh.is_some()) {
        tracing::debug!(
            vw = ?query.vw,
            vh = ?query.vh,
            "Unusable viewport hint, using fallback bound"
        );
    }

    let year = chrono::Local::now().year();
    let mut rng = page_rng(state.config.particle_seed);
    Html(templates::how_it_works::render(year, viewport, &mut rng))
}
