//! HTTP routes for the site's fixed endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::config::Config;
use crate::site::robots::robots_body;

/// Crawler caches may hold robots.txt for a day.
const ROBOTS_CACHE_CONTROL: &str = "public, max-age=86400, s-maxage=86400";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

pub fn build_router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/robots.txt", get(robots_txt))
        .route("/og", get(og_redirect))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(config)
}

async fn robots_txt(State(config): State<Arc<Config>>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, ROBOTS_CACHE_CONTROL),
        ],
        robots_body(&config.site.base_url, &config.robots),
    )
        .into_response()
}

/// Social-preview image lives on the CDN; a temporary redirect keeps the
/// target swappable in config.
async fn og_redirect(State(config): State<Arc<Config>>) -> Redirect {
    Redirect::temporary(&config.site.og_image_url)
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: "minbar".to_string(),
    })
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
