pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod mount;
pub mod routes;
pub mod site;
pub mod state;
pub mod views;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::AppError;
use crate::state::{AppState, SharedState};

/// Render the site once and build the router that serves it.
pub fn build_app(config: Config) -> Result<Router, AppError> {
    let document = site::render_site(&config)?;

    let state: SharedState = Arc::new(AppState {
        document,
        config: config.clone(),
    });

    let app = Router::new()
        .merge(views::view_routes(&config))
        .merge(routes::api_routes(&config.base_path))
        .route("/health", axum::routing::get(health))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state);

    Ok(app)
}

async fn health() -> &'static str {
    "ok"
}
