//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use wash_batch::WashPlanner;

use crate::api;
use crate::error::ApiError;
use crate::models::{AppConfig, UploadConfig};
use crate::services::ColorService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub upload: Arc<UploadConfig>,
    pub color_service: Arc<ColorService>,
}

/// Create application state from a validated configuration.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    config.validate()?;

    let planner = Arc::new(WashPlanner::new(config.plan_config()));
    let color_service = Arc::new(ColorService::new(planner, config.upload.thumbnail_size));

    Ok(AppState {
        upload: Arc::new(config.upload),
        color_service,
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.upload.body_limit();

    Router::new()
        .route("/sort-colors", post(handle_sort_colors))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        // The browser front-end is served from a different origin
        .layer(CorsLayer::permissive())
}

// Wrapper handler to extract state components for the underlying API handler

async fn handle_sort_colors(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<api::SortColorsResponse>, ApiError> {
    api::handle_sort_colors(State(state.color_service), State(state.upload), multipart).await
}
