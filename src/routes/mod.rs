//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/api/jobs`, `/api/job/{id}` - job listing and lookup
//! - `/api/create_job`, `/api/clear_completed` - job mutation
//! - `/api/health`, `/api/sim_status` - liveness and simulator debugging
//! - `/login`, `/logout` - session login
//! - `/` - the session-gated dashboard page

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod jobs;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::cors::cors_layer;
use crate::models::AppState;

/// Create the main application router.
///
/// CORS applies to everything, as the dashboard may be served from another
/// origin while polling the JSON API.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    Router::new()
        .merge(jobs::router(state.clone()))
        .merge(health::router(state.clone()))
        .merge(auth::router(state.clone()))
        .merge(dashboard::router(state.clone()))
        .layer(cors_layer(&state.config.server.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}
