use axum::{extract::State, routing::get, Json, Router};

use crate::models::{AppState, HealthResponse, SimStatusResponse};
use crate::simulator::clock;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/sim_status", get(sim_status))
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: clock::now_in(&state.config.simulator.display_tz).to_rfc3339(),
    })
}

/// Basic simulator status for debugging. Worker-local: with several worker
/// processes each one reports its own simulation.
async fn sim_status(State(state): State<AppState>) -> Json<SimStatusResponse> {
    let status = state.simulator.status().await;
    Json(SimStatusResponse {
        running: status.running,
        jobs_count: status.jobs_count,
        sample_job: status.sample_job,
    })
}
