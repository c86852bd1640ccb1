use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::models::{
    AppState, ClearCompletedResponse, JobListResponse, JobResponse, JobsQuery,
};
use crate::simulator::DEFAULT_LIST_LIMIT;
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/jobs", get(list_jobs))
        .route("/api/job/{id}", get(get_job))
        .route("/api/create_job", post(create_job))
        .route("/api/clear_completed", post(clear_completed))
        .with_state(state)
}

async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobsQuery>,
) -> Json<JobListResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let jobs = state.simulator.list_jobs(limit).await;
    Json(JobListResponse {
        jobs,
        success: true,
    })
}

async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<JobResponse>> {
    let job = state
        .simulator
        .get_job(&id)
        .await
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;
    Ok(Json(JobResponse { job, success: true }))
}

async fn create_job(State(state): State<AppState>) -> Json<JobResponse> {
    let job = state.simulator.create_job(true).await;
    info!(id = %job.id, "Manual job created via API");
    Json(JobResponse { job, success: true })
}

async fn clear_completed(State(state): State<AppState>) -> Json<ClearCompletedResponse> {
    let removed_count = state.simulator.clear_completed().await;
    Json(ClearCompletedResponse {
        success: true,
        message: format!("Cleared {} completed jobs", removed_count),
        removed_count,
    })
}
