use crate::config::Config;
use crate::session::SessionStore;
use crate::simulator::JobSimulator;
use crate::types::{AlgorithmKind, JobStatus};

#[derive(Clone)]
pub struct AppState {
    pub simulator: JobSimulator,
    pub sessions: SessionStore,
    pub config: Config,
}

/// One simulated quantum job.
///
/// `id`, `kind`, `created_at`, `estimated_runtime`, `success_probability` and
/// `manual` are fixed at creation; only `status` changes afterwards, and only
/// through the simulation tick.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Job {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AlgorithmKind,
    pub status: JobStatus,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
    /// Advisory runtime estimate in seconds; never enforced.
    pub estimated_runtime: u32,
    /// Percentage in [85.0, 99.5) biasing the terminal-state decision.
    pub success_probability: f64,
    /// True when created through the API rather than by the background loop.
    pub manual: bool,
}

// API Request/Response types

#[derive(Debug, serde::Deserialize)]
pub struct JobsQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, serde::Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    pub success: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct JobResponse {
    pub job: Job,
    pub success: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct ClearCompletedResponse {
    pub success: bool,
    pub message: String,
    pub removed_count: usize,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, serde::Serialize)]
pub struct SimStatusResponse {
    pub running: bool,
    pub jobs_count: usize,
    pub sample_job: Option<Job>,
}

#[derive(Debug, serde::Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}
