// Type definitions and enums

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Lifecycle state of a simulated job.
///
/// Transitions are one-directional: QUEUED -> RUNNING -> {COMPLETED, FAILED}.
/// COMPLETED and FAILED are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Queued,
    Running,
    Completed,
    Failed,
}

impl JobStatus {
    /// True once a job can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }

    /// Sort key for the dashboard listing: RUNNING first, COMPLETED last.
    pub fn display_priority(&self) -> u8 {
        match self {
            JobStatus::Running => 0,
            JobStatus::Queued => 1,
            JobStatus::Failed => 2,
            JobStatus::Completed => 3,
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Queued => write!(f, "QUEUED"),
            JobStatus::Running => write!(f, "RUNNING"),
            JobStatus::Completed => write!(f, "COMPLETED"),
            JobStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// Algorithm a job claims to run. Purely categorical; no behavior attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AlgorithmKind {
    #[serde(rename = "Quantum Fourier Transform")]
    FourierTransform,
    #[serde(rename = "Variational Quantum Eigensolver")]
    VariationalEigensolver,
    #[serde(rename = "Grover's Algorithm")]
    Grovers,
    #[serde(rename = "Quantum Phase Estimation")]
    PhaseEstimation,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 4] = [
        AlgorithmKind::FourierTransform,
        AlgorithmKind::VariationalEigensolver,
        AlgorithmKind::Grovers,
        AlgorithmKind::PhaseEstimation,
    ];
}

impl std::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlgorithmKind::FourierTransform => write!(f, "Quantum Fourier Transform"),
            AlgorithmKind::VariationalEigensolver => write!(f, "Variational Quantum Eigensolver"),
            AlgorithmKind::Grovers => write!(f, "Grover's Algorithm"),
            AlgorithmKind::PhaseEstimation => write!(f, "Quantum Phase Estimation"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = json!({
            "success": false,
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
