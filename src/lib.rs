// Qubit Tracker - simulated quantum-computing job tracker

pub mod config;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod session;
pub mod simulator;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
