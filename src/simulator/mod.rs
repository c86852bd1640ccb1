//! Job simulation engine.
//!
//! Owns the in-memory collection of synthetic jobs, hands out snapshots to
//! the API handlers, and runs the periodic loop that injects new jobs and
//! advances their states. All state sits behind a single mutex inside a
//! cloneable handle, so the background loop and concurrent request handlers
//! never race on the collection.

pub mod clock;

use std::sync::Arc;

use rand::Rng;
use tokio::sync::Mutex;
use tokio::time::{interval, Duration};
use tracing::{debug, info};

use crate::config::SimulatorConfig;
use crate::models::Job;
use crate::types::{AlgorithmKind, JobStatus};

/// Chance per tick that a QUEUED job starts running.
const QUEUED_START_CHANCE: f64 = 0.4;
/// Chance per tick that a RUNNING job reaches a terminal state.
const RUNNING_FINISH_CHANCE: f64 = 0.3;
/// Chance per tick that the loop auto-creates a job.
const AUTO_CREATE_CHANCE: f64 = 0.5;

/// Default listing limit when the API caller does not pass one.
pub const DEFAULT_LIST_LIMIT: usize = 50;

struct SimState {
    jobs: Vec<Job>,
    job_counter: u64,
    running: bool,
}

/// Worker-local snapshot for the debug status endpoint.
#[derive(Debug, Clone)]
pub struct SimulatorStatus {
    pub running: bool,
    pub jobs_count: usize,
    pub sample_job: Option<Job>,
}

/// Cloneable handle to the simulation state. One instance per process; the
/// periodic loop and every request handler share it through clones.
#[derive(Clone)]
pub struct JobSimulator {
    inner: Arc<Mutex<SimState>>,
    config: Arc<SimulatorConfig>,
}

impl JobSimulator {
    pub fn new(config: SimulatorConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SimState {
                jobs: Vec::new(),
                job_counter: 1,
                running: true,
            })),
            config: Arc::new(config),
        }
    }

    /// Create a new job with freshly sampled parameters. Always succeeds;
    /// evicts the oldest job if the collection would exceed `max_jobs`.
    pub async fn create_job(&self, manual: bool) -> Job {
        let mut state = self.inner.lock().await;
        self.create_job_locked(&mut state, &mut rand::thread_rng(), manual)
    }

    fn create_job_locked(
        &self,
        state: &mut SimState,
        rng: &mut impl Rng,
        manual: bool,
    ) -> Job {
        let kind = AlgorithmKind::ALL[rng.gen_range(0..AlgorithmKind::ALL.len())];
        let job = Job {
            id: format!("BQJ-{}", state.job_counter),
            kind,
            status: JobStatus::Queued,
            created_at: clock::now_in(&self.config.display_tz),
            estimated_runtime: rng.gen_range(30..=300),
            success_probability: rng.gen_range(85.0..99.5),
            manual,
        };
        state.job_counter += 1;
        state.jobs.push(job.clone());

        // keep the collection bounded
        if state.jobs.len() > self.config.max_jobs {
            state.jobs.remove(0);
        }

        debug!(id = %job.id, kind = %job.kind, manual, "Job created");
        job
    }

    /// Advance every non-terminal job by one step. Each job gets its own
    /// independent random draws; terminal jobs are never touched.
    pub async fn advance_all(&self) {
        let mut state = self.inner.lock().await;
        Self::advance_locked(&mut state, &mut rand::thread_rng());
    }

    fn advance_locked(state: &mut SimState, rng: &mut impl Rng) {
        for job in &mut state.jobs {
            match job.status {
                JobStatus::Queued => {
                    if rng.gen_bool(QUEUED_START_CHANCE) {
                        job.status = JobStatus::Running;
                    }
                }
                JobStatus::Running => {
                    if rng.gen_bool(RUNNING_FINISH_CHANCE) {
                        job.status = if rng.gen_bool(job.success_probability / 100.0) {
                            JobStatus::Completed
                        } else {
                            JobStatus::Failed
                        };
                    }
                }
                JobStatus::Completed | JobStatus::Failed => {}
            }
        }
    }

    /// Jobs for display: sorted ascending by (status priority, created_at),
    /// then the *last* `limit` entries of that order. The tail slice favors
    /// the low-priority end once the collection exceeds the limit; the
    /// dashboard has always been served exactly this shape, so it stays.
    pub async fn list_jobs(&self, limit: usize) -> Vec<Job> {
        let state = self.inner.lock().await;
        let mut sorted = state.jobs.clone();
        sorted.sort_by(|a, b| {
            a.status
                .display_priority()
                .cmp(&b.status.display_priority())
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        let start = sorted.len().saturating_sub(limit);
        sorted.split_off(start)
    }

    /// Linear lookup by id.
    pub async fn get_job(&self, id: &str) -> Option<Job> {
        let state = self.inner.lock().await;
        state.jobs.iter().find(|job| job.id == id).cloned()
    }

    /// Drop every COMPLETED job, returning how many were removed. Remaining
    /// jobs keep their relative order.
    pub async fn clear_completed(&self) -> usize {
        let mut state = self.inner.lock().await;
        let before = state.jobs.len();
        state.jobs.retain(|job| job.status != JobStatus::Completed);
        let removed = before - state.jobs.len();
        info!(removed, "Cleared completed jobs");
        removed
    }

    /// One simulation step: maybe auto-create a job, then advance everything.
    pub async fn tick(&self) {
        let mut state = self.inner.lock().await;
        let mut rng = rand::thread_rng();
        if rng.gen_bool(AUTO_CREATE_CHANCE) {
            self.create_job_locked(&mut state, &mut rng, false);
        }
        Self::advance_locked(&mut state, &mut rng);
    }

    pub async fn status(&self) -> SimulatorStatus {
        let state = self.inner.lock().await;
        SimulatorStatus {
            running: state.running,
            jobs_count: state.jobs.len(),
            sample_job: state.jobs.last().cloned(),
        }
    }

    /// Ask the periodic loop to stop after its current tick.
    pub async fn shutdown(&self) {
        let mut state = self.inner.lock().await;
        state.running = false;
    }

    /// Drive the periodic tick for the lifetime of the engine. Runs until
    /// [`shutdown`](Self::shutdown) clears the run flag; the flag is checked
    /// once per tick.
    pub async fn run(&self) {
        info!(
            tick_secs = self.config.tick_secs,
            max_jobs = self.config.max_jobs,
            "Simulation loop started"
        );
        let mut ticker = interval(Duration::from_secs(self.config.tick_secs));
        loop {
            ticker.tick().await;
            if !self.inner.lock().await.running {
                break;
            }
            self.tick().await;
        }
        info!("Simulation loop stopped");
    }
}
