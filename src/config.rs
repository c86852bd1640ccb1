use anyhow::Result;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub simulator: SimulatorConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulatorConfig {
    /// Upper bound on the live job collection; oldest jobs are evicted past it.
    pub max_jobs: usize,
    /// Seconds between simulation ticks.
    pub tick_secs: u64,
    /// IANA zone name used for displayed timestamps. Unknown names fall back
    /// to UTC rather than failing.
    pub display_tz: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Demo user table as (username, password) pairs.
    pub users: Vec<(String, String)>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "5003".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                cors_allowed_origins: env::var("ALLOWED_ORIGINS")
                    .map(|v| {
                        v.split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            simulator: SimulatorConfig {
                max_jobs: env::var("MAX_JOBS")
                    .unwrap_or_else(|_| "200".to_string())
                    .parse()?,
                tick_secs: env::var("TICK_SECS")
                    .unwrap_or_else(|_| "2".to_string())
                    .parse()?,
                display_tz: env::var("DISPLAY_TZ").unwrap_or_else(|_| "UTC".to_string()),
            },
            auth: AuthConfig {
                users: parse_users(
                    &env::var("AUTH_USERS")
                        .unwrap_or_else(|_| "admin:admin,akhil:akhil".to_string()),
                ),
            },
        })
    }
}

/// Parse a "user:pass,user:pass" list; entries without a colon are skipped.
fn parse_users(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            entry
                .split_once(':')
                .map(|(user, pass)| (user.to_string(), pass.to_string()))
        })
        .collect()
}
