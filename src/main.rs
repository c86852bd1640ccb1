use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qubit_tracker::config::Config;
use qubit_tracker::models::AppState;
use qubit_tracker::routes::create_router;
use qubit_tracker::session::SessionStore;
use qubit_tracker::simulator::JobSimulator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qubit_tracker=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);

    // One simulation per process; started here rather than lazily so the
    // background loop is running before the first request arrives.
    let simulator = JobSimulator::new(config.simulator.clone());
    let loop_handle = simulator.clone();
    tokio::spawn(async move { loop_handle.run().await });

    // Create shared state
    let state = AppState {
        simulator,
        sessions: SessionStore::default(),
        config: config.clone(),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let host: IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid HOST {}: {}", config.server.host, e))?;
    let addr = SocketAddr::new(host, config.server.port);
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
