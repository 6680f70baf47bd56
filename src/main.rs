use clap::Parser;
use hot_coffee::api::{self, AppState};
use hot_coffee::config::Config;
use hot_coffee::lifecycle::tracing::setup_tracing;
use hot_coffee::lifecycle::CafeSystem;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    setup_tracing();

    info!(dir = %config.dir.display(), port = config.port, "Starting hot-coffee");

    let system = CafeSystem::start(&config.dir)?;
    let app = api::router(AppState::new(&system));

    let listener = TcpListener::bind(config.addr()).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    // The router, and every client clone in its state, is dropped when serve returns.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, stopping server"),
        Err(e) => error!(error = %e, "Cannot listen for Ctrl-C"),
    }
}
