//! rxplay-server: HTTP front end of the regex playground
//!
//! Configuration comes from `RXPLAY_*` environment variables (see
//! [`rxplay::ServerConfig::from_env`]); log filtering from `RUST_LOG`.

use std::process::ExitCode;

use rxplay::ServerConfig;
use rxplay::config::Validator;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ServerConfig::from_env().and_then(|config| config.validate().map(|()| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = rxplay::serve(config, shutdown_signal()).await {
        tracing::error!("server failed: {e}");
        return ExitCode::FAILURE;
    }

    tracing::info!("rxplay stopped");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
