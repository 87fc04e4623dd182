//! HTTP server for the job-splitting engine.
//!
//! Reads the configuration directory from `JOB_SPLIT_CONFIG_DIR` (default
//! `config/default`) and binds to `JOB_SPLIT_BIND_ADDR` (default
//! `127.0.0.1:3000`). Log verbosity follows `RUST_LOG`, falling back to `info`
//! when it is unset or unparsable.

use std::env;

use job_split_engine::api::{AppState, create_router};
use job_split_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "config/default";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .init();

    let config_dir = env::var("JOB_SPLIT_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr = env::var("JOB_SPLIT_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?.into_config();
    info!(
        config_dir = %config_dir,
        employees = config.roster().len(),
        levels = config.levels().levels().len(),
        "Configuration ready"
    );

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Job-split server listening");

    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}

fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
