//! Aurix Worker
//!
//! Runs the scheduled trade cycle without the HTTP surface.
//!
//! The narrative cycle log lives in this process's memory and is not served
//! anywhere. Run `api-server` instead when `/api/logs` should show it.

use aurix::config::AppConfig;
use aurix::core::runtime::bootstrap;
use aurix::core::scheduler::JobScheduler;
use aurix::logging;
use aurix::metrics::Metrics;
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    logging::init_logging();

    let config = AppConfig::from_env()?;
    info!("Starting Aurix Worker");
    info!(environment = %config.environment, "Environment");

    if !config.scheduler_enabled() {
        return Err(format!(
            "Worker requires an active environment (development/production) and EVAL_INTERVAL_SECONDS > 0, got {:?} / {}",
            config.environment, config.evaluation_interval_seconds
        )
        .into());
    }

    let metrics = Arc::new(Metrics::new()?);
    let context = bootstrap(&config, metrics)
        .await
        .map_err(|e| format!("Startup failed: {}", e))?;

    let scheduler = JobScheduler::new(context, config.evaluation_interval_seconds)
        .map_err(|e| format!("Failed to create scheduler: {}", e))?;
    scheduler.start().await;

    info!(
        interval = config.evaluation_interval_seconds,
        "Worker started, waiting for shutdown signal..."
    );
    signal::ctrl_c().await?;

    info!("Shutting down worker...");
    scheduler.stop().await;
    info!("Worker stopped");

    Ok(())
}
