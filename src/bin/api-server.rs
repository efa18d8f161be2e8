//! Aurix API Server
//!
//! Serves price, trade and log endpoints and, in an active environment,
//! runs the trade cycle on its schedule.

use aurix::config::AppConfig;
use aurix::core::http::{start_server, AppState};
use aurix::core::runtime::bootstrap;
use aurix::core::scheduler::JobScheduler;
use aurix::logging;
use aurix::metrics::Metrics;
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = AppConfig::from_env()?;
    info!("Starting Aurix API Server");
    info!(environment = %config.environment, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);

    let metrics = Arc::new(Metrics::new()?);
    let context = bootstrap(&config, metrics.clone())
        .await
        .map_err(|e| format!("Startup failed: {}", e))?;

    let scheduler = if config.scheduler_enabled() {
        let scheduler = JobScheduler::new(context.clone(), config.evaluation_interval_seconds)
            .map_err(|e| format!("Failed to create scheduler: {}", e))?;
        scheduler.start().await;
        Some(scheduler)
    } else {
        warn!(
            environment = %config.environment,
            "Scheduler disabled outside development/production"
        );
        None
    };

    let state = AppState::new(context, metrics);
    let port = config.port;
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, state).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    if let Some(scheduler) = scheduler {
        scheduler.stop().await;
    }
    info!("API server stopped");

    Ok(())
}
