//! Cron-based scheduler for trade cycles

use crate::jobs::context::JobContext;
use crate::jobs::handlers::handle_scheduled_tick;
use crate::jobs::types::TickResult;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Scheduler that periodically runs a trade cycle
pub struct JobScheduler {
    context: Arc<JobContext>,
    schedule: Schedule,
    cron_expr: String,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

/// Whether `interval_seconds` maps onto an evenly spaced cron step.
///
/// Seconds must divide a minute, and longer intervals must be whole
/// minutes that divide an hour. Anything else would tick unevenly.
pub fn interval_fits_cron(interval_seconds: u64) -> bool {
    match interval_seconds {
        0 => false,
        1..=59 => 60 % interval_seconds == 0,
        _ => interval_seconds % 60 == 0 && 60 % (interval_seconds / 60) == 0,
    }
}

/// Convert an interval into a six-field (seconds-first) cron expression.
pub fn interval_to_cron(interval_seconds: u64) -> String {
    // Cron format: second minute hour day month weekday
    if interval_seconds >= 60 {
        // For intervals >= 60 seconds, use minute-based cron
        let minutes = interval_seconds / 60;
        format!("0 */{} * * * *", minutes)
    } else {
        // For intervals < 60 seconds, use second-based cron
        format!("*/{} * * * * *", interval_seconds)
    }
}

impl JobScheduler {
    /// Create a new scheduler
    ///
    /// # Arguments
    /// * `context` - Shared job context the cycles run against
    /// * `interval_seconds` - Cycle interval in seconds (0 = disabled)
    pub fn new(
        context: Arc<JobContext>,
        interval_seconds: u64,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if interval_seconds == 0 {
            return Err("Scheduler disabled: interval_seconds is 0".into());
        }
        if !interval_fits_cron(interval_seconds) {
            return Err(format!(
                "Interval {}s cannot be scheduled evenly (use seconds dividing 60 or minutes dividing 60)",
                interval_seconds
            )
            .into());
        }

        let cron_expr = interval_to_cron(interval_seconds);
        let schedule = Schedule::from_str(&cron_expr).map_err(|e| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid cron expression '{}': {}", cron_expr, e),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            "JobScheduler: created with interval {}s (cron: {})",
            interval_seconds,
            cron_expr
        );

        Ok(Self {
            context,
            schedule,
            cron_expr,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    pub fn cron_expression(&self) -> &str {
        &self.cron_expr
    }

    /// Start the scheduler
    pub async fn start(&self) {
        let context = self.context.clone();
        let schedule = self.schedule.clone();

        let handle = tokio::spawn(async move {
            info!("JobScheduler: started, waiting for cron schedule...");

            loop {
                // Get the next scheduled time
                let mut upcoming = schedule.upcoming(chrono::Utc);
                if let Some(next_tick) = upcoming.next() {
                    let now = chrono::Utc::now();
                    if next_tick > now {
                        let duration = (next_tick - now).to_std().unwrap_or_default();
                        tokio::time::sleep(duration).await;
                    }
                } else {
                    // No more scheduled times, wait a bit and check again
                    tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                    continue;
                }

                info!("Running trade bot...");

                // Cycles run detached so a slow one cannot delay the next tick;
                // the context's guard decides whether the tick actually runs.
                let context = context.clone();
                tokio::spawn(async move {
                    match handle_scheduled_tick(&context).await {
                        TickResult::Completed(outcome) => {
                            debug!(outcome = outcome.outcome_label(), "JobScheduler: cycle completed");
                        }
                        TickResult::Failed(e) => {
                            debug!(error = %e, "JobScheduler: cycle failed");
                        }
                        TickResult::Skipped => {
                            debug!("JobScheduler: tick skipped");
                        }
                    }
                });
            }
        });

        let mut h = self.handle.write().await;
        if let Some(previous) = h.replace(handle) {
            previous.abort();
        }

        info!("JobScheduler: started successfully");
    }

    /// Stop the scheduler
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("JobScheduler: stopped");
        }
    }

    /// Check if the scheduler is running
    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
