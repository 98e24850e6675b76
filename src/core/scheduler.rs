//! Cron-based scheduler driving collect → validate → score cycles

use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::core::runner::PipelineRunner;

/// Scheduler that runs one pipeline cycle per cron tick, strictly
/// sequentially: the next tick is armed only after the current run finishes.
pub struct PipelineScheduler {
    runner: Arc<PipelineRunner>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl PipelineScheduler {
    /// Create a new scheduler
    ///
    /// # Arguments
    /// * `runner` - The cycle to execute on each tick
    /// * `interval_seconds` - Run interval in seconds (0 = disabled)
    pub fn new(
        runner: Arc<PipelineRunner>,
        interval_seconds: u64,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if interval_seconds == 0 {
            return Err("Scheduler disabled: interval_seconds is 0".into());
        }

        // Convert interval to cron expression: every N seconds
        // Cron format: second minute hour day month weekday
        let cron_expr = if interval_seconds >= 60 {
            let minutes = interval_seconds / 60;
            format!("0 */{} * * * *", minutes)
        } else {
            format!("*/{} * * * * *", interval_seconds)
        };

        let schedule = Schedule::from_str(&cron_expr).map_err(|e| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid cron expression '{}': {}", cron_expr, e),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            "PipelineScheduler: created with interval {}s (cron: {})",
            interval_seconds,
            cron_expr
        );

        Ok(Self {
            runner,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Start the scheduler
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let runner = self.runner.clone();
        let schedule = self.schedule.clone();
        let handle_arc = self.handle.clone();

        let handle = tokio::spawn(async move {
            info!("PipelineScheduler: started, waiting for cron schedule...");

            loop {
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

                let run_at = chrono::Utc::now();
                match runner.run_once(run_at).await {
                    Ok(report) => {
                        info!(
                            initiatives_scored = report.initiatives_scored,
                            at_risk = report.at_risk_count,
                            duration_ms = report.duration_ms,
                            "PipelineScheduler: cycle completed"
                        );
                    }
                    Err(e) => {
                        error!(error = %e, "PipelineScheduler: cycle failed, retrying next tick");
                    }
                }
            }
        });

        {
            let mut h = handle_arc.write().await;
            *h = Some(handle);
        }

        info!("PipelineScheduler: started successfully");
        Ok(())
    }

    /// Stop the scheduler
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("PipelineScheduler: stopped");
        }
    }

    /// Check if the scheduler is running
    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
