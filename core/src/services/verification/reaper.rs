//! Background reaper for expired sessions and elapsed lockouts
//!
//! The reaper only bounds memory. Expiry is always checked again lazily inside
//! `verify` and `is_locked_out`, so a late or skipped sweep never changes an outcome.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{error, info, warn};

use crate::domain::entities::REAPER_INTERVAL_MINUTES;

use super::store::VerificationStore;
use super::types::SweepResult;

/// Shortest accepted sweep period
const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Periodic sweeper bound to one store
pub struct SessionReaper {
    store: Arc<VerificationStore>,
    interval: Duration,
}

impl SessionReaper {
    /// Create a reaper sweeping `store` every `interval`
    pub fn new(store: Arc<VerificationStore>, interval: Duration) -> Self {
        let interval = if interval < MIN_INTERVAL {
            warn!(
                requested = ?interval,
                "Reaper interval too short, using {} second(s)",
                MIN_INTERVAL.as_secs()
            );
            MIN_INTERVAL
        } else {
            interval
        };

        Self { store, interval }
    }

    /// Create a reaper with the default five minute period
    pub fn with_defaults(store: Arc<VerificationStore>) -> Self {
        Self::new(store, Duration::from_secs(REAPER_INTERVAL_MINUTES * 60))
    }

    /// Sweep period
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run a single sweep immediately
    pub fn run_once(&self) -> SweepResult {
        self.store.sweep()
    }

    /// Spawn the sweep loop on the current tokio runtime
    ///
    /// The first sweep happens one full interval after start. The loop runs
    /// until [`ReaperHandle::shutdown`] is called or the handle is dropped.
    pub fn start(self) -> ReaperHandle {
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            info!(
                interval_seconds = self.interval.as_secs(),
                "Session reaper started"
            );

            let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        self.run_once();
                    }
                    // Fires on an explicit shutdown and when the handle is dropped
                    _ = &mut shutdown_rx => break,
                }
            }

            info!("Session reaper stopped");
        });

        ReaperHandle {
            shutdown: Some(shutdown_tx),
            task,
        }
    }
}

/// Owner of a running reaper task
pub struct ReaperHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ReaperHandle {
    /// Stop the loop and wait for the task to finish
    pub async fn shutdown(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }

        if let Err(e) = self.task.await {
            error!("Session reaper task ended abnormally: {}", e);
        }
    }

    /// Whether the task has already finished
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
