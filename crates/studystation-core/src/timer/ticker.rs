//! One-second tick source.
//!
//! The engine itself is caller-driven; this is the single tick source
//! that drives it in the running application. Creation and cancellation
//! are paired: dropping the `Ticker` aborts its task, so no orphaned
//! tick can fire after a logical stop. The owner drops and recreates
//! the ticker whenever the engine stops or resumes, which keeps at most
//! one pending tick alive per engine.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Cancellable repeating one-second tick.
pub struct Ticker {
    handle: JoinHandle<()>,
    rx: mpsc::Receiver<()>,
}

impl Ticker {
    /// Spawn the tick task. The first tick arrives one second after
    /// creation.
    pub fn start() -> Self {
        Self::with_period(Duration::from_secs(1))
    }

    /// Spawn with a custom period (tests use short periods).
    pub fn with_period(period: Duration) -> Self {
        // Capacity 1: a slow receiver delays the sender instead of
        // queueing ticks, so the engine never sees a decrement burst.
        let (tx, rx) = mpsc::channel(1);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            // The first interval tick completes immediately; swallow it
            // so ticks start one full period after creation.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });
        Self { handle, rx }
    }

    /// Wait for the next tick. Returns `None` if the tick task is gone.
    pub async fn tick(&mut self) -> Option<()> {
        self.rx.recv().await
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
