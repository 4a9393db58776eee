//! Rotation ticker
//!
//! Explicit scheduled-task abstraction around the periodic tick, decoupled
//! from the controller so tests can drive `on_tick` synchronously without
//! real time passing.

use crate::controller::RotationController;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Repeating tick driving a shared rotation controller.
///
/// Each tick takes the controller lock for the duration of the swap, so
/// every transition is one critical section. `shutdown` is idempotent and
/// also runs on drop.
#[derive(Debug)]
pub struct RotationTicker {
    handle: Option<JoinHandle<()>>,
}

impl RotationTicker {
    /// Spawn the tick task with the given period.
    #[must_use]
    pub fn spawn(controller: Arc<Mutex<RotationController>>, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // the first tick fires immediately; the initial featured set
            // already exists, so discard it
            interval.tick().await;
            loop {
                interval.tick().await;
                controller.lock().await.on_tick();
            }
        });
        tracing::debug!(period_ms = period.as_millis() as u64, "rotation ticker spawned");
        Self {
            handle: Some(handle),
        }
    }

    /// Stop ticking. Idempotent; no `on_tick` fires after this returns.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("rotation ticker stopped");
        }
    }

    /// True while the tick task is still running
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for RotationTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
