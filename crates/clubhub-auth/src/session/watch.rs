//! Lapsed-session detection for long-lived staff views.
//!
//! The server-side gate only runs per request, so an open tab could keep
//! showing staff UI long after its session was revoked. This watch task
//! re-checks the session on a fixed interval and again whenever the view
//! regains focus, and signals a forced redirect to sign-in once the
//! session has lapsed. Both triggers invoke the same idempotent probe.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use clubhub_core::result::AppResult;

/// A re-checkable "is the session still valid" query.
#[async_trait]
pub trait SessionProbe: Send + Sync {
    /// Returns whether the watched session is still valid.
    async fn is_active(&self) -> AppResult<bool>;
}

/// Periodic plus focus-triggered session re-checking.
pub struct SessionWatch {
    probe: Arc<dyn SessionProbe>,
    interval: Duration,
}

/// Handle to a running [`SessionWatch`] task.
///
/// Dropping the handle cancels the task, so a torn-down view cannot leak
/// its watcher.
pub struct SessionWatchHandle {
    task: JoinHandle<()>,
    focus_tx: mpsc::Sender<()>,
    lapsed_rx: watch::Receiver<bool>,
}

impl SessionWatch {
    /// Create a watch over the given probe, re-checking every `interval`.
    pub fn new(probe: Arc<dyn SessionProbe>, interval: Duration) -> Self {
        Self { probe, interval }
    }

    /// Create a watch with the configured re-check interval.
    pub fn from_config(
        probe: Arc<dyn SessionProbe>,
        config: &clubhub_core::config::auth::AuthConfig,
    ) -> Self {
        Self::new(probe, Duration::from_secs(config.recheck_interval_seconds))
    }

    /// Spawn the watch task.
    pub fn spawn(self) -> SessionWatchHandle {
        let (focus_tx, mut focus_rx) = mpsc::channel::<()>(1);
        let (lapsed_tx, lapsed_rx) = watch::channel(false);

        let probe = self.probe;
        let interval = self.interval;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick of a fresh interval resolves immediately;
            // consume it so the loop waits a full period before checking.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        debug!("Periodic session re-check");
                    }
                    received = focus_rx.recv() => {
                        if received.is_none() {
                            break;
                        }
                        debug!("Focus-triggered session re-check");
                    }
                }

                match probe.is_active().await {
                    Ok(true) => {}
                    Ok(false) => {
                        let _ = lapsed_tx.send(true);
                        break;
                    }
                    Err(e) => {
                        // A failed probe proves nothing either way; keep
                        // the current view and re-check next round.
                        warn!(error = %e, "Session probe failed");
                    }
                }
            }
        });

        SessionWatchHandle {
            task,
            focus_tx,
            lapsed_rx,
        }
    }
}

impl SessionWatchHandle {
    /// Request an immediate re-check (the view regained focus).
    pub fn notify_focus(&self) {
        let _ = self.focus_tx.try_send(());
    }

    /// Whether the watched session has lapsed.
    pub fn has_lapsed(&self) -> bool {
        *self.lapsed_rx.borrow()
    }

    /// A receiver that resolves when the session lapses.
    pub fn lapsed(&self) -> watch::Receiver<bool> {
        self.lapsed_rx.clone()
    }
}

impl Drop for SessionWatchHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    struct FlippableProbe {
        active: AtomicBool,
        checks: AtomicUsize,
    }

    impl FlippableProbe {
        fn new(active: bool) -> Arc<Self> {
            Arc::new(Self {
                active: AtomicBool::new(active),
                checks: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl SessionProbe for FlippableProbe {
        async fn is_active(&self) -> AppResult<bool> {
            self.checks.fetch_add(1, Ordering::SeqCst);
            Ok(self.active.load(Ordering::SeqCst))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_periodic_check_detects_lapse() {
        let probe = FlippableProbe::new(true);
        let handle =
            SessionWatch::new(probe.clone(), Duration::from_secs(30)).spawn();

        tokio::time::sleep(Duration::from_secs(31)).await;
        tokio::task::yield_now().await;
        assert!(!handle.has_lapsed());
        assert!(probe.checks.load(Ordering::SeqCst) >= 1);

        probe.active.store(false, Ordering::SeqCst);
        let mut lapsed = handle.lapsed();
        tokio::time::sleep(Duration::from_secs(31)).await;
        lapsed.changed().await.unwrap();
        assert!(handle.has_lapsed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_focus_triggers_immediate_check() {
        let probe = FlippableProbe::new(false);
        let handle =
            SessionWatch::new(probe.clone(), Duration::from_secs(3600)).spawn();

        // Well before the first periodic tick, a focus event re-checks.
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(probe.checks.load(Ordering::SeqCst), 0);

        handle.notify_focus();
        let mut lapsed = handle.lapsed();
        lapsed.changed().await.unwrap();
        assert!(handle.has_lapsed());
        assert_eq!(probe.checks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_task() {
        let probe = FlippableProbe::new(true);
        let handle =
            SessionWatch::new(probe.clone(), Duration::from_secs(30)).spawn();

        drop(handle);
        tokio::time::sleep(Duration::from_secs(120)).await;
        tokio::task::yield_now().await;
        assert_eq!(probe.checks.load(Ordering::SeqCst), 0);
    }
}
