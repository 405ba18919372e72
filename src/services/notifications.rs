//! Unread-notification polling
//!
//! A fixed-interval background task refreshing the unread count. Best-effort
//! by design: a failed poll is logged at debug and the previous count stands;
//! nothing else in the client is affected.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::notifications::UnreadSource;

pub struct NotificationWatcher {
    source: Arc<dyn UnreadSource>,
    interval: Duration,
    unread_tx: watch::Sender<u64>,
}

impl NotificationWatcher {
    pub fn new(source: Arc<dyn UnreadSource>, interval: Duration) -> Self {
        let (unread_tx, _) = watch::channel(0);
        Self {
            source,
            interval,
            unread_tx,
        }
    }

    /// Watch the unread count; starts at 0 until the first successful poll.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.unread_tx.subscribe()
    }

    /// Fetch once and publish. Failures are swallowed after logging.
    pub async fn poll_once(&self) {
        match self.source.unread_count().await {
            Ok(count) => {
                self.unread_tx.send_replace(count);
            }
            Err(e) => {
                tracing::debug!(error = %e, "unread-count poll failed, keeping previous value");
            }
        }
    }

    /// Spawn the polling loop. Dropping the handle aborts nothing; call
    /// `abort()` on it to stop the loop.
    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                self.poll_once().await;
            }
        })
    }
}
