//! Debouncer — collapses a burst of triggers into a single delayed firing.
//!
//! This is the explicit-state-machine form of the usual closure-and-timer
//! debounce: the pending timer is a visible `JoinHandle` and cancellation
//! is a named operation, not implicit reassignment. Fired values come out
//! on a channel so the consumer stays a plain event loop.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::Sender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates a debouncer and the receiver its fired values arrive on.
    pub fn new(delay: Duration) -> (Self, mpsc::Receiver<T>) {
        let (tx, rx) = mpsc::channel(1);
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Supersedes any pending firing and schedules `value` to fire after
    /// the quiescence window. Only the latest scheduled value survives a
    /// burst; earlier values are discarded. Fire-and-forget: nothing is
    /// returned to the caller.
    pub fn schedule(&mut self, value: T) {
        self.cancel_pending();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the event loop is shutting down.
            let _ = tx.send(value).await;
        }));
    }

    /// Cancels the pending firing, if any.
    pub fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            trace!("superseding pending debounce timer");
            handle.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn test_burst_fires_once_with_latest_value() {
        let (mut debouncer, mut fired) = Debouncer::new(DELAY);
        debouncer.schedule("ru");
        debouncer.schedule("rus");
        debouncer.schedule("rust");

        assert_eq!(fired.recv().await, Some("rust"));

        // Quiescence long past the window: nothing else may fire.
        tokio::time::sleep(DELAY * 4).await;
        assert!(fired.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_windows_fire_separately() {
        let (mut debouncer, mut fired) = Debouncer::new(DELAY);
        debouncer.schedule(1);
        tokio::time::sleep(DELAY * 2).await;
        debouncer.schedule(2);

        assert_eq!(fired.recv().await, Some(1));
        assert_eq!(fired.recv().await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_pending_suppresses_firing() {
        let (mut debouncer, mut fired) = Debouncer::new(DELAY);
        debouncer.schedule("doomed");
        debouncer.cancel_pending();

        tokio::time::sleep(DELAY * 4).await;
        assert!(fired.try_recv().is_err());
    }
}
