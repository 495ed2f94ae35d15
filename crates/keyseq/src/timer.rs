use std::time::Duration;

use tokio::{task::JoinHandle, time};
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// A cancellable one-shot scheduled callback.
///
/// Bridges a pending chord across discrete keydown events: the router arms
/// it whenever a sequence goes pending and cancels it when the sequence
/// resolves. Arming replaces any previously armed callback, so cancellation
/// on every new keydown is a single `arm` call. Requires a tokio runtime.
#[derive(Debug, Default)]
pub struct SeqTimer {
    /// The armed callback's cancellation token and task handle.
    current: Option<(CancellationToken, JoinHandle<()>)>,
}

impl SeqTimer {
    /// Creates a disarmed timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms `f` to run after `delay`, cancelling any previously armed
    /// callback first.
    pub fn arm<F>(&mut self, delay: Duration, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let token = CancellationToken::new();
        let cancel = token.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = time::sleep(delay) => {
                    trace!(delay_ms = delay.as_millis(), "seq_timer_fired");
                    f();
                }
                _ = cancel.cancelled() => {
                    trace!("seq_timer_cancelled");
                }
            }
        });
        self.current = Some((token, handle));
    }

    /// Cancels the armed callback, if any (non-blocking).
    pub fn cancel(&mut self) {
        if let Some((token, _)) = self.current.take() {
            token.cancel();
        }
    }
}

impl Drop for SeqTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
