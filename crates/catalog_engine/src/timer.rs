use std::time::Duration;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

/// Handle to at most one pending delayed action.
///
/// Scheduling a new action cancels the pending one, which makes this the
/// building block for debouncing. Dropping the handle cancels too.
#[derive(Debug)]
pub struct DelayedTask {
    runtime: Handle,
    pending: Option<CancellationToken>,
}

impl DelayedTask {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            pending: None,
        }
    }

    pub fn schedule<F>(&mut self, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let token = CancellationToken::new();
        let done = token.clone();
        self.runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = done.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    done.cancel();
                    action();
                }
            }
        });
        self.pending = Some(token);
    }

    /// Returns true if an action was still pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(token) if !token.is_cancelled() => {
                token.cancel();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }
}

impl Drop for DelayedTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
