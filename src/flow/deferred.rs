//! Cancelable deferred callbacks
//!
//! A `Deferred` runs its callback once, after a fixed delay, on the tokio
//! runtime. Each one carries a child `CancellationToken` of the flow that
//! scheduled it, so either the single callback or the whole flow can be
//! cancelled before the deadline.

use crate::utils::error::MedialoaderError;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

pub struct Deferred<T> {
    id: Uuid,
    deadline: Instant,
    token: CancellationToken,
    handle: JoinHandle<Option<T>>,
}

impl<T: Send + 'static> Deferred<T> {
    /// Schedule `callback` to run after `delay` unless cancelled first
    pub fn schedule<F, Fut>(delay: Duration, parent: &CancellationToken, callback: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::schedule_or_else(delay, parent, callback, || async {})
    }

    /// Like `schedule`, running `on_cancel` instead of `callback` when the
    /// token fires before the deadline
    pub fn schedule_or_else<F, Fut, C, CFut>(
        delay: Duration,
        parent: &CancellationToken,
        callback: F,
        on_cancel: C,
    ) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
        C: FnOnce() -> CFut + Send + 'static,
        CFut: Future<Output = ()> + Send + 'static,
    {
        // Deadline is fixed here, not when the task is first polled
        let deadline = Instant::now() + delay;
        let token = parent.child_token();
        let task_token = token.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = task_token.cancelled() => {
                    on_cancel().await;
                    None
                }
                _ = tokio::time::sleep_until(deadline) => Some(callback().await),
            }
        });

        Self {
            id: Uuid::new_v4(),
            deadline,
            token,
            handle,
        }
    }
}

impl<T> Deferred<T> {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the callback. `None` means it was cancelled.
    pub async fn join(self) -> Result<Option<T>, MedialoaderError> {
        self.handle
            .await
            .map_err(|e| MedialoaderError::OperationFailed(format!("Deferred task failed: {}", e)))
    }
}
