// Copyright (c) 2025 - Cowboy AI, Inc.
//! Spawned producers
//!
//! The work runs on its own tokio task. States travel to exactly one
//! subscriber over a bounded channel sized for the two notifications, so the
//! producer never blocks on a slow observer.
//!
//! ```text
//! ┌──────────────┐  Pending, Completed  ┌────────────────┐
//! │ tokio task   │ ───────────────────▶ │ ProducerHandle │ (Stream)
//! │ (work.await) │      mpsc(2)         │  cancel/drop   │
//! └──────────────┘                      └────────────────┘
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use crate::async_state::AsyncState;
use crate::config::ProducerConfig;
use crate::errors::{panic_message, ProducerError, ProducerResult};
use crate::failure::SharedFailure;
use crate::outcome::Outcome;

/// Run `work` on a tokio task and observe it through the returned handle
///
/// Must be called from within a tokio runtime.
pub fn spawn_producer<T, F, Fut>(
    work: Fut,
    config: &ProducerConfig,
) -> ProducerResult<ProducerHandle<T, F>>
where
    Fut: Future<Output = Outcome<T, F>> + Send + 'static,
    T: Send + 'static,
    F: Send + 'static,
{
    config.validate()?;

    let (sender, receiver) = mpsc::channel(config.channel_capacity);
    let operation_id = Uuid::now_v7();
    let span = info_span!("producer", name = %config.name, %operation_id);

    let task = tokio::spawn(
        async move {
            if sender.send(AsyncState::Pending).await.is_err() {
                debug!("Observer gone before start, skipping work");
                return;
            }

            let outcome = work.await;
            let success = outcome.is_success();

            if sender.send(AsyncState::Completed(outcome)).await.is_err() {
                debug!("Observer gone before completion");
            } else {
                debug!(success, "Published completed state");
            }
        }
        .instrument(span),
    );

    info!("Spawned producer {} ({})", config.name, operation_id);

    Ok(ProducerHandle {
        name: config.name.clone(),
        operation_id,
        receiver,
        task,
    })
}

/// Single-subscriber view of a spawned producer
///
/// Yields `Pending`, then `Completed`, then ends. Dropping the handle cancels
/// the work.
pub struct ProducerHandle<T, F = SharedFailure> {
    name: String,
    operation_id: Uuid,
    receiver: mpsc::Receiver<AsyncState<T, F>>,
    task: JoinHandle<()>,
}

impl<T, F> ProducerHandle<T, F> {
    /// Producer name from its configuration
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier of this invocation
    pub fn operation_id(&self) -> Uuid {
        self.operation_id
    }

    /// Whether the producer task has stopped
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Abort the in-flight work
    ///
    /// Best effort: a state already queued may still be delivered, and no
    /// completed state is guaranteed afterwards.
    pub fn cancel(&self) {
        if !self.task.is_finished() {
            info!("Cancelling producer {} ({})", self.name, self.operation_id);
            self.task.abort();
        }
    }

    /// Wait for the producer task to stop
    ///
    /// Succeeds when the task ran to the end, reports cancellation or a panic
    /// raised by the work otherwise.
    pub async fn join(mut self) -> ProducerResult<()> {
        self.wait_task().await
    }

    /// Drain the remaining states and return the completed one
    pub async fn into_completed(mut self) -> ProducerResult<AsyncState<T, F>> {
        let mut last = None;
        while let Some(state) = self.receiver.recv().await {
            last = Some(state);
        }

        match last {
            Some(state @ AsyncState::Completed(_)) => Ok(state),
            _ => {
                self.wait_task().await?;
                Err(ProducerError::Disconnected {
                    name: self.name.clone(),
                })
            }
        }
    }

    async fn wait_task(&mut self) -> ProducerResult<()> {
        (&mut self.task)
            .await
            .map_err(|err| join_error(&self.name, err))
    }
}

fn join_error(name: &str, err: JoinError) -> ProducerError {
    if err.is_panic() {
        let message = panic_message(err.into_panic().as_ref());
        ProducerError::Panicked {
            name: name.to_string(),
            message,
        }
    } else {
        ProducerError::Cancelled {
            name: name.to_string(),
        }
    }
}

impl<T, F> Stream for ProducerHandle<T, F> {
    type Item = AsyncState<T, F>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().receiver.poll_recv(cx)
    }
}

impl<T, F> Drop for ProducerHandle<T, F> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl<T, F> fmt::Debug for ProducerHandle<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProducerHandle")
            .field("name", &self.name)
            .field("operation_id", &self.operation_id)
            .field("finished", &self.task.is_finished())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::oneshot;

    fn config() -> ProducerConfig {
        ProducerConfig::new("test-producer")
    }

    #[tokio::test]
    async fn test_spawned_sequence() {
        let handle = spawn_producer(async { Outcome::<i32, String>::success(5) }, &config())
            .unwrap();

        let states: Vec<_> = handle.collect().await;
        assert_eq!(
            states,
            vec![AsyncState::Pending, AsyncState::Completed(Outcome::Success(5))]
        );
    }

    #[tokio::test]
    async fn test_into_completed_returns_final_state() {
        let handle = spawn_producer(
            async { Outcome::<i32, String>::failure("offline".to_string()) },
            &config(),
        )
        .unwrap();

        let state = handle.into_completed().await.unwrap();
        assert_eq!(state.error().map(String::as_str), Some("offline"));
    }

    #[tokio::test]
    async fn test_rejects_small_channel() {
        let config = config().with_channel_capacity(1);
        let result = spawn_producer(async { Outcome::<i32, String>::success(1) }, &config);
        assert!(matches!(result, Err(ProducerError::Config(_))));
    }

    #[tokio::test]
    async fn test_cancel_stops_before_completion() {
        let mut handle = spawn_producer(
            futures::future::pending::<Outcome<i32, String>>(),
            &config(),
        )
        .unwrap();

        assert_eq!(handle.next().await, Some(AsyncState::Pending));

        handle.cancel();
        assert_eq!(handle.next().await, None);

        let result = handle.join().await;
        assert!(matches!(result, Err(ProducerError::Cancelled { .. })));
    }

    #[tokio::test]
    async fn test_dropping_handle_aborts_work() {
        let (dropped_tx, dropped_rx) = oneshot::channel::<()>();
        let finished = Arc::new(AtomicBool::new(false));
        let finished_flag = Arc::clone(&finished);

        let mut handle = spawn_producer(
            async move {
                let _dropped = dropped_tx;
                futures::future::pending::<()>().await;
                finished_flag.store(true, Ordering::SeqCst);
                Outcome::<i32, String>::success(0)
            },
            &config(),
        )
        .unwrap();

        assert_eq!(handle.next().await, Some(AsyncState::Pending));
        drop(handle);

        let closed = tokio::time::timeout(Duration::from_secs(1), dropped_rx)
            .await
            .expect("work should be dropped after the handle");
        assert!(closed.is_err());
        assert!(!finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_panicking_work_is_reported() {
        let handle = spawn_producer(
            async {
                if true {
                    panic!("repository exploded");
                }
                Outcome::<i32, String>::success(0)
            },
            &config(),
        )
        .unwrap();

        match handle.into_completed().await {
            Err(ProducerError::Panicked { message, .. }) => {
                assert_eq!(message, "repository exploded");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_each_spawn_is_independent() {
        let first = spawn_producer(async { Outcome::<i32, String>::success(1) }, &config())
            .unwrap();
        let second = spawn_producer(async { Outcome::<i32, String>::success(2) }, &config())
            .unwrap();

        assert_ne!(first.operation_id(), second.operation_id());
        assert_eq!(first.into_completed().await.unwrap().into_data(), Some(1));
        assert_eq!(second.into_completed().await.unwrap().into_data(), Some(2));
    }
}
