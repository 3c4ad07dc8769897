// Copyright (c) 2025 - Cowboy AI, Inc.
//! Producers of Async States
//!
//! A producer is a single-shot asynchronous operation exposed as a finite
//! sequence of [`AsyncState`] values:
//!
//! ```text
//! subscribe ──▶ Pending ──▶ (work runs) ──▶ Completed(outcome) ──▶ end
//! ```
//!
//! Exactly one `Pending` is emitted first, exactly one `Completed` last, and
//! nothing in between. Invoking the operation again builds a new,
//! independent sequence.
//!
//! # Two Flavours
//!
//! - [`produce`] runs the work inline on whoever polls the stream.
//! - [`spawn_producer`] runs the work on a tokio task and publishes the two
//!   notifications to a single subscriber over a bounded channel. Dropping or
//!   cancelling the [`ProducerHandle`] aborts the in-flight work.
//!
//! # Use Cases
//!
//! [`UseCase`] is the producer contract for application code: implement
//! `execute` and observers get a ready-made state stream through
//! [`UseCase::states`].
//!
//! ```rust,ignore
//! use cim_outcome::producer::UseCase;
//! use futures::StreamExt;
//!
//! let states: Vec<_> = get_items.states().collect().await;
//! assert!(states[0].is_loading());
//! assert!(states[1].is_completed());
//! ```

pub mod spawned;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, Stream};
use futures::{FutureExt, StreamExt};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::async_state::AsyncState;
use crate::outcome::Outcome;

pub use spawned::{spawn_producer, ProducerHandle};

/// Wrap `work` into the `[Pending, Completed]` state sequence
///
/// The stream is lazy: `Pending` is emitted on the first poll and `work` only
/// starts once the observer asks for the next state.
pub fn produce<T, F, Fut>(work: Fut) -> impl Stream<Item = AsyncState<T, F>>
where
    Fut: Future<Output = Outcome<T, F>>,
{
    let operation_id = Uuid::now_v7();

    let completion = work.map(move |outcome| {
        debug!(
            %operation_id,
            success = outcome.is_success(),
            "Operation completed"
        );
        AsyncState::Completed(outcome)
    });

    stream::once(async move {
        debug!(%operation_id, "Operation started");
        AsyncState::Pending
    })
    .chain(stream::once(completion))
}

/// Bound `work` by a deadline, turning expiry into an ordinary failure
///
/// Timeouts are not part of the producer contract; callers compose this
/// around the work they hand to a producer.
pub async fn with_timeout<T, F, Fut, G>(
    work: Fut,
    duration: Duration,
    on_timeout: G,
) -> Outcome<T, F>
where
    Fut: Future<Output = Outcome<T, F>>,
    G: FnOnce() -> F,
{
    match tokio::time::timeout(duration, work).await {
        Ok(outcome) => outcome,
        Err(_) => {
            warn!("Operation timed out after {:?}", duration);
            Outcome::Failure(on_timeout())
        }
    }
}

/// Single-shot application operation resolving to an [`Outcome`]
#[async_trait]
pub trait UseCase: Send + Sync {
    /// Success value type
    type Output: Send;

    /// Failure value type
    type Error: Send;

    /// Perform the work, resolving to exactly one outcome
    async fn execute(&self) -> Outcome<Self::Output, Self::Error>;

    /// Observe one invocation as a `[Pending, Completed]` stream
    fn states(&self) -> BoxStream<'_, AsyncState<Self::Output, Self::Error>> {
        produce(self.execute()).boxed()
    }
}
