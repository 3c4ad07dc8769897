// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catalog presentation: view model and display text
//!
//! The view model is an observer of the load use case. It keeps the latest
//! [`AsyncState`] in a `watch` channel so it can be sampled at any time
//! (`state()`) or followed as it changes (`subscribe()`), and re-renders the
//! display text from the whole state on every change.

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::watch;
use tracing::{info, warn};

use super::domain::{GetItemsUseCase, Item};
use crate::async_state::AsyncState;
use crate::config::ProducerConfig;
use crate::errors::{CaughtError, ProducerError, ProducerResult};
use crate::failure::{shared, Failure, NetworkConnectionFailure, SharedFailure};
use crate::outcome::Outcome;
use crate::producer::{spawn_producer, with_timeout, UseCase};

/// State observed by catalog views
pub type ItemsState = AsyncState<Vec<Item>>;

/// Shown while the catalog is loading
pub const LOADING_TEXT: &str = "Loading…";

/// Shown when a failure carries no message of its own
pub const CONNECTIVITY_FAILURE_TEXT: &str = "Unable to reach the catalog, check your connection";

/// Shown when the catalog loaded but is empty
pub const EMPTY_CATALOG_TEXT: &str = "No items";

/// Render a catalog state: first item's name, or the failure message
pub fn display_text(state: &ItemsState) -> String {
    match state {
        AsyncState::Pending => LOADING_TEXT.to_string(),
        AsyncState::Completed(Outcome::Success(items)) => items
            .first()
            .map(|item| item.name.clone())
            .unwrap_or_else(|| EMPTY_CATALOG_TEXT.to_string()),
        AsyncState::Completed(Outcome::Failure(failure)) => failure
            .message()
            .unwrap_or_else(|| CONNECTIVITY_FAILURE_TEXT.to_string()),
    }
}

/// Observer of catalog loads
pub struct ItemsViewModel {
    use_case: Arc<GetItemsUseCase>,
    config: ProducerConfig,
    timeout: Option<std::time::Duration>,
    state: watch::Sender<ItemsState>,
}

impl ItemsViewModel {
    /// Create a view model; its initial state is `Pending`
    pub fn new(use_case: GetItemsUseCase, config: ProducerConfig) -> Self {
        let (state, _) = watch::channel(AsyncState::Pending);
        Self {
            use_case: Arc::new(use_case),
            config,
            timeout: None,
            state,
        }
    }

    /// Fail loads that take longer than `timeout`
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Current state
    pub fn state(&self) -> ItemsState {
        self.state.borrow().clone()
    }

    /// Follow state changes
    pub fn subscribe(&self) -> watch::Receiver<ItemsState> {
        self.state.subscribe()
    }

    /// Text for the current state
    pub fn display_text(&self) -> String {
        display_text(&self.state.borrow())
    }

    /// Run one load, publishing every state, and return the completed one
    ///
    /// If the producer stops without completing, a failed state is still
    /// published so observers never stay on `Pending`, and the producer
    /// error is returned.
    pub async fn load(&self) -> ProducerResult<ItemsState> {
        let use_case = Arc::clone(&self.use_case);
        let timeout = self.timeout;

        let work = async move {
            match timeout {
                Some(duration) => {
                    with_timeout(use_case.execute(), duration, || {
                        shared(NetworkConnectionFailure::new(CONNECTIVITY_FAILURE_TEXT))
                    })
                    .await
                }
                None => use_case.execute().await,
            }
        };

        let mut handle = spawn_producer(work, &self.config)?;

        while let Some(state) = handle.next().await {
            let completed = state.is_completed();
            self.state.send_replace(state);

            if completed {
                let state = self.state();
                info!("Catalog load finished: {}", display_text(&state));
                return Ok(state);
            }
        }

        let name = handle.name().to_string();
        let error = match handle.join().await {
            Ok(()) => ProducerError::Disconnected { name },
            Err(error) => error,
        };

        warn!("Catalog load did not complete: {}", error);
        self.state.send_replace(AsyncState::Completed(Outcome::failure(unfinished_load(&error))));
        Err(error)
    }
}

/// Failure shown to observers when a load stops without a completed state
fn unfinished_load(error: &ProducerError) -> SharedFailure {
    match error {
        ProducerError::Panicked { message, .. } => shared(CaughtError::Panicked {
            message: message.clone(),
        }),
        _ => shared(NetworkConnectionFailure::new(CONNECTIVITY_FAILURE_TEXT)),
    }
}
