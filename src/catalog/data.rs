// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory catalog data source

use async_trait::async_trait;
use tracing::{debug, info};

use super::domain::{Item, ItemRepository, ItemsOutcome};
use crate::config::CatalogConfig;
use crate::failure::{shared, NetworkConnectionFailure, SharedFailure};
use crate::outcome::Outcome;

/// The items served by a fresh in-memory catalog
pub fn default_items() -> Vec<Item> {
    vec![Item::new("Black")]
}

/// Repository backed by a fixed list of items
///
/// Returns its items after the configured latency, or the configured failure
/// without waiting.
#[derive(Debug, Clone)]
pub struct InMemoryItemRepository {
    items: Vec<Item>,
    failure: Option<SharedFailure>,
    config: CatalogConfig,
}

impl InMemoryItemRepository {
    /// Repository serving [`default_items`] with no latency
    pub fn new() -> Self {
        Self::with_items(default_items())
    }

    /// Repository serving the given items
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            failure: None,
            config: CatalogConfig::default(),
        }
    }

    /// Repository configured from a [`CatalogConfig`]
    ///
    /// `fail_with` turns into a [`NetworkConnectionFailure`] carrying that
    /// message.
    pub fn from_config(config: CatalogConfig) -> Self {
        let failure = config
            .fail_with
            .clone()
            .map(|message| shared(NetworkConnectionFailure::new(message)));

        Self {
            items: default_items(),
            failure,
            config,
        }
    }

    /// Fail every load with `failure`
    pub fn failing_with(mut self, failure: SharedFailure) -> Self {
        self.failure = Some(failure);
        self
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn get_items(&self) -> ItemsOutcome {
        if let Some(failure) = &self.failure {
            info!("In-memory catalog configured to fail");
            return Outcome::failure(failure.clone());
        }

        if !self.config.latency.is_zero() {
            debug!("Simulating catalog latency of {:?}", self.config.latency);
            tokio::time::sleep(self.config.latency).await;
        }

        Outcome::success(self.items.clone())
    }
}
