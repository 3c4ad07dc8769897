// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catalog domain: items, repository interface and the load use case

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::failure::{Failure, SharedFailure};
use crate::outcome::Outcome;
use crate::producer::UseCase;

/// A catalog item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Outcome of loading the catalog
pub type ItemsOutcome = Outcome<Vec<Item>, SharedFailure>;

/// Source of catalog items
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Load every item, resolving to exactly one outcome
    async fn get_items(&self) -> ItemsOutcome;
}

/// Loads the full catalog from a repository
#[derive(Clone)]
pub struct GetItemsUseCase {
    repository: Arc<dyn ItemRepository>,
}

impl GetItemsUseCase {
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self { repository }
    }
}

impl std::fmt::Debug for GetItemsUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetItemsUseCase").finish_non_exhaustive()
    }
}

#[async_trait]
impl UseCase for GetItemsUseCase {
    type Output = Vec<Item>;
    type Error = SharedFailure;

    async fn execute(&self) -> ItemsOutcome {
        self.repository
            .get_items()
            .await
            .on_success(|items| debug!("Loaded {} catalog items", items.len()))
            .on_failure(|failure| debug!("Catalog load failed: {:?}", failure.message()))
    }
}
