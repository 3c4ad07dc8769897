// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-outcome
//!
//! Deterministic catalog wiring shared by the scenario tests. No latency is
//! configured anywhere so scenarios never depend on wall-clock timing.

#![allow(dead_code)]

use std::sync::Arc;

use cim_outcome::catalog::{GetItemsUseCase, InMemoryItemRepository, Item, ItemsViewModel};
use cim_outcome::config::{CatalogConfig, ProducerConfig};
use cim_outcome::failure::{shared, SharedFailure};

pub const BLACK: &str = "Black";
pub const NO_NETWORK: &str = "No network connection";

/// Producer configuration used by every scenario
pub fn producer_config() -> ProducerConfig {
    ProducerConfig::new("scenario-producer")
}

/// The single item served by the default catalog
pub fn black_item() -> Item {
    Item::new(BLACK)
}

/// Use case over the default in-memory catalog
pub fn serving_use_case() -> GetItemsUseCase {
    GetItemsUseCase::new(Arc::new(InMemoryItemRepository::new()))
}

/// Use case whose catalog fails with "No network connection"
pub fn offline_use_case() -> GetItemsUseCase {
    let config = CatalogConfig::default().failing_with(NO_NETWORK);
    GetItemsUseCase::new(Arc::new(InMemoryItemRepository::from_config(config)))
}

/// Use case whose catalog fails with an arbitrary failure kind
pub fn failing_use_case(failure: SharedFailure) -> GetItemsUseCase {
    GetItemsUseCase::new(Arc::new(InMemoryItemRepository::new().failing_with(failure)))
}

/// View model over a use case
pub fn view_model(use_case: GetItemsUseCase) -> ItemsViewModel {
    ItemsViewModel::new(use_case, producer_config())
}

/// Shared failure from any failure kind
pub fn failure_of<F: cim_outcome::Failure + 'static>(failure: F) -> SharedFailure {
    shared(failure)
}
