// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catalog Demo
//!
//! Runs one catalog load through the view model and prints what a view would
//! display.
//!
//! Run with: cargo run --bin catalog-demo
//!
//! Environment:
//! - `CIM_OUTCOME_FAIL_WITH`: make the catalog fail with this message
//! - `CIM_OUTCOME_LATENCY_MS`: simulated catalog latency
//! - `CIM_OUTCOME_TIMEOUT_MS`: deadline for the load
//! - `CIM_OUTCOME_PRODUCER_NAME`, `CIM_OUTCOME_CHANNEL_CAPACITY`: producer settings

use std::sync::Arc;

use anyhow::{Context, Result};
use cim_outcome::catalog::{display_text, GetItemsUseCase, InMemoryItemRepository, ItemsViewModel};
use cim_outcome::config::{CatalogConfig, ProducerConfig};
use cim_outcome::failure::Failure;
use cim_outcome::logging::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let catalog = CatalogConfig::from_env().context("Invalid catalog configuration")?;
    let producer = ProducerConfig::from_env().context("Invalid producer configuration")?;
    info!("Catalog: {:?}", catalog);
    info!("Producer: {:?}", producer);

    let timeout = catalog.timeout;
    let repository = InMemoryItemRepository::from_config(catalog);
    let mut view_model = ItemsViewModel::new(GetItemsUseCase::new(Arc::new(repository)), producer);
    if let Some(timeout) = timeout {
        view_model = view_model.with_timeout(timeout);
    }

    let mut updates = view_model.subscribe();
    let watcher = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            info!("State changed: {}", display_text(&state));
        }
    });

    let state = view_model.load().await.context("Catalog load did not complete")?;
    drop(view_model);
    watcher.await.context("State watcher failed")?;

    let text = display_text(&state);
    let outcome = state
        .into_outcome()
        .context("Completed state expected")?
        .map_failure(|failure| failure.message());
    info!("Outcome: {}", serde_json::to_string(&outcome)?);
    println!("{}", text);

    Ok(())
}
