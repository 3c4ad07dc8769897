// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catalog - Layered Consumer of the Outcome Model
//!
//! A deliberately small item catalog wired the way the model is meant to be
//! consumed:
//!
//! ```text
//! ItemsViewModel            (presentation: latest AsyncState + display text)
//!     ↓ spawn_producer
//! GetItemsUseCase           (domain: UseCase over the repository)
//!     ↓
//! ItemRepository            (domain interface)
//!     ↓
//! InMemoryItemRepository    (data: hardcoded items or configured failure)
//! ```
//!
//! Every layer speaks [`Outcome`](crate::Outcome); only the view model deals
//! in [`AsyncState`](crate::AsyncState).

pub mod data;
pub mod domain;
pub mod presentation;

pub use data::{default_items, InMemoryItemRepository};
pub use domain::{GetItemsUseCase, Item, ItemRepository, ItemsOutcome};
pub use presentation::{
    display_text, ItemsState, ItemsViewModel, CONNECTIVITY_FAILURE_TEXT, EMPTY_CATALOG_TEXT,
    LOADING_TEXT,
};
