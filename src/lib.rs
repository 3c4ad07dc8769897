// Copyright (c) 2025 - Cowboy AI, Inc.
//! Outcome and async-state modeling for the Composable Information Machine
//!
//! This crate provides two small value types and the producer contract that
//! ties them together:
//!
//! - [`Outcome<T, E>`]: success value or failure value, with combinators that
//!   keep the variant without manual branching
//! - [`AsyncState<T, F>`]: `Pending` or `Completed(outcome)`, for observing a
//!   single asynchronous operation over time
//! - [`producer`]: single-shot operations emitted as `[Pending, Completed]`
//!
//! ```text
//! caller ──▶ producer ──▶ Pending ──▶ (work) ──▶ Completed(Outcome) ──▶ observer
//! ```
//!
//! The [`catalog`] module is a layered consumer (repository, use case, view
//! model) built on top of the model.

pub mod async_state;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod failure;
pub mod logging;
pub mod outcome;
pub mod producer;

// Re-export commonly used types
pub use async_state::AsyncState;
pub use errors::{CaughtError, ConfigError, ProducerError, ProducerResult};
pub use failure::{Failure, SharedFailure};
pub use outcome::{run_catching, Outcome};
pub use producer::{produce, spawn_producer, ProducerHandle, UseCase};
