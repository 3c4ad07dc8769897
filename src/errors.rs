// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for outcome and producer operations

use std::any::Any;

use thiserror::Error;

/// A failure captured at a catching boundary
///
/// Produced by [`run_catching`](crate::outcome::run_catching),
/// [`Outcome::map_catching`](crate::Outcome::map_catching) and
/// [`Outcome::recover_catching`](crate::Outcome::recover_catching). Both
/// returned errors and unwinding panics end up here, so nothing raised inside
/// the guarded closure escapes to the caller.
#[derive(Debug, Error)]
pub enum CaughtError {
    /// The guarded closure returned an error
    #[error(transparent)]
    Raised(#[from] anyhow::Error),

    /// The guarded closure panicked
    #[error("panicked: {message}")]
    Panicked { message: String },
}

impl CaughtError {
    /// Build a caught error from a panic payload
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        Self::Panicked {
            message: panic_message(payload.as_ref()),
        }
    }

    /// Whether this error came from a panic rather than a returned error
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked { .. })
    }
}

/// Extract a readable message from a panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment value could not be parsed
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// Channel capacity cannot hold both producer notifications
    #[error("Channel capacity {0} is too small, at least 2 slots are required")]
    InvalidCapacity(usize),
}

/// Errors raised by spawned producers
#[derive(Debug, Error)]
pub enum ProducerError {
    /// Producer configuration was rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The producer was cancelled before it completed
    #[error("Producer {name} was cancelled")]
    Cancelled { name: String },

    /// The producer task panicked
    #[error("Producer {name} panicked: {message}")]
    Panicked { name: String, message: String },

    /// The producer stopped without emitting a completed state
    #[error("Producer {name} ended without a completed state")]
    Disconnected { name: String },
}

/// Result type for producer operations
pub type ProducerResult<T> = Result<T, ProducerError>;
