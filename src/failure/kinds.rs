// Copyright (c) 2025 - Cowboy AI, Inc.
//! Concrete failure kinds used by consumers of the outcome model

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Failure;

/// Text used when no connectivity message is supplied
pub const NO_NETWORK_CONNECTION: &str = "No network connection";

/// Failure with an optional free-form message
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Error)]
#[error("{}", .message.as_deref().unwrap_or("Unknown failure"))]
pub struct MessageFailure {
    /// Optional description
    pub message: Option<String>,
}

impl MessageFailure {
    /// Create a failure with a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Create a failure without a message
    pub fn silent() -> Self {
        Self { message: None }
    }
}

impl Failure for MessageFailure {
    fn message(&self) -> Option<String> {
        self.message.clone()
    }
}

/// The device or host could not reach the network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct NetworkConnectionFailure {
    pub message: String,
}

impl NetworkConnectionFailure {
    /// Create a connectivity failure with a custom message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for NetworkConnectionFailure {
    fn default() -> Self {
        Self::new(NO_NETWORK_CONNECTION)
    }
}

impl Failure for NetworkConnectionFailure {
    fn message(&self) -> Option<String> {
        Some(self.message.clone())
    }
}

/// A remote service answered but refused the request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("Service failure{}{}",
    .status.map(|s| format!(" ({s})")).unwrap_or_default(),
    .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
pub struct ServiceFailure {
    /// Message reported by the service
    pub message: Option<String>,

    /// Status code reported by the service
    pub status: Option<u16>,
}

impl ServiceFailure {
    /// Create a service failure with a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            status: None,
        }
    }

    /// Attach a status code
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

impl Failure for ServiceFailure {
    fn message(&self) -> Option<String> {
        self.message.clone()
    }
}

/// The requested feature is switched off
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("Feature '{feature}' is disabled")]
pub struct FeatureDisabledFailure {
    pub feature: String,
}

impl FeatureDisabledFailure {
    pub fn new(feature: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
        }
    }
}

impl Failure for FeatureDisabledFailure {
    fn message(&self) -> Option<String> {
        Some(self.to_string())
    }
}
