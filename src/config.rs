// Copyright (c) 2025 - Cowboy AI, Inc.
//! Configuration for producers and the catalog consumer
//!
//! Both configurations have sensible defaults and can be overridden from the
//! environment:
//!
//! | Variable                       | Field                             |
//! |--------------------------------|-----------------------------------|
//! | `CIM_OUTCOME_PRODUCER_NAME`    | [`ProducerConfig::name`]          |
//! | `CIM_OUTCOME_CHANNEL_CAPACITY` | [`ProducerConfig::channel_capacity`] |
//! | `CIM_OUTCOME_LATENCY_MS`       | [`CatalogConfig::latency`]        |
//! | `CIM_OUTCOME_TIMEOUT_MS`       | [`CatalogConfig::timeout`]        |
//! | `CIM_OUTCOME_FAIL_WITH`        | [`CatalogConfig::fail_with`]      |

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Smallest channel that holds both producer notifications
pub const MIN_CHANNEL_CAPACITY: usize = 2;

/// Configuration for spawned producers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerConfig {
    /// Name used in logs and errors
    pub name: String,

    /// Capacity of the state channel
    pub channel_capacity: usize,
}

impl ProducerConfig {
    /// Create a configuration with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the channel capacity
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }

    /// Check the configuration can carry a full state sequence
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity < MIN_CHANNEL_CAPACITY {
            return Err(ConfigError::InvalidCapacity(self.channel_capacity));
        }
        Ok(())
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            name: lookup("CIM_OUTCOME_PRODUCER_NAME").unwrap_or(defaults.name),
            channel_capacity: parse_var(&lookup, "CIM_OUTCOME_CHANNEL_CAPACITY")?
                .unwrap_or(defaults.channel_capacity),
        };

        config.validate()?;
        Ok(config)
    }
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            name: "cim-outcome-producer".to_string(),
            channel_capacity: MIN_CHANNEL_CAPACITY,
        }
    }
}

/// Configuration for the in-memory catalog
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Simulated latency before items are returned
    pub latency: Duration,

    /// Deadline for a catalog load
    pub timeout: Option<Duration>,

    /// Connectivity failure message to return instead of items
    pub fail_with: Option<String>,
}

impl CatalogConfig {
    /// Set the simulated latency
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Set the load deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Make the catalog fail with a connectivity message
    pub fn failing_with(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let latency = parse_var::<u64, _>(&lookup, "CIM_OUTCOME_LATENCY_MS")?
            .map(Duration::from_millis)
            .unwrap_or_default();
        let timeout = parse_var::<u64, _>(&lookup, "CIM_OUTCOME_TIMEOUT_MS")?
            .map(Duration::from_millis);
        let fail_with = lookup("CIM_OUTCOME_FAIL_WITH").filter(|s| !s.is_empty());

        Ok(Self {
            latency,
            timeout,
            fail_with,
        })
    }
}

fn parse_var<V, L>(lookup: &L, key: &str) -> Result<Option<V>, ConfigError>
where
    V: FromStr,
    V::Err: std::fmt::Display,
    L: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|err: V::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw.clone(),
                reason: err.to_string(),
            }),
    }
}
