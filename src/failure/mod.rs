// Copyright (c) 2025 - Cowboy AI, Inc.
//! Failure Capability
//!
//! Anything placed in the failure channel of an [`Outcome`](crate::Outcome)
//! consumed by observers only needs one capability: an optional
//! human-readable message. The [`Failure`] trait expresses that capability
//! and nothing more.
//!
//! # Open Taxonomy
//!
//! The core never enumerates failure kinds. Concrete kinds are independent
//! extensions layered on top:
//!
//! ```text
//! Failure
//!   ├── MessageFailure            (plain message)
//!   ├── NetworkConnectionFailure  (no connectivity)
//!   ├── ServiceFailure            (remote service rejected the call)
//!   ├── FeatureDisabledFailure    (feature switched off)
//!   └── CaughtError               (captured error or panic)
//! ```
//!
//! Heterogeneous failures travel as [`SharedFailure`], a reference-counted
//! trait object, which keeps async states cheap to clone across observers.
//!
//! # Example
//!
//! ```rust
//! use cim_outcome::failure::{shared, Failure, NetworkConnectionFailure};
//!
//! let failure = shared(NetworkConnectionFailure::default());
//! assert_eq!(failure.message().as_deref(), Some("No network connection"));
//! ```

pub mod kinds;

use std::convert::Infallible;
use std::fmt::Debug;
use std::sync::Arc;

use crate::errors::CaughtError;

pub use kinds::{
    FeatureDisabledFailure, MessageFailure, NetworkConnectionFailure, ServiceFailure,
};

/// Capability shared by every failure value
pub trait Failure: Debug + Send + Sync {
    /// Human-readable description, if the failure carries one
    fn message(&self) -> Option<String>;
}

/// Type-erased failure shared between observers
pub type SharedFailure = Arc<dyn Failure>;

/// Erase a concrete failure into a [`SharedFailure`]
pub fn shared<F: Failure + 'static>(failure: F) -> SharedFailure {
    Arc::new(failure)
}

impl<F: Failure + ?Sized> Failure for Arc<F> {
    fn message(&self) -> Option<String> {
        (**self).message()
    }
}

impl<F: Failure + ?Sized> Failure for Box<F> {
    fn message(&self) -> Option<String> {
        (**self).message()
    }
}

impl<F: Failure + ?Sized> Failure for &F {
    fn message(&self) -> Option<String> {
        (**self).message()
    }
}

impl Failure for String {
    fn message(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl Failure for str {
    fn message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl Failure for Infallible {
    fn message(&self) -> Option<String> {
        match *self {}
    }
}

impl Failure for CaughtError {
    fn message(&self) -> Option<String> {
        Some(self.to_string())
    }
}
