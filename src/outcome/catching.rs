// Copyright (c) 2025 - Cowboy AI, Inc.
//! Catching boundaries
//!
//! These are the only places where a failure raised inside user code is
//! turned into a value. Returned `anyhow` errors and unwinding panics both
//! become [`CaughtError`].

use std::panic::{self, AssertUnwindSafe};

use tracing::warn;

use super::Outcome;
use crate::errors::CaughtError;

/// Run `block`, capturing anything it raises as a failure
///
/// A normal return becomes `Success`. A returned error or a panic becomes
/// `Failure(CaughtError)`; neither propagates past this call.
///
/// # Examples
///
/// ```rust
/// use cim_outcome::outcome::run_catching;
///
/// let parsed = run_catching(|| Ok("42".parse::<i32>()?));
/// assert_eq!(parsed.into_value(), Some(42));
///
/// let failed = run_catching(|| Ok("forty-two".parse::<i32>()?));
/// assert!(failed.is_failure());
/// ```
pub fn run_catching<T, F>(block: F) -> Outcome<T, CaughtError>
where
    F: FnOnce() -> anyhow::Result<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(block)) {
        Ok(Ok(value)) => Outcome::Success(value),
        Ok(Err(error)) => Outcome::Failure(CaughtError::Raised(error)),
        Err(payload) => {
            let error = CaughtError::from_panic(payload);
            warn!("Caught panic at outcome boundary: {}", error);
            Outcome::Failure(error)
        }
    }
}

impl<T> Outcome<T, CaughtError> {
    /// Like [`Outcome::map`], but failures raised by `transform` are caught
    pub fn map_catching<U, F>(self, transform: F) -> Outcome<U, CaughtError>
    where
        F: FnOnce(T) -> anyhow::Result<U>,
    {
        self.and_then(|value| run_catching(|| transform(value)))
    }
}

impl<T, E> Outcome<T, E> {
    /// Like [`Outcome::recover`], but failures raised by `transform` are
    /// caught and re-wrapped as a failure
    pub fn recover_catching<F>(self, transform: F) -> Outcome<T, CaughtError>
    where
        F: FnOnce(E) -> anyhow::Result<T>,
    {
        self.fold(Outcome::Success, |error| run_catching(|| transform(error)))
    }
}
