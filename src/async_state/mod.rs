// Copyright (c) 2025 - Cowboy AI, Inc.
//! AsyncState - Lifecycle of a Single Asynchronous Operation
//!
//! An [`AsyncState<T, F>`] decouples "is it still running" from "what did it
//! produce". Observed over time, one operation yields at most one `Pending`
//! followed by at most one `Completed`:
//!
//! ```text
//! Time:   ──────────────────────────────→
//! State:  Pending ─────────● Completed(outcome)
//! ```
//!
//! | State                       | is_loading | is_success | is_failure | data | error |
//! |-----------------------------|------------|------------|------------|------|-------|
//! | `Pending`                   | true       | false      | false      | None | None  |
//! | `Completed(Success(v))`     | false      | true       | false      | v    | None  |
//! | `Completed(Failure(e))`     | false      | false      | true       | None | e     |
//!
//! All accessors are computed from the current variant on demand.
//!
//! # Example
//!
//! ```rust
//! use cim_outcome::{AsyncState, Outcome};
//!
//! let state: AsyncState<i32, String> = Outcome::success(5).into_async_state_with(|x| x * 2);
//! assert_eq!(state.data(), Some(&10));
//! assert!(!state.is_loading());
//! ```

use crate::failure::SharedFailure;
use crate::outcome::Outcome;

/// Pending or completed state of one asynchronous operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncState<T, F = SharedFailure> {
    /// The operation has not resolved yet
    Pending,

    /// The operation resolved to an outcome
    Completed(Outcome<T, F>),
}

impl<T, F> Default for AsyncState<T, F> {
    fn default() -> Self {
        Self::Pending
    }
}

impl<T, F> AsyncState<T, F> {
    /// Whether the operation is still running
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether the operation resolved, successfully or not
    pub fn is_completed(&self) -> bool {
        !self.is_loading()
    }

    /// Whether the operation completed with a success value
    pub fn is_success(&self) -> bool {
        self.outcome().is_some_and(Outcome::is_success)
    }

    /// Whether the operation completed with a failure value
    pub fn is_failure(&self) -> bool {
        self.outcome().is_some_and(Outcome::is_failure)
    }

    /// Resolved outcome, if any
    pub fn outcome(&self) -> Option<&Outcome<T, F>> {
        match self {
            Self::Pending => None,
            Self::Completed(outcome) => Some(outcome),
        }
    }

    /// Success value when completed successfully
    pub fn data(&self) -> Option<&T> {
        self.outcome().and_then(Outcome::value)
    }

    /// Failure value when completed with a failure
    pub fn error(&self) -> Option<&F> {
        self.outcome().and_then(Outcome::error)
    }

    /// Take the resolved outcome, if any
    pub fn into_outcome(self) -> Option<Outcome<T, F>> {
        match self {
            Self::Pending => None,
            Self::Completed(outcome) => Some(outcome),
        }
    }

    /// Take the success value when completed successfully
    pub fn into_data(self) -> Option<T> {
        self.into_outcome().and_then(Outcome::into_value)
    }

    /// Run `action` only when completed successfully
    pub fn on_success<A>(self, action: A) -> Self
    where
        A: FnOnce(&T),
    {
        if let Some(value) = self.data() {
            action(value);
        }
        self
    }

    /// Run `action` only when completed with a failure
    pub fn on_failure<A>(self, action: A) -> Self
    where
        A: FnOnce(&F),
    {
        if let Some(error) = self.error() {
            action(error);
        }
        self
    }

    /// Transform the success value of a completed state
    pub fn map<U, M>(self, transform: M) -> AsyncState<U, F>
    where
        M: FnOnce(T) -> U,
    {
        match self {
            Self::Pending => AsyncState::Pending,
            Self::Completed(outcome) => AsyncState::Completed(outcome.map(transform)),
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Lift this outcome into a completed async state
    pub fn into_async_state(self) -> AsyncState<T, E> {
        AsyncState::Completed(self)
    }

    /// Lift this outcome into a completed async state, transforming the
    /// success value on the way
    pub fn into_async_state_with<U, M>(self, transform: M) -> AsyncState<U, E>
    where
        M: FnOnce(T) -> U,
    {
        AsyncState::Completed(self.map(transform))
    }
}

impl<T, F> From<Outcome<T, F>> for AsyncState<T, F> {
    fn from(outcome: Outcome<T, F>) -> Self {
        outcome.into_async_state()
    }
}
