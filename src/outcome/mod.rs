// Copyright (c) 2025 - Cowboy AI, Inc.
//! Outcome - Result of a Fallible Computation
//!
//! An [`Outcome<T, E>`] holds either a success value of type `T` or a
//! failure value of type `E`. It is a plain immutable value: every combinator
//! consumes the outcome and returns a new one, so there is nothing to keep in
//! sync between holders.
//!
//! # Elimination
//!
//! [`Outcome::fold`] is the canonical eliminator. Exactly one of the two
//! functions runs and its result becomes the result of the fold. The other
//! combinators are expressed through it.
//!
//! ```text
//! fold : Outcome<T, E> → (T → R) → (E → R) → R
//! ```
//!
//! # Functor Laws
//!
//! `map` satisfies the usual laws on the success channel and leaves failures
//! untouched:
//!
//! ```text
//! map id = id
//! map (g . f) = map g . map f
//! ```
//!
//! # Catching vs. Propagating
//!
//! `map`, `recover` and the `on_*` hooks never catch anything: a panic inside
//! the supplied closure unwinds through them. Catching is opt-in through
//! [`run_catching`], [`Outcome::map_catching`] and
//! [`Outcome::recover_catching`], which reify both returned errors and panics
//! as [`CaughtError`](crate::errors::CaughtError).
//!
//! # Example
//!
//! ```rust
//! use cim_outcome::Outcome;
//!
//! let parsed: Outcome<i32, String> = Outcome::success(21);
//! let doubled = parsed.map(|x| x * 2);
//!
//! let text = doubled.fold(|v| format!("value {v}"), |e| format!("error {e}"));
//! assert_eq!(text, "value 42");
//! ```

pub mod catching;

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::failure::{Failure, SharedFailure};

pub use catching::run_catching;

/// Success value or failure value, never both
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    /// The computation produced a value
    Success(T),

    /// The computation failed
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Build a successful outcome
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Build a failed outcome
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Whether this outcome holds a success value
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether this outcome holds a failure value
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow both channels
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Apply exactly one of two functions, unifying both channels
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cim_outcome::Outcome;
    ///
    /// let failed: Outcome<u8, &str> = Outcome::failure("offline");
    /// assert_eq!(failed.fold(|_| 0, |e| e.len()), 7);
    /// ```
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Success payload, if any
    pub fn value(&self) -> Option<&T> {
        self.as_ref().into_value()
    }

    /// Failure payload, if any
    pub fn error(&self) -> Option<&E> {
        self.as_ref().into_error()
    }

    /// Take the success payload, discarding a failure
    pub fn into_value(self) -> Option<T> {
        self.fold(Some, |_| None)
    }

    /// Take the failure payload, discarding a success
    pub fn into_error(self) -> Option<E> {
        self.fold(|_| None, Some)
    }

    /// Transform the success value
    ///
    /// Failures pass through unchanged. A panic inside `transform` is not
    /// caught; use [`Outcome::map_catching`] to opt into that.
    pub fn map<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.fold(|value| Outcome::Success(transform(value)), Outcome::Failure)
    }

    /// Transform the failure value
    pub fn map_failure<G, F>(self, transform: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        self.fold(Outcome::Success, |error| Outcome::Failure(transform(error)))
    }

    /// Chain another fallible step on the success value
    pub fn and_then<U, F>(self, next: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.fold(next, Outcome::Failure)
    }

    /// Turn a failure into a success value
    ///
    /// The returned outcome can no longer fail, which the `Infallible`
    /// failure channel records in the type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cim_outcome::Outcome;
    ///
    /// let failed: Outcome<usize, &str> = Outcome::failure("four");
    /// assert_eq!(failed.recover(|e| e.len()).unwrap(), 4);
    /// ```
    pub fn recover<F>(self, transform: F) -> Outcome<T, Infallible>
    where
        F: FnOnce(E) -> T,
    {
        Outcome::Success(self.get_or_else(transform))
    }

    /// Success value, or a value computed from the failure
    pub fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.fold(|value| value, fallback)
    }

    /// Run a side effect on the success value, returning the outcome unchanged
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Run a side effect on the failure value, returning the outcome unchanged
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    /// Convert into a standard `Result`
    pub fn into_result(self) -> Result<T, E> {
        self.fold(Ok, Err)
    }

    /// Erase a concrete failure kind into a [`SharedFailure`]
    pub fn into_shared(self) -> Outcome<T, SharedFailure>
    where
        E: Failure + 'static,
    {
        self.map_failure(crate::failure::shared)
    }
}

impl<T> Outcome<T, Infallible> {
    /// Extract the success value of an outcome that cannot fail
    ///
    /// Only available when the failure channel is uninhabited, so the call
    /// can never observe a failure.
    pub fn unwrap(self) -> T {
        self.fold(|value| value, |never| match never {})
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
