// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Outcome
//!
//! These tests prove the algebraic properties of `Outcome` for arbitrary
//! payloads: queries are exclusive, `map` is a functor on the success channel,
//! `fold` runs exactly one branch, and catching boundaries never let a
//! failure escape.

use std::cell::Cell;

use anyhow::anyhow;
use cim_outcome::{run_catching, Outcome};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Generate outcomes of either variant
fn outcome() -> impl Strategy<Value = Outcome<i64, String>> {
    prop_oneof![
        (-1_000i64..1_000).prop_map(Outcome::success),
        "[a-z ]{0,16}".prop_map(Outcome::failure),
    ]
}

/// Small offsets and factors to avoid overflow
fn offset() -> impl Strategy<Value = i64> {
    -100i64..100
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: success(v) is a success and not a failure
    #[test]
    fn prop_success_queries(v in any::<i64>()) {
        let outcome: Outcome<i64, String> = Outcome::success(v);
        prop_assert!(outcome.is_success());
        prop_assert!(!outcome.is_failure());
        prop_assert_eq!(outcome.value(), Some(&v));
    }

    /// Property: failure(e) is a failure and not a success
    #[test]
    fn prop_failure_queries(e in ".*") {
        let outcome: Outcome<i64, String> = Outcome::failure(e.clone());
        prop_assert!(outcome.is_failure());
        prop_assert!(!outcome.is_success());
        prop_assert_eq!(outcome.error(), Some(&e));
    }

    /// Property: queries are mutually exclusive and exhaustive
    #[test]
    fn prop_queries_are_exclusive(o in outcome()) {
        prop_assert!(o.is_success() != o.is_failure());
        prop_assert!(o.value().is_some() != o.error().is_some());
    }

    /// Property: map (g . f) = map g . map f
    #[test]
    fn prop_map_composition(o in outcome(), a in offset(), b in offset()) {
        let f = |x: i64| x + a;
        let g = |x: i64| x * b;

        prop_assert_eq!(o.clone().map(f).map(g), o.map(|x| g(f(x))));
    }

    /// Property: map id = id
    #[test]
    fn prop_map_identity(o in outcome()) {
        prop_assert_eq!(o.clone().map(|x| x), o);
    }

    /// Property: map leaves failures untouched
    #[test]
    fn prop_map_preserves_failure(e in ".*", a in offset()) {
        let outcome: Outcome<i64, String> = Outcome::failure(e.clone());
        prop_assert_eq!(outcome.map(|x| x + a), Outcome::Failure(e));
    }

    /// Property: fold runs exactly one branch and returns its value
    #[test]
    fn prop_fold_is_exhaustive(o in outcome()) {
        let calls = Cell::new(0);
        let expected = if o.is_success() { "success" } else { "failure" };

        let result = o.fold(
            |_| { calls.set(calls.get() + 1); "success" },
            |_| { calls.set(calls.get() + 1); "failure" },
        );

        prop_assert_eq!(calls.get(), 1);
        prop_assert_eq!(result, expected);
    }

    /// Property: recover always yields a success
    #[test]
    fn prop_recover_always_succeeds(o in outcome()) {
        let recovered = o.clone().recover(|e| e.len() as i64);
        prop_assert!(recovered.is_success());
        if let Some(v) = o.value() {
            prop_assert_eq!(recovered.unwrap(), *v);
        }
    }

    /// Property: run_catching wraps a normal return as success
    #[test]
    fn prop_run_catching_normal_return(v in any::<i64>()) {
        let outcome = run_catching(|| Ok(v));
        prop_assert_eq!(outcome.into_value(), Some(v));
    }

    /// Property: run_catching never lets a returned error escape
    #[test]
    fn prop_run_catching_returned_error(message in "[a-z]{1,12}") {
        let outcome: Outcome<i64, _> = run_catching(|| Err(anyhow!(message.clone())));
        let error = outcome.into_error();
        prop_assert!(error.is_some());
        prop_assert_eq!(error.map(|e| e.to_string()), Some(message));
    }

    /// Property: on_success/on_failure return the outcome unchanged
    #[test]
    fn prop_hooks_are_transparent(o in outcome()) {
        let hooked = o.clone().on_success(|_| {}).on_failure(|_| {});
        prop_assert_eq!(hooked, o);
    }
}

#[test]
fn test_run_catching_contains_panics() {
    let outcome: Outcome<i64, _> = run_catching(|| panic!("raised inside block"));
    let error = outcome.into_error().expect("panic must become a failure");
    assert!(error.is_panic());
}
