// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Async-State Sequences
//!
//! For any outcome, draining a producer yields exactly
//! `[Pending, Completed(outcome)]`, and lifting an outcome into an async state
//! keeps its variant.

use cim_outcome::config::ProducerConfig;
use cim_outcome::{produce, spawn_producer, AsyncState, Outcome};
use futures::StreamExt;
use proptest::prelude::*;

fn outcome() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        (-1_000i32..1_000).prop_map(Outcome::success),
        "[a-z]{0,8}".prop_map(Outcome::failure),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime")
}

proptest! {
    /// Property: inline producers emit exactly Pending then Completed
    #[test]
    fn prop_inline_sequence(o in outcome()) {
        let expected = o.clone();
        let states: Vec<_> = tokio_test::block_on(produce(async move { o }).collect());

        prop_assert_eq!(
            states,
            vec![AsyncState::Pending, AsyncState::Completed(expected)]
        );
    }

    /// Property: spawned producers emit exactly Pending then Completed
    #[test]
    fn prop_spawned_sequence(o in outcome()) {
        let expected = o.clone();
        let states: Vec<_> = runtime().block_on(async move {
            let handle = spawn_producer(async move { o }, &ProducerConfig::default())
                .expect("default config is valid");
            handle.collect().await
        });

        prop_assert_eq!(states.len(), 2);
        prop_assert!(states[0].is_loading());
        prop_assert_eq!(&states[1], &AsyncState::Completed(expected));
    }

    /// Property: the lift keeps the variant and only touches success values
    #[test]
    fn prop_lift_keeps_variant(o in outcome()) {
        let lifted = o.clone().into_async_state_with(|x| i64::from(x) * 2);

        prop_assert!(!lifted.is_loading());
        prop_assert_eq!(lifted.is_success(), o.is_success());
        prop_assert_eq!(lifted.data().copied(), o.value().map(|x| i64::from(*x) * 2));
        prop_assert_eq!(lifted.error(), o.error());
    }
}

#[test]
fn test_lift_examples() {
    let five: Outcome<i32, String> = Outcome::success(5);
    assert_eq!(five.clone().into_async_state(), AsyncState::Completed(Outcome::Success(5)));
    assert_eq!(
        five.into_async_state_with(|x| x * 2),
        AsyncState::Completed(Outcome::Success(10))
    );

    let failed: Outcome<i32, String> = Outcome::failure("e".to_string());
    assert_eq!(
        failed.into_async_state_with(|x| x * 2),
        AsyncState::Completed(Outcome::Failure("e".to_string()))
    );
}
