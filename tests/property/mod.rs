// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! - `outcome_laws`: variant queries, functor laws, fold, catching boundaries
//! - `state_sequence`: producer sequences and the async-state lift

mod outcome_laws;
mod state_sequence;
