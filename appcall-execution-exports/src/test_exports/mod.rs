// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This module exposes useful tooling for testing.
//! It is only compiled and exported by the crate if the "test-exports" feature is enabled.
//!
//! # Architecture
//!
//! ## config.rs
//! Provides a default execution configuration for testing.
//!
//! ## evaluator.rs
//! Provides a scripted `StateEvaluator` and a pass-through `ProgramConverter`.

mod config;
mod evaluator;

pub use evaluator::*;
