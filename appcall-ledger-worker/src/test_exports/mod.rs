// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This module exposes useful tooling for testing.
//! It is only compiled and exported by the crate if the "test-exports" feature is enabled.
//!
//! # Architecture
//!
//! ## `bootstrap.rs`
//! Provides sample initial ledgers and writes them to temporary files.

mod bootstrap;

pub use bootstrap::*;
