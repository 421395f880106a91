// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # Overview
//!
//! This crate provides the interfaces application call execution (appcall-execution-worker crate)
//! depends on besides the ledger: the program evaluator and the program converter,
//! together with the execution configuration and error types.
//!
//! # Architecture
//!
//! ## config.rs
//! Contains configuration parameters for the execution system.
//!
//! ## evaluator.rs
//! Defines the `StateEvaluator` and `ProgramConverter` traits.
//!
//! ## error.rs
//! Defines error types for the crate: policy failures (`ApplyError`) are kept apart
//! from the other execution failures so that callers can discard them selectively.
//!
//! ## Test exports
//!
//! When the crate feature `test-exports` is enabled, tooling useful for testing purposes is exported.
//! See test_exports/mod.rs for details.

#![warn(missing_docs)]

mod config;
mod error;
mod evaluator;

pub use config::ExecutionConfig;
pub use error::{ApplyError, ExecutionError};
#[cfg(any(test, feature = "test-exports"))]
pub use evaluator::MockProgramConverter;
pub use evaluator::{ProgramConverter, ProgramKind, StateEvaluator};

#[cfg(any(test, feature = "test-exports"))]
pub mod test_exports;
