// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # General description
//!
//! This crate implements the final ledger matching addresses to their account records,
//! and indexing the creator of every creatable.
//!
//! The final ledger is only written by applying `LedgerChanges` produced by
//! a speculative view (see the appcall-execution-worker crate).
//!
//! # Architecture
//!
//! ## `ledger.rs`
//! Defines the `FinalLedger`, bootstrapped from an initial ledger file.
//!
//! ## Test exports
//!
//! When the crate feature `test-exports` is enabled, tooling useful for testing purposes is exported.
//! See `test_exports/mod.rs` for details.

#![warn(missing_docs)]

mod ledger;

pub use ledger::FinalLedger;

#[cfg(any(test, feature = "test-exports"))]
pub mod test_exports;
