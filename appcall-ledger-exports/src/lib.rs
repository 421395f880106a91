// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # General description
//!
//! This crate defines the contracts between application call execution and the ledger:
//! * `Balances`: the copy-on-write view of account records an application call reads and writes;
//! * `LedgerController`: the final ledger the view is layered on;
//! * `LedgerChanges`: the staged writes of a view, which can be combined and applied to the final ledger.
//!
//! # Architecture
//!
//! ## `balances.rs`
//! The storage interface consumed by application call execution.
//!
//! ## `controller.rs`
//! The interface of the final ledger.
//!
//! ## `ledger_changes.rs`
//! Represents a list of changes to account records and creatables.
//!
//! ## `types.rs`
//! Generic change primitives.
//!
//! ## Test exports
//!
//! When the crate feature `test-exports` is enabled, `MockBalances` is exported.

#![warn(missing_docs)]

mod balances;
mod config;
mod controller;
mod error;
mod ledger_changes;
mod types;

#[cfg(any(test, feature = "test-exports"))]
pub use balances::MockBalances;
pub use balances::Balances;
pub use config::LedgerConfig;
pub use controller::LedgerController;
pub use error::LedgerError;
pub use ledger_changes::LedgerChanges;
pub use types::{Applicable, SetOrDelete};
