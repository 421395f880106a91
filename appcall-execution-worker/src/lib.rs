// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # General description
//!
//! The execution worker applies application call transactions to the ledger.
//!
//! A call is applied by `application_call` onto a `Balances` view: it creates the application if requested,
//! runs the approval program through the `StateEvaluator`, commits the key/value changes the program declared
//! and performs the lifecycle effect of the call (opt-in, close-out, clear-state, update, delete).
//! Either every change of a call is committed or none is.
//!
//! `ExecutionState` drives calls one at a time over a `SpeculativeLedger`, a copy-on-write view of the
//! final ledger, and resets the view when a call fails.
//!
//! # Architecture
//!
//! ## `execution.rs`
//! Transaction counter, snapshots, and finalization of the staged changes.
//!
//! ## `application_call.rs`
//! Entry point applying one call.
//!
//! ## `lifecycle.rs`
//! Creation, opt-in, clear-state, close-out, update and deletion of applications.
//!
//! ## `eval_delta.rs`
//! Two-phase commit of the changes declared by a program across the accounts it touched.
//!
//! ## `state_delta.rs`
//! Applies a set of key changes to one key/value store.
//!
//! ## `program.rs`
//! Conversion of legacy programs and the cost gate.
//!
//! ## `speculative_ledger.rs`
//! A `Balances` implementation staging writes on top of the final ledger.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod application_call;
mod eval_delta;
mod execution;
mod lifecycle;
mod program;
mod speculative_ledger;
mod state_delta;

pub use application_call::application_call;
pub use eval_delta::apply_eval_delta;
pub use execution::ExecutionState;
pub use lifecycle::get_app_params;
pub use program::{check_programs, ProgramPreparer};
pub use speculative_ledger::SpeculativeLedger;
pub use state_delta::apply_state_delta;

#[cfg(test)]
mod tests;
