// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! # Overview
//!
//! Shared data structures for application calls: addresses, account records,
//! application parameters and local states, key/value stores, the deltas
//! produced by program evaluation, and the transaction fields of a call.
//!
//! # Architecture
//!
//! ## `address.rs`
//! 32-byte account addresses with a base58check text form.
//!
//! ## `app.rs`
//! Application indices, state schemas, application parameters and local states.
//!
//! ## `state.rs`
//! Typed values and the key/value store, including the schema check.
//!
//! ## `delta.rs`
//! Value deltas, state deltas (with their validity check) and evaluation deltas.
//!
//! ## `account.rs`
//! Account records and creatable locators.
//!
//! ## `transaction.rs`
//! Application call transaction fields and the effects record.
//!
//! ## `config`
//! Hard-coded constants and consensus parameters.

#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

/// account records and creatables
pub mod account;
/// addresses
pub mod address;
/// application parameters, local states and schemas
pub mod app;
/// constants and consensus parameters
pub mod config;
/// evaluation deltas
pub mod delta;
/// models error
pub mod error;
/// typed values and key/value stores
pub mod state;
/// application call transaction fields
pub mod transaction;

pub use account::{AccountRecord, CreatableIndex, CreatableLocator, CreatableType};
pub use address::Address;
pub use app::{AppIndex, AppLocalState, AppParams, StateSchema, StateSchemas};
pub use config::ConsensusParams;
pub use delta::{DeltaAction, EvalDelta, StateDelta, ValueDelta};
pub use error::ModelsError;
pub use state::{KeyValue, StateValue};
pub use transaction::{ApplicationCallFields, ApplyData, OnCompletion, TransactionHeader};
