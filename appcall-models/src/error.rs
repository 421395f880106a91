// Copyright (c) 2022 MASSA LABS <info@massa.net>

use displaydoc::Display;
use thiserror::Error;

/// Errors of the models crate
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelsError {
    /// unknown delta action {0}
    InvalidDeltaAction(u8),
    /// invalid application action {0}
    InvalidOnCompletion(u64),
    /// cannot load account[{index}] of {count}
    InvalidAccountIndex {
        /// requested account index
        index: u64,
        /// number of accounts referenced by the transaction
        count: usize,
    },
    /// address parse error: {0}
    AddressParseError(String),
    /// invalid state delta: {0}
    InvalidDelta(String),
    /// schema violation: {0}
    SchemaViolation(String),
}
