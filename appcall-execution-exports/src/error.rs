// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! this file defines all possible execution error categories

use crate::evaluator::ProgramKind;
use appcall_ledger_exports::LedgerError;
use appcall_models::{Address, AppIndex, ModelsError};
use displaydoc::Display;
use thiserror::Error;

/// Policy failures: the call breaks a ledger rule but the ledger itself is sound.
///
/// They fail the transaction, except while committing the delta of a clear-state
/// program where they only cause the delta to be discarded.
#[non_exhaustive]
#[derive(Clone, Display, Error, Debug, PartialEq, Eq)]
pub enum ApplyError {
    /// cannot apply GlobalState delta: {0}
    InvalidGlobalDelta(String),
    /// GlobalState for app {app} would use too much space: {reason}
    GlobalSchemaViolation {
        /// application
        app: AppIndex,
        /// violation details
        reason: String,
    },
    /// duplicate LocalState delta for {0}
    DuplicateLocalDelta(Address),
    /// got zero-length delta for {0}, not allowed
    ZeroLengthLocalDelta(Address),
    /// cannot apply LocalState delta for {addr}: {reason}
    InvalidLocalDelta {
        /// account
        addr: Address,
        /// validation details
        reason: String,
    },
    /// LocalState for {addr} for app {app} would use too much space: {reason}
    LocalSchemaViolation {
        /// account
        addr: Address,
        /// application
        app: AppIndex,
        /// violation details
        reason: String,
    },
    /// account {addr} is not opted in to app {app}
    NotOptedIn {
        /// account
        addr: Address,
        /// application
        app: AppIndex,
    },
    /// account {addr} has already opted in to app {app}
    AlreadyOptedIn {
        /// account
        addr: Address,
        /// application
        app: AppIndex,
    },
    /// cannot create app for {creator}: max created apps per acct is {max}
    MaxAppsCreated {
        /// would-be creator
        creator: Address,
        /// limit
        max: usize,
    },
    /// cannot opt in app {app} for {addr}: max opted-in apps per acct is {max}
    MaxAppsOptedIn {
        /// account
        addr: Address,
        /// application
        app: AppIndex,
        /// limit
        max: usize,
    },
    /// only clearing out is supported for applications that do not exist (app {0})
    AppDoesNotExist(AppIndex),
    /// {kind} too resource intensive. Cost is {cost}, max {max}
    ProgramTooCostly {
        /// program
        kind: ProgramKind,
        /// static cost
        cost: u64,
        /// limit
        max: u64,
    },
    /// program version {0} is obsolete
    ObsoleteProgram(u8),
}

/// Errors of the execution component.
#[non_exhaustive]
#[derive(Clone, Display, Error, Debug)]
pub enum ExecutionError {
    /// {0}
    ApplyError(#[from] ApplyError),
    /// ledger error: {0}
    LedgerError(#[from] LedgerError),
    /// models error: {0}
    ModelsError(#[from] ModelsError),
    /// check failed on {kind}: {reason}
    CheckError {
        /// program
        kind: ProgramKind,
        /// evaluator message
        reason: String,
    },
    /// program evaluation error: {0}
    EvalError(String),
    /// program conversion error: {0}
    ConversionError(String),
    /// transaction rejected by ApprovalProgram
    Rejected,
}

impl ExecutionError {
    /// Whether the error is a policy failure rather than a fault or a program outcome
    pub fn is_apply_error(&self) -> bool {
        matches!(self, ExecutionError::ApplyError(_))
    }
}
