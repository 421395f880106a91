// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines all error types for the ledger system

use displaydoc::Display;
use thiserror::Error;

/// Ledger error
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// ledger read error: {0}
    ReadError(String),
    /// ledger write error: {0}
    WriteError(String),
    /// file error: {0}
    FileError(String),
    /// there was an inconsistency between containers: {0}
    ContainerInconsistency(String),
}
