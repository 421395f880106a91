// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This module exports the interfaces of the program evaluator and of the program converter

use crate::ExecutionError;
use appcall_ledger_exports::Balances;
use appcall_models::{AppIndex, EvalDelta, StateSchemas};
use displaydoc::Display;

/// The two programs of an application
#[derive(Clone, Copy, Display, Debug, PartialEq, Eq)]
pub enum ProgramKind {
    /// ApprovalProgram
    Approval,
    /// ClearStateProgram
    ClearState,
}

/// Interface of the program interpreter.
///
/// `init_ledger` is called once per application call, before any `check` or `eval`.
/// The ledger view is handed again to `eval` because the evaluator only borrows it for
/// the duration of one execution.
pub trait StateEvaluator {
    /// Prepares the evaluation context of the called application.
    /// `schemas` are empty if the application does not exist (anymore).
    fn init_ledger(
        &mut self,
        balances: &dyn Balances,
        app_idx: AppIndex,
        schemas: StateSchemas,
    ) -> Result<(), ExecutionError>;

    /// Statically checks a program
    ///
    /// # Returns
    /// The cost of the program
    fn check(&mut self, program: &[u8]) -> Result<u64, ExecutionError>;

    /// Runs a program
    ///
    /// # Returns
    /// Whether the program approved the call, and the key/value changes it declared
    fn eval(
        &mut self,
        program: &[u8],
        balances: &dyn Balances,
    ) -> Result<(bool, EvalDelta), ExecutionError>;
}

/// Interface of the bytecode version converter
#[cfg_attr(any(test, feature = "test-exports"), mockall::automock)]
pub trait ProgramConverter {
    /// Converts a program to another version
    fn convert(&self, program: &[u8], target_version: u8) -> Result<Vec<u8>, ExecutionError>;
}
