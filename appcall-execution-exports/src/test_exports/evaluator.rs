// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Scripted evaluator and converter

use crate::{ExecutionError, ProgramConverter, StateEvaluator};
use appcall_ledger_exports::Balances;
use appcall_models::{AppIndex, EvalDelta, StateSchemas};
use std::collections::HashMap;

/// Cost reported by `TestStateEvaluator::check` for programs without a configured cost
pub const DEFAULT_TEST_PROGRAM_COST: u64 = 1;

/// What a scripted program does when evaluated
#[derive(Clone, Debug)]
pub enum EvalOutcome {
    /// approves the call and declares a delta
    Approve(EvalDelta),
    /// completes without approving
    Reject,
    /// fails with an evaluation error
    Fail(String),
}

/// `StateEvaluator` whose programs are scripted by their bytes.
/// Programs without a script approve with an empty delta.
#[derive(Default, Debug)]
pub struct TestStateEvaluator {
    /// scripted outcomes
    pub outcomes: HashMap<Vec<u8>, EvalOutcome>,
    /// scripted costs
    pub costs: HashMap<Vec<u8>, u64>,
    /// programs failing their static check
    pub invalid: Vec<Vec<u8>>,
    /// every `init_ledger` call received
    pub inits: Vec<(AppIndex, StateSchemas)>,
    /// every program evaluated, in order
    pub evaluated: Vec<Vec<u8>>,
}

impl TestStateEvaluator {
    /// Creates an evaluator without scripts
    pub fn new() -> Self {
        Default::default()
    }

    /// Scripts the outcome of a program
    pub fn with_outcome(mut self, program: &[u8], outcome: EvalOutcome) -> Self {
        self.outcomes.insert(program.to_vec(), outcome);
        self
    }

    /// Scripts the cost of a program
    pub fn with_cost(mut self, program: &[u8], cost: u64) -> Self {
        self.costs.insert(program.to_vec(), cost);
        self
    }

    /// Makes the static check of a program fail
    pub fn with_invalid(mut self, program: &[u8]) -> Self {
        self.invalid.push(program.to_vec());
        self
    }
}

impl StateEvaluator for TestStateEvaluator {
    fn init_ledger(
        &mut self,
        _balances: &dyn Balances,
        app_idx: AppIndex,
        schemas: StateSchemas,
    ) -> Result<(), ExecutionError> {
        self.inits.push((app_idx, schemas));
        Ok(())
    }

    fn check(&mut self, program: &[u8]) -> Result<u64, ExecutionError> {
        if self.invalid.iter().any(|p| p == program) {
            return Err(ExecutionError::EvalError("invalid program".into()));
        }
        Ok(self
            .costs
            .get(program)
            .copied()
            .unwrap_or(DEFAULT_TEST_PROGRAM_COST))
    }

    fn eval(
        &mut self,
        program: &[u8],
        _balances: &dyn Balances,
    ) -> Result<(bool, EvalDelta), ExecutionError> {
        self.evaluated.push(program.to_vec());
        match self.outcomes.get(program) {
            Some(EvalOutcome::Approve(delta)) => Ok((true, delta.clone())),
            Some(EvalOutcome::Reject) => Ok((false, EvalDelta::default())),
            Some(EvalOutcome::Fail(msg)) => Err(ExecutionError::EvalError(msg.clone())),
            None => Ok((true, EvalDelta::default())),
        }
    }
}

/// Converter that tags converted programs with the target version and keeps the rest of the bytes
#[derive(Default, Debug, Clone, Copy)]
pub struct PassThroughConverter;

impl ProgramConverter for PassThroughConverter {
    fn convert(&self, program: &[u8], target_version: u8) -> Result<Vec<u8>, ExecutionError> {
        let mut converted = program.to_vec();
        if let Some(version) = converted.first_mut() {
            *version = target_version;
        }
        Ok(converted)
    }
}
