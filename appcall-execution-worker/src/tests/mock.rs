// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::{application_call, ProgramPreparer, SpeculativeLedger};
use appcall_execution_exports::test_exports::PassThroughConverter;
use appcall_execution_exports::{ExecutionConfig, ExecutionError, StateEvaluator};
use appcall_ledger_exports::{Balances, LedgerConfig, LedgerController, MockBalances};
use appcall_ledger_worker::test_exports::{get_initials, write_initial_ledger};
use appcall_ledger_worker::FinalLedger;
use appcall_models::{
    AccountRecord, Address, AppIndex, ApplicationCallFields, ApplyData, ConsensusParams,
    StateDelta, TransactionHeader, ValueDelta,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// Actors of the sample ledger
#[derive(Clone, Copy, Debug)]
pub struct Sample {
    /// creator of `app_idx`
    pub creator: Address,
    /// funded account without applications
    pub user: Address,
    /// application of the sample ledger
    pub app_idx: AppIndex,
}

/// Approval program of the sample application
pub const APPROVAL: [u8; 2] = [2, 0x20];
/// Clear-state program of the sample application
pub const CLEAR_STATE: [u8; 2] = [2, 0x21];

/// Final ledger loaded from the sample initial ledger file
pub fn get_final_ledger() -> (Arc<RwLock<FinalLedger>>, Sample) {
    let (initials, creator, app_idx) = get_initials();
    let file = write_initial_ledger(&initials);
    let mut ledger = FinalLedger::new(LedgerConfig {
        initial_ledger_path: file.path().to_path_buf(),
    });
    ledger
        .load_initial_ledger()
        .expect("could not load sample ledger");
    let sample = Sample {
        creator,
        user: Address::compute_from(b"user"),
        app_idx,
    };
    (Arc::new(RwLock::new(ledger)), sample)
}

/// Speculative view over the sample final ledger
pub fn get_speculative_ledger(consensus_params: ConsensusParams) -> (SpeculativeLedger, Sample) {
    let (final_ledger, sample) = get_final_ledger();
    (
        SpeculativeLedger::new(final_ledger, consensus_params),
        sample,
    )
}

/// Preparer with the default configuration and a pass-through converter
pub fn get_preparer() -> ProgramPreparer {
    ProgramPreparer::new(&ExecutionConfig::default(), Box::new(PassThroughConverter))
}

pub fn header(sender: Address) -> TransactionHeader {
    TransactionHeader { sender }
}

pub fn state_delta(entries: &[(&str, ValueDelta)]) -> StateDelta {
    entries
        .iter()
        .map(|(key, delta)| (key.as_bytes().to_vec(), delta.clone()))
        .collect()
}

/// Mock ledger view serving fixed records and the default consensus parameters.
/// Writes are not expected unless the test adds expectations for them.
pub fn get_mock_balances(records: Vec<AccountRecord>) -> MockBalances {
    let mut balances = MockBalances::new();
    balances
        .expect_consensus_params()
        .returning(ConsensusParams::default);
    balances.expect_get().returning(move |addr| {
        Ok(records
            .iter()
            .find(|record| record.address == *addr)
            .cloned()
            .unwrap_or_else(|| AccountRecord::new(*addr)))
    });
    balances
}

/// Applies a call on a ledger view with the default preparer
pub fn run_call(
    balances: &mut dyn Balances,
    call: &ApplicationCallFields,
    sender: Address,
    txn_counter: u64,
    evaluator: &mut dyn StateEvaluator,
) -> (Result<(), ExecutionError>, ApplyData) {
    let mut apply_data = ApplyData::default();
    let res = application_call(
        call,
        &header(sender),
        balances,
        &mut apply_data,
        txn_counter,
        evaluator,
        &get_preparer(),
    );
    (res, apply_data)
}
