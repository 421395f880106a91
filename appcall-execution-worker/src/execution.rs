// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This module deals with executing application calls one after the other
//! on top of the final ledger, and with finalizing their changes.

use crate::application_call::application_call;
use crate::program::ProgramPreparer;
use crate::speculative_ledger::SpeculativeLedger;
use appcall_execution_exports::{
    ExecutionConfig, ExecutionError, ProgramConverter, StateEvaluator,
};
use appcall_ledger_exports::LedgerController;
use appcall_models::{ApplicationCallFields, ApplyData, TransactionHeader};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Execution state of a sequence of application calls
pub struct ExecutionState {
    /// shared access to the final ledger, written only by `finalize`
    final_ledger: Arc<RwLock<dyn LedgerController>>,
    /// changes staged by the calls executed since the last finalization
    speculative_ledger: SpeculativeLedger,
    /// program preparation
    preparer: ProgramPreparer,
    /// number of transactions executed so far
    txn_counter: u64,
}

impl ExecutionState {
    /// Creates a new execution state
    ///
    /// # Arguments
    /// * `config`: execution configuration
    /// * `final_ledger`: shared access to the final ledger
    /// * `converter`: bytecode converter for legacy programs
    /// * `txn_counter`: number of transactions already applied to the final ledger
    pub fn new(
        config: ExecutionConfig,
        final_ledger: Arc<RwLock<dyn LedgerController>>,
        converter: Box<dyn ProgramConverter>,
        txn_counter: u64,
    ) -> Self {
        ExecutionState {
            speculative_ledger: SpeculativeLedger::new(
                final_ledger.clone(),
                config.consensus_params.clone(),
            ),
            preparer: ProgramPreparer::new(&config, converter),
            final_ledger,
            txn_counter,
        }
    }

    /// Executes an application call.
    /// Either all its changes are staged or none of them.
    ///
    /// # Returns
    /// The effects record of the call
    pub fn execute_application_call(
        &mut self,
        call: &ApplicationCallFields,
        header: &TransactionHeader,
        evaluator: &mut dyn StateEvaluator,
    ) -> Result<ApplyData, ExecutionError> {
        // the counter is consumed even if the call fails
        let txn_counter = self.txn_counter;
        self.txn_counter = self.txn_counter.saturating_add(1);

        // save a snapshot of the staged changes to restore it if the call fails
        let snapshot = self.speculative_ledger.get_snapshot();

        let mut apply_data = ApplyData::default();
        match application_call(
            call,
            header,
            &mut self.speculative_ledger,
            &mut apply_data,
            txn_counter,
            evaluator,
            &self.preparer,
        ) {
            Ok(()) => {
                debug!(
                    "call {} from {} to app {} executed",
                    txn_counter, header.sender, call.application_id
                );
                Ok(apply_data)
            }
            Err(err) => {
                debug!(
                    "call {} from {} to app {} failed: {}",
                    txn_counter, header.sender, call.application_id, err
                );
                self.speculative_ledger.reset_to_snapshot(snapshot);
                Err(err)
            }
        }
    }

    /// Applies the changes staged since the last finalization to the final ledger
    pub fn finalize(&mut self) {
        let changes = self.speculative_ledger.take();
        if changes.is_empty() {
            return;
        }
        self.final_ledger.write().apply_changes(changes);
        debug!("staged changes applied to the final ledger");
    }

    /// Read access to the staged view of the ledger
    pub fn speculative_ledger(&self) -> &SpeculativeLedger {
        &self.speculative_ledger
    }

    /// Number of transactions executed so far
    pub fn txn_counter(&self) -> u64 {
        self.txn_counter
    }
}
