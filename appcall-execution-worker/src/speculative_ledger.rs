// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! The speculative ledger represents the state of the ledger while calls are being executed.
//! It never actually writes to the final ledger
//! but keeps track of the changes that were applied to it since its creation.

use appcall_ledger_exports::{Balances, LedgerChanges, LedgerController, LedgerError};
use appcall_models::{
    AccountRecord, Address, ConsensusParams, CreatableIndex, CreatableLocator, CreatableType,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// The `SpeculativeLedger` contains a thread-safe shared reference to the final ledger (read-only)
/// and the list of changes that were applied on top of it since its creation.
/// It makes it possible to transparently manipulate a virtual ledger
/// while never writing in the final ledger.
pub struct SpeculativeLedger {
    /// Thread-safe shared access to the final ledger. For reading only.
    final_ledger: Arc<RwLock<dyn LedgerController>>,

    /// list of ledger changes that were applied to this `SpeculativeLedger` since its creation
    added_changes: LedgerChanges,

    /// consensus parameters handed to the users of the view
    consensus_params: ConsensusParams,
}

impl SpeculativeLedger {
    /// creates a new `SpeculativeLedger`
    ///
    /// # Arguments
    /// * `final_ledger`: thread-safe shared access to the final ledger (for reading only)
    /// * `consensus_params`: consensus parameters in effect
    pub fn new(
        final_ledger: Arc<RwLock<dyn LedgerController>>,
        consensus_params: ConsensusParams,
    ) -> Self {
        SpeculativeLedger {
            final_ledger,
            added_changes: Default::default(),
            consensus_params,
        }
    }

    /// Returns the changes caused to the `SpeculativeLedger` since its creation,
    /// and resets their local value to nothing.
    pub fn take(&mut self) -> LedgerChanges {
        std::mem::take(&mut self.added_changes)
    }

    /// Takes a snapshot (clone) of the changes caused to the `SpeculativeLedger` since its creation
    pub fn get_snapshot(&self) -> LedgerChanges {
        self.added_changes.clone()
    }

    /// Resets the `SpeculativeLedger` to a snapshot (see `get_snapshot` method)
    pub fn reset_to_snapshot(&mut self, snapshot: LedgerChanges) {
        self.added_changes = snapshot;
    }

    /// Gets the effective record of an address
    ///
    /// # Returns
    /// `Some(AccountRecord)` if the address was found, otherwise None
    pub fn get_account(&self, addr: &Address) -> Option<AccountRecord> {
        // try to read from added changes > final ledger
        self.added_changes
            .get_account_or_else(addr, || self.final_ledger.read().get_account(addr))
    }

    /// Gets the minimum balance an address must hold, given the applications it created or opted into
    pub fn get_min_balance(&self, addr: &Address) -> u64 {
        self.get_account(addr)
            .unwrap_or_else(|| AccountRecord::new(*addr))
            .min_balance(&self.consensus_params)
    }
}

impl Balances for SpeculativeLedger {
    fn get_creator(
        &self,
        index: CreatableIndex,
        ctype: CreatableType,
    ) -> Result<Option<Address>, LedgerError> {
        let locator = match self.added_changes.get_creatable(&index) {
            Some(staged) => staged,
            None => self.final_ledger.read().get_creatable(&index),
        };
        Ok(locator
            .filter(|locator| locator.ctype == ctype)
            .map(|locator| locator.creator))
    }

    fn get(&self, addr: &Address) -> Result<AccountRecord, LedgerError> {
        Ok(self
            .get_account(addr)
            .unwrap_or_else(|| AccountRecord::new(*addr)))
    }

    fn put(&mut self, record: AccountRecord) -> Result<(), LedgerError> {
        self.added_changes.set_account(record);
        Ok(())
    }

    fn put_with_creatable(
        &mut self,
        record: AccountRecord,
        created: Option<CreatableLocator>,
        deleted: Option<CreatableLocator>,
    ) -> Result<(), LedgerError> {
        self.added_changes.set_account(record);
        if let Some(locator) = created {
            self.added_changes.create_creatable(locator);
        }
        if let Some(locator) = deleted {
            self.added_changes.delete_creatable(locator);
        }
        Ok(())
    }

    fn consensus_params(&self) -> ConsensusParams {
        self.consensus_params.clone()
    }
}
