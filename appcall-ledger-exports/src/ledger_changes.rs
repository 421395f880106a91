// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file provides structures representing changes to account records and creatables

use crate::types::{Applicable, SetOrDelete};
use appcall_models::{AccountRecord, Address, CreatableIndex, CreatableLocator};
use std::collections::BTreeMap;

/// Represents the writes staged on top of the final ledger.
/// Account records are always written whole, so a change is simply the new record.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct LedgerChanges {
    /// new account records
    pub accounts: BTreeMap<Address, AccountRecord>,
    /// created (`Set`) or deleted (`Delete`) creatables
    pub creatables: BTreeMap<CreatableIndex, SetOrDelete<CreatableLocator>>,
}

impl Applicable<LedgerChanges> for LedgerChanges {
    /// extends the current `LedgerChanges` with another one
    fn apply(&mut self, changes: LedgerChanges) {
        self.accounts.extend(changes.accounts);
        for (index, change) in changes.creatables {
            match self.creatables.get_mut(&index) {
                Some(current) => current.apply(change),
                None => {
                    self.creatables.insert(index, change);
                }
            }
        }
    }
}

impl LedgerChanges {
    /// Whether nothing was staged
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() && self.creatables.is_empty()
    }

    /// Gets the staged record of an address, or calls a function to fetch it elsewhere
    pub fn get_account_or_else<F: FnOnce() -> Option<AccountRecord>>(
        &self,
        addr: &Address,
        f: F,
    ) -> Option<AccountRecord> {
        match self.accounts.get(addr) {
            Some(record) => Some(record.clone()),
            None => f(),
        }
    }

    /// Gets the staged state of a creatable:
    /// * `Some(Some(locator))` if it was created
    /// * `Some(None)` if it was deleted
    /// * `None` if nothing was staged for it
    pub fn get_creatable(&self, index: &CreatableIndex) -> Option<Option<CreatableLocator>> {
        self.creatables
            .get(index)
            .map(|change| change.as_set().copied())
    }

    /// Stages a record
    pub fn set_account(&mut self, record: AccountRecord) {
        self.accounts.insert(record.address, record);
    }

    /// Stages the creation of a creatable
    pub fn create_creatable(&mut self, locator: CreatableLocator) {
        self.creatables
            .insert(locator.index, SetOrDelete::Set(locator));
    }

    /// Stages the deletion of a creatable
    pub fn delete_creatable(&mut self, locator: CreatableLocator) {
        self.creatables.insert(locator.index, SetOrDelete::Delete);
    }
}
