// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::{LedgerChanges, LedgerError};
use appcall_models::{AccountRecord, Address, CreatableIndex, CreatableLocator};
use std::fmt::Debug;

/// Interface of the final ledger
pub trait LedgerController: Send + Sync + Debug {
    /// Allows applying `LedgerChanges` to the final ledger
    fn apply_changes(&mut self, changes: LedgerChanges);

    /// Loads ledger from file
    fn load_initial_ledger(&mut self) -> Result<(), LedgerError>;

    /// Gets a copy of the record of an address
    ///
    /// # Returns
    /// The record, or None if the address has no record
    fn get_account(&self, addr: &Address) -> Option<AccountRecord>;

    /// Gets the locator of a creatable
    ///
    /// # Returns
    /// The locator, or None if no such creatable exists
    fn get_creatable(&self, index: &CreatableIndex) -> Option<CreatableLocator>;

    /// Number of account records in the ledger
    fn accounts_count(&self) -> usize;
}
