// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This module exports the storage interface consumed by application call execution

use crate::LedgerError;
use appcall_models::{
    AccountRecord, Address, ConsensusParams, CreatableIndex, CreatableLocator, CreatableType,
};

/// Copy-on-write view of account records.
///
/// Writes are staged by the view and only become final when the enclosing block is committed:
/// the user of the view never commits anything itself.
/// Records are returned by value, so they can be modified freely before being written back.
#[cfg_attr(any(test, feature = "test-exports"), mockall::automock)]
pub trait Balances {
    /// Gets the creator of a creatable
    ///
    /// # Returns
    /// `Some(creator)` if a creatable of that type exists at that index, `None` otherwise
    fn get_creator(
        &self,
        index: CreatableIndex,
        ctype: CreatableType,
    ) -> Result<Option<Address>, LedgerError>;

    /// Gets a copy of the record of an address.
    /// Addresses without a record get an empty one.
    fn get(&self, addr: &Address) -> Result<AccountRecord, LedgerError>;

    /// Stages a record
    fn put(&mut self, record: AccountRecord) -> Result<(), LedgerError>;

    /// Stages a record together with the creation and/or deletion of a creatable
    fn put_with_creatable(
        &mut self,
        record: AccountRecord,
        created: Option<CreatableLocator>,
        deleted: Option<CreatableLocator>,
    ) -> Result<(), LedgerError>;

    /// Consensus parameters in effect
    fn consensus_params(&self) -> ConsensusParams;
}
