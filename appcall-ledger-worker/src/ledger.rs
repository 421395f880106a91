// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines the final ledger associating addresses to their account records.

use appcall_ledger_exports::{
    LedgerChanges, LedgerConfig, LedgerController, LedgerError, SetOrDelete,
};
use appcall_models::{AccountRecord, Address, CreatableIndex, CreatableLocator};
use std::collections::BTreeMap;
use tracing::debug;

/// Represents a final ledger associating addresses to their account records.
/// Creatables are indexed separately so that their creator can be found without a scan.
#[derive(Debug)]
pub struct FinalLedger {
    /// ledger configuration
    pub(crate) config: LedgerConfig,
    /// account records, sorted by address
    pub(crate) accounts: BTreeMap<Address, AccountRecord>,
    /// creatables, sorted by index
    pub(crate) creatables: BTreeMap<CreatableIndex, CreatableLocator>,
}

impl FinalLedger {
    /// Initializes a new empty `FinalLedger`. See `load_initial_ledger` to fill it.
    pub fn new(config: LedgerConfig) -> Self {
        FinalLedger {
            config,
            accounts: Default::default(),
            creatables: Default::default(),
        }
    }

    /// Rebuilds the creatable index from the applications held by the records
    fn index_creatables(&mut self) -> Result<(), LedgerError> {
        let mut creatables = BTreeMap::new();
        for (addr, record) in self.accounts.iter() {
            for app_idx in record.app_params.keys() {
                let locator = CreatableLocator::app(*addr, *app_idx);
                if let Some(other) = creatables.insert(locator.index, locator) {
                    return Err(LedgerError::ContainerInconsistency(format!(
                        "app {} is created by both {} and {}",
                        app_idx, other.creator, addr
                    )));
                }
            }
        }
        self.creatables = creatables;
        Ok(())
    }
}

impl LedgerController for FinalLedger {
    /// Allows applying `LedgerChanges` to the final ledger
    fn apply_changes(&mut self, changes: LedgerChanges) {
        for (addr, record) in changes.accounts {
            self.accounts.insert(addr, record);
        }
        for (index, change) in changes.creatables {
            match change {
                SetOrDelete::Set(locator) => {
                    self.creatables.insert(index, locator);
                }
                SetOrDelete::Delete => {
                    self.creatables.remove(&index);
                }
            }
        }
    }

    /// Loads ledger from file
    fn load_initial_ledger(&mut self) -> Result<(), LedgerError> {
        let initial_ledger: BTreeMap<Address, AccountRecord> = serde_json::from_str(
            &std::fs::read_to_string(&self.config.initial_ledger_path).map_err(|err| {
                LedgerError::FileError(format!(
                    "error loading initial ledger file {}: {}",
                    self.config
                        .initial_ledger_path
                        .to_str()
                        .unwrap_or("(non-utf8 path)"),
                    err
                ))
            })?,
        )
        .map_err(|err| {
            LedgerError::FileError(format!(
                "error parsing initial ledger file {}: {}",
                self.config
                    .initial_ledger_path
                    .to_str()
                    .unwrap_or("(non-utf8 path)"),
                err
            ))
        })?;

        self.accounts = initial_ledger
            .into_iter()
            .map(|(addr, mut record)| {
                record.address = addr;
                (addr, record)
            })
            .collect();
        self.index_creatables()?;
        debug!(
            "loaded initial ledger: {} accounts, {} creatables",
            self.accounts.len(),
            self.creatables.len()
        );
        Ok(())
    }

    fn get_account(&self, addr: &Address) -> Option<AccountRecord> {
        self.accounts.get(addr).cloned()
    }

    fn get_creatable(&self, index: &CreatableIndex) -> Option<CreatableLocator> {
        self.creatables.get(index).copied()
    }

    fn accounts_count(&self) -> usize {
        self.accounts.len()
    }
}
