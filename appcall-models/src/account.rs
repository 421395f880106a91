// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::address::Address;
use crate::app::{AppIndex, AppLocalState, AppParams, StateSchema};
use crate::config::ConsensusParams;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::collections::BTreeMap;

/// Index shared by every kind of object an account can create
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug, Serialize, Deserialize,
)]
pub struct CreatableIndex(pub u64);

impl From<AppIndex> for CreatableIndex {
    fn from(value: AppIndex) -> Self {
        CreatableIndex(value.0)
    }
}

/// Kind of object an account can create
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Serialize,
    Deserialize,
    TryFromPrimitive,
    IntoPrimitive,
)]
#[repr(u8)]
pub enum CreatableType {
    /// asset
    Asset = 0,
    /// application
    App = 1,
}

/// Announces the creation or deletion of a creatable object to the ledger
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CreatableLocator {
    /// account that created the object
    pub creator: Address,
    /// kind of object
    pub ctype: CreatableType,
    /// index of the object
    pub index: CreatableIndex,
}

impl CreatableLocator {
    /// Locator of an application
    pub fn app(creator: Address, app_idx: AppIndex) -> Self {
        CreatableLocator {
            creator,
            ctype: CreatableType::App,
            index: app_idx.into(),
        }
    }
}

/// Ledger record of an account, restricted to the fields application calls need.
///
/// Records are always handed out by value: mutating a fetched record never affects
/// the stored one until it is written back.
#[serde_as]
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct AccountRecord {
    /// address of the account
    pub address: Address,
    /// balance, in micro-units
    #[serde(default)]
    pub balance: u64,
    /// parameters of the applications created by the account
    #[serde(default)]
    #[serde_as(as = "Vec<(_, _)>")]
    pub app_params: BTreeMap<AppIndex, AppParams>,
    /// local states of the applications the account opted into
    #[serde(default)]
    #[serde_as(as = "Vec<(_, _)>")]
    pub app_local_states: BTreeMap<AppIndex, AppLocalState>,
    /// sum of the global schemas of created apps and the local schemas of opted-in apps
    #[serde(default)]
    pub total_app_schema: StateSchema,
}

impl AccountRecord {
    /// Empty record for an address
    pub fn new(address: Address) -> Self {
        AccountRecord {
            address,
            ..Default::default()
        }
    }

    /// Recomputes the schema total from the stored applications.
    /// Should always equal `total_app_schema`.
    pub fn computed_app_schema(&self) -> StateSchema {
        let created = self
            .app_params
            .values()
            .fold(StateSchema::default(), |acc, params| {
                acc.add_schema(params.state_schemas.global_state_schema)
            });
        self.app_local_states
            .values()
            .fold(created, |acc, local| acc.add_schema(local.schema))
    }

    /// Minimum balance the account must hold given the applications it created or opted into
    pub fn min_balance(&self, params: &ConsensusParams) -> u64 {
        let schema = self.total_app_schema;
        let created = self.app_params.len() as u64;
        let opted_in = self.app_local_states.len() as u64;

        params
            .min_balance
            .saturating_add(
                params
                    .schema_min_balance_per_entry
                    .saturating_mul(schema.num_entries()),
            )
            .saturating_add(params.schema_uint_min_balance.saturating_mul(schema.num_uint))
            .saturating_add(
                params
                    .schema_bytes_min_balance
                    .saturating_mul(schema.num_byte_slice),
            )
            .saturating_add(params.app_flat_params_min_balance.saturating_mul(created))
            .saturating_add(params.app_flat_opt_in_min_balance.saturating_mul(opted_in))
    }
}
