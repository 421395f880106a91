// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::address::Address;
use crate::app::{AppIndex, StateSchema};
use crate::delta::EvalDelta;
use crate::error::ModelsError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// Lifecycle effect requested by an application call
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    TryFromPrimitive,
    IntoPrimitive,
)]
#[repr(u64)]
pub enum OnCompletion {
    /// only run the approval program
    #[default]
    NoOp = 0,
    /// allocate local state for the sender
    OptIn = 1,
    /// deallocate the local state of the sender, if approved
    CloseOut = 2,
    /// deallocate the local state of the sender, unconditionally
    ClearState = 3,
    /// replace the programs of the application
    UpdateApplication = 4,
    /// delete the application
    DeleteApplication = 5,
}

impl OnCompletion {
    /// Decodes a completion action code
    ///
    /// ## Example
    /// ```rust
    /// # use appcall_models::OnCompletion;
    /// assert_eq!(OnCompletion::from_code(1).unwrap(), OnCompletion::OptIn);
    /// assert!(OnCompletion::from_code(6).is_err());
    /// ```
    pub fn from_code(code: u64) -> Result<Self, ModelsError> {
        OnCompletion::try_from(code).map_err(|_| ModelsError::InvalidOnCompletion(code))
    }
}

/// Header fields of the transaction carrying the call
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransactionHeader {
    /// account sending the transaction
    pub sender: Address,
}

/// Fields of an application call transaction
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct ApplicationCallFields {
    /// target application, or `AppIndex(0)` to create one
    pub application_id: AppIndex,
    /// requested lifecycle effect
    pub on_completion: OnCompletion,
    /// arguments passed to the programs
    pub app_args: Vec<Vec<u8>>,
    /// accounts whose local state the programs may access, besides the sender
    pub accounts: Vec<Address>,
    /// applications whose global state the programs may read
    pub foreign_apps: Vec<AppIndex>,
    /// local schema declared at creation
    pub local_state_schema: StateSchema,
    /// global schema declared at creation
    pub global_state_schema: StateSchema,
    /// approval program set at creation or update
    pub approval_program: Vec<u8>,
    /// clear-state program set at creation or update
    pub clear_state_program: Vec<u8>,
}

impl ApplicationCallFields {
    /// Resolves an account index: 0 is the sender, `i` is `accounts[i - 1]`
    pub fn address_by_index(&self, index: u64, sender: Address) -> Result<Address, ModelsError> {
        if index == 0 {
            return Ok(sender);
        }
        usize::try_from(index - 1)
            .ok()
            .and_then(|pos| self.accounts.get(pos))
            .copied()
            .ok_or(ModelsError::InvalidAccountIndex {
                index,
                count: self.accounts.len(),
            })
    }
}

/// Effects of an applied transaction, recorded so that consumers don't have to
/// re-run programs to learn the state changes
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct ApplyData {
    /// key/value changes committed by the call
    pub eval_delta: EvalDelta,
}
