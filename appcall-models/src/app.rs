// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::state::KeyValue;
use serde::{Deserialize, Serialize};

/// Unique identifier of a deployed application.
/// `AppIndex(0)` is reserved: a call targeting it creates a new application.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug, Serialize, Deserialize,
)]
pub struct AppIndex(pub u64);

impl AppIndex {
    /// Application index used by a call to request the creation of an application
    pub const CREATION_SENTINEL: AppIndex = AppIndex(0);

    /// Whether this index requests the creation of a new application
    pub fn is_creation(&self) -> bool {
        *self == Self::CREATION_SENTINEL
    }
}

impl std::fmt::Display for AppIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum number of typed entries a key/value store may hold
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct StateSchema {
    /// maximum number of unsigned integer entries
    pub num_uint: u64,
    /// maximum number of byte string entries
    pub num_byte_slice: u64,
}

impl StateSchema {
    /// Creates a new `StateSchema`
    pub fn new(num_uint: u64, num_byte_slice: u64) -> Self {
        StateSchema {
            num_uint,
            num_byte_slice,
        }
    }

    /// Sums two schemas, saturating on overflow
    ///
    /// ## Example
    /// ```rust
    /// # use appcall_models::app::StateSchema;
    /// let total = StateSchema::new(1, 2).add_schema(StateSchema::new(3, 4));
    /// assert_eq!(total, StateSchema::new(4, 6));
    /// ```
    pub fn add_schema(self, other: StateSchema) -> StateSchema {
        StateSchema {
            num_uint: self.num_uint.saturating_add(other.num_uint),
            num_byte_slice: self.num_byte_slice.saturating_add(other.num_byte_slice),
        }
    }

    /// Subtracts a schema from another one, saturating at zero
    pub fn sub_schema(self, other: StateSchema) -> StateSchema {
        StateSchema {
            num_uint: self.num_uint.saturating_sub(other.num_uint),
            num_byte_slice: self.num_byte_slice.saturating_sub(other.num_byte_slice),
        }
    }

    /// Total number of entries allowed by the schema
    pub fn num_entries(&self) -> u64 {
        self.num_uint.saturating_add(self.num_byte_slice)
    }
}

/// Schemas declared by an application at creation
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct StateSchemas {
    /// schema of the local state of every opted-in account
    pub local_state_schema: StateSchema,
    /// schema of the global state stored by the creator
    pub global_state_schema: StateSchema,
}

/// Parameters of an application, stored in its creator's account record
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct AppParams {
    /// program run for every completion action except clear-state
    pub approval_program: Vec<u8>,
    /// program run when an account clears its local state
    pub clear_state_program: Vec<u8>,
    /// declared local and global schemas
    pub state_schemas: StateSchemas,
    /// global key/value store
    pub global_state: KeyValue,
}

/// Local state of an account for one application it opted into
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct AppLocalState {
    /// schema bounding `key_value`, copied from the application at opt-in
    pub schema: StateSchema,
    /// local key/value store
    pub key_value: KeyValue,
}
