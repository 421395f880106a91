// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::config::ConsensusParams;
use crate::error::ModelsError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::collections::BTreeMap;

/// Numeric code of a value delta action
#[derive(Clone, Copy, PartialEq, Eq, Debug, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum DeltaAction {
    /// set the key to an unsigned integer
    SetUint = 1,
    /// set the key to a byte string
    SetBytes = 2,
    /// delete the key
    Delete = 3,
}

/// Change applied to a single key of a key/value store
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ValueDelta {
    /// set the key to an unsigned integer
    SetUint(u64),
    /// set the key to a byte string
    SetBytes(Vec<u8>),
    /// delete the key
    Delete,
}

impl ValueDelta {
    /// Builds a delta from its raw parts as emitted by an evaluator.
    /// Only the field matching the action is kept.
    ///
    /// ## Example
    /// ```rust
    /// # use appcall_models::ValueDelta;
    /// assert_eq!(ValueDelta::from_parts(1, 5, Vec::new()).unwrap(), ValueDelta::SetUint(5));
    /// assert!(ValueDelta::from_parts(9, 0, Vec::new()).is_err());
    /// ```
    pub fn from_parts(action: u8, uint: u64, bytes: Vec<u8>) -> Result<Self, ModelsError> {
        match DeltaAction::try_from(action) {
            Ok(DeltaAction::SetUint) => Ok(ValueDelta::SetUint(uint)),
            Ok(DeltaAction::SetBytes) => Ok(ValueDelta::SetBytes(bytes)),
            Ok(DeltaAction::Delete) => Ok(ValueDelta::Delete),
            Err(_) => Err(ModelsError::InvalidDeltaAction(action)),
        }
    }

    /// Action code of the delta
    pub fn action(&self) -> DeltaAction {
        match self {
            ValueDelta::SetUint(_) => DeltaAction::SetUint,
            ValueDelta::SetBytes(_) => DeltaAction::SetBytes,
            ValueDelta::Delete => DeltaAction::Delete,
        }
    }
}

/// Set of changes to one key/value store.
/// Keys are unique, so the order in which deltas are applied does not matter.
#[serde_as]
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct StateDelta(#[serde_as(as = "Vec<(_, _)>")] pub BTreeMap<Vec<u8>, ValueDelta>);

impl StateDelta {
    /// Number of keys touched by the delta
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the delta touches no key
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the changed keys and their deltas
    pub fn iter(&self) -> impl Iterator<Item = (&Vec<u8>, &ValueDelta)> {
        self.0.iter()
    }

    /// Checks key and value lengths against the consensus limits
    pub fn valid(&self, params: &ConsensusParams) -> Result<(), ModelsError> {
        if !self.is_empty() && params.max_app_key_len == 0 {
            return Err(ModelsError::InvalidDelta(
                "delta not empty, but max_app_key_len is 0".into(),
            ));
        }
        for (key, delta) in self.iter() {
            if key.len() > params.max_app_key_len {
                return Err(ModelsError::InvalidDelta(format!(
                    "key too long: length was {}, maximum is {}",
                    key.len(),
                    params.max_app_key_len
                )));
            }
            if let ValueDelta::SetBytes(bytes) = delta {
                if bytes.len() > params.max_app_bytes_value_len {
                    return Err(ModelsError::InvalidDelta(format!(
                        "cannot set value for key 0x{}, too long: length was {}, maximum is {}",
                        hex::encode(key),
                        bytes.len(),
                        params.max_app_bytes_value_len
                    )));
                }
            }
        }
        Ok(())
    }
}

impl FromIterator<(Vec<u8>, ValueDelta)> for StateDelta {
    fn from_iter<T: IntoIterator<Item = (Vec<u8>, ValueDelta)>>(iter: T) -> Self {
        StateDelta(iter.into_iter().collect())
    }
}

/// Key/value changes declared by one program execution
#[serde_as]
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct EvalDelta {
    /// changes to the global state of the application
    pub global_delta: StateDelta,
    /// changes to local states, keyed by account index
    /// (0 is the sender, `i` is the `i-1`th account referenced by the transaction)
    #[serde_as(as = "Vec<(_, _)>")]
    pub local_deltas: BTreeMap<u64, StateDelta>,
}

impl EvalDelta {
    /// Whether the evaluation declared no change at all
    pub fn is_empty(&self) -> bool {
        self.global_delta.is_empty() && self.local_deltas.is_empty()
    }
}
