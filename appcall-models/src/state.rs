// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::app::StateSchema;
use crate::error::ModelsError;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::collections::BTreeMap;

/// Typed value held in a key/value store
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum StateValue {
    /// unsigned integer value
    Uint(u64),
    /// byte string value
    Bytes(Vec<u8>),
}

/// Key/value store of an application, either global (held by the creator)
/// or local (held by an opted-in account).
#[serde_as]
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
pub struct KeyValue(#[serde_as(as = "Vec<(_, _)>")] pub BTreeMap<Vec<u8>, StateValue>);

impl KeyValue {
    /// Creates an empty store
    pub fn new() -> Self {
        KeyValue(BTreeMap::new())
    }

    /// Gets the value stored under a key
    pub fn get(&self, key: &[u8]) -> Option<&StateValue> {
        self.0.get(key)
    }

    /// Stores a value under a key, replacing any previous value
    pub fn insert(&mut self, key: Vec<u8>, value: StateValue) {
        self.0.insert(key, value);
    }

    /// Removes a key. Removing an absent key does nothing.
    pub fn remove(&mut self, key: &[u8]) {
        self.0.remove(key);
    }

    /// Number of entries in the store
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Counts the uint and bytes entries of the store
    pub fn counts(&self) -> StateSchema {
        self.0
            .values()
            .fold(StateSchema::default(), |mut acc, value| {
                match value {
                    StateValue::Uint(_) => acc.num_uint += 1,
                    StateValue::Bytes(_) => acc.num_byte_slice += 1,
                }
                acc
            })
    }

    /// Checks that the store does not hold more entries of each type than the schema allows
    ///
    /// ## Example
    /// ```rust
    /// # use appcall_models::{KeyValue, StateValue, StateSchema};
    /// let mut kv = KeyValue::new();
    /// kv.insert(b"counter".to_vec(), StateValue::Uint(1));
    /// assert!(kv.satisfies_schema(&StateSchema::new(1, 0)).is_ok());
    /// assert!(kv.satisfies_schema(&StateSchema::new(0, 1)).is_err());
    /// ```
    pub fn satisfies_schema(&self, schema: &StateSchema) -> Result<(), ModelsError> {
        let calc = self.counts();
        if calc.num_uint > schema.num_uint {
            return Err(ModelsError::SchemaViolation(format!(
                "store integer count {} exceeds schema integer count {}",
                calc.num_uint, schema.num_uint
            )));
        }
        if calc.num_byte_slice > schema.num_byte_slice {
            return Err(ModelsError::SchemaViolation(format!(
                "store bytes count {} exceeds schema bytes count {}",
                calc.num_byte_slice, schema.num_byte_slice
            )));
        }
        Ok(())
    }
}

impl FromIterator<(Vec<u8>, StateValue)> for KeyValue {
    fn from_iter<T: IntoIterator<Item = (Vec<u8>, StateValue)>>(iter: T) -> Self {
        KeyValue(iter.into_iter().collect())
    }
}
