// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Provides various tools to manipulate ledger entries and changes happening on them.

use serde::{Deserialize, Serialize};

/// Trait marking a structure that supports another one (V) being applied to it
pub trait Applicable<V> {
    /// apply changes from other to mutable self
    fn apply(&mut self, _: V);
}

/// Enumeration representing a set/delete change on a value T
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetOrDelete<T: Clone> {
    /// sets a new absolute value T
    Set(T),
    /// deletes the value T
    Delete,
}

/// `SetOrDelete` v applied to `SetOrDelete` self overwrites it
impl<T: Clone> Applicable<SetOrDelete<T>> for SetOrDelete<T> {
    fn apply(&mut self, other: SetOrDelete<T>) {
        *self = other;
    }
}

impl<T: Clone> SetOrDelete<T> {
    /// Value set by the change, if any
    pub fn as_set(&self) -> Option<&T> {
        match self {
            SetOrDelete::Set(value) => Some(value),
            SetOrDelete::Delete => None,
        }
    }
}
