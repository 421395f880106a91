// Copyright (c) 2022 MASSA LABS <info@massa.net>

use appcall_models::{KeyValue, StateDelta, StateValue, ValueDelta};

/// Applies every key change of a delta to a store, in place.
///
/// Keys of a delta are unique, so the order of application does not matter.
/// Deleting an absent key does nothing.
/// Callers clone the store beforehand if the original must survive a later failure.
pub fn apply_state_delta(store: &mut KeyValue, delta: &StateDelta) {
    for (key, value_delta) in delta.iter() {
        match value_delta {
            ValueDelta::SetUint(value) => store.insert(key.clone(), StateValue::Uint(*value)),
            ValueDelta::SetBytes(bytes) => {
                store.insert(key.clone(), StateValue::Bytes(bytes.clone()))
            }
            ValueDelta::Delete => store.remove(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_state_delta() {
        let mut store: KeyValue = [
            (b"a".to_vec(), StateValue::Uint(1)),
            (b"b".to_vec(), StateValue::Bytes(b"old".to_vec())),
        ]
        .into_iter()
        .collect();
        let delta: StateDelta = [
            (b"a".to_vec(), ValueDelta::SetBytes(b"now bytes".to_vec())),
            (b"b".to_vec(), ValueDelta::Delete),
            (b"c".to_vec(), ValueDelta::SetUint(3)),
        ]
        .into_iter()
        .collect();

        apply_state_delta(&mut store, &delta);

        let expected: KeyValue = [
            (b"a".to_vec(), StateValue::Bytes(b"now bytes".to_vec())),
            (b"c".to_vec(), StateValue::Uint(3)),
        ]
        .into_iter()
        .collect();
        assert_eq!(store, expected);
    }

    #[test]
    fn test_delete_absent_key_is_noop() {
        let mut store: KeyValue = [(b"kept".to_vec(), StateValue::Uint(7))]
            .into_iter()
            .collect();
        let before = store.clone();
        let delta: StateDelta = [(b"missing".to_vec(), ValueDelta::Delete)]
            .into_iter()
            .collect();

        apply_state_delta(&mut store, &delta);
        assert_eq!(store, before);
        apply_state_delta(&mut store, &delta);
        assert_eq!(store, before);
    }

    #[test]
    fn test_empty_delta() {
        let mut store = KeyValue::new();
        apply_state_delta(&mut store, &StateDelta::default());
        assert!(store.is_empty());
    }
}
