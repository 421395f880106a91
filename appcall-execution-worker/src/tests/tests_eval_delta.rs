// Copyright (c) 2022 MASSA LABS <info@massa.net>

use super::mock::{get_mock_balances, get_speculative_ledger, state_delta};
use crate::apply_eval_delta;
use crate::lifecycle::{apply_opt_in, get_app_params};
use appcall_execution_exports::{ApplyError, ExecutionError};
use appcall_ledger_exports::{Balances, LedgerError, MockBalances};
use appcall_models::{
    AccountRecord, Address, AppIndex, AppLocalState, AppParams, ApplicationCallFields,
    ConsensusParams, EvalDelta, ModelsError, StateSchema, StateSchemas, StateValue, ValueDelta,
};
use assert_matches::assert_matches;
use std::collections::BTreeMap;

fn opted_in_record(addr: Address, app_idx: AppIndex, schema: StateSchema) -> AccountRecord {
    let mut record = AccountRecord::new(addr);
    record.app_local_states.insert(
        app_idx,
        AppLocalState {
            schema,
            key_value: Default::default(),
        },
    );
    record.total_app_schema = schema;
    record
}

/// Commits on a mock view, on behalf of an application created by a fixed address
fn apply_on_mock(
    call: &ApplicationCallFields,
    eval_delta: &EvalDelta,
    params: &AppParams,
    sender: Address,
    balances: &mut MockBalances,
    app_idx: AppIndex,
) -> Result<(), ExecutionError> {
    let creator = Address::compute_from(b"creator");
    apply_eval_delta(call, eval_delta, params, creator, sender, balances, app_idx)
}

fn params(local: StateSchema, global: StateSchema) -> AppParams {
    AppParams {
        state_schemas: StateSchemas {
            local_state_schema: local,
            global_state_schema: global,
        },
        ..Default::default()
    }
}

#[test]
fn test_commit_global_and_local_deltas() {
    let (mut ledger, sample) = get_speculative_ledger(ConsensusParams::default());
    let (params, creator) = get_app_params(&ledger, sample.app_idx).unwrap().unwrap();
    apply_opt_in(&mut ledger, sample.user, sample.app_idx, &params).unwrap();
    apply_opt_in(&mut ledger, sample.creator, sample.app_idx, &params).unwrap();

    let call = ApplicationCallFields {
        application_id: sample.app_idx,
        accounts: vec![sample.creator],
        ..Default::default()
    };
    let eval_delta = EvalDelta {
        global_delta: state_delta(&[
            ("count", ValueDelta::SetUint(5)),
            ("name", ValueDelta::SetBytes(b"app".to_vec())),
        ]),
        local_deltas: BTreeMap::from([
            (0, state_delta(&[("score", ValueDelta::SetUint(3))])),
            (1, state_delta(&[("score", ValueDelta::SetUint(4))])),
        ]),
    };

    apply_eval_delta(
        &call,
        &eval_delta,
        &params,
        creator,
        sample.user,
        &mut ledger,
        sample.app_idx,
    )
    .unwrap();

    let creator_record = ledger.get(&sample.creator).unwrap();
    let global_state = &creator_record.app_params[&sample.app_idx].global_state;
    assert_eq!(global_state.get(b"count"), Some(&StateValue::Uint(5)));
    assert_eq!(
        global_state.get(b"name"),
        Some(&StateValue::Bytes(b"app".to_vec()))
    );
    // the creator also had a local delta, both writes must survive
    let creator_local = &creator_record.app_local_states[&sample.app_idx];
    assert_eq!(creator_local.key_value.get(b"score"), Some(&StateValue::Uint(4)));
    let user_record = ledger.get(&sample.user).unwrap();
    let user_local = &user_record.app_local_states[&sample.app_idx];
    assert_eq!(user_local.key_value.get(b"score"), Some(&StateValue::Uint(3)));
}

#[test]
fn test_atomicity_across_accounts() {
    let app_idx = AppIndex(7);
    let sender = Address::compute_from(b"a");
    let second = Address::compute_from(b"b");
    let third = Address::compute_from(b"c");
    let schema = StateSchema::new(1, 0);

    let call = ApplicationCallFields {
        application_id: app_idx,
        accounts: vec![second, third],
        ..Default::default()
    };
    let params = params(schema, StateSchema::new(1, 0));
    let local = state_delta(&[("k", ValueDelta::SetUint(1))]);
    let eval_delta = EvalDelta {
        global_delta: state_delta(&[("g", ValueDelta::SetUint(1))]),
        local_deltas: BTreeMap::from([(0, local.clone()), (1, local.clone()), (2, local)]),
    };

    // the last account did not opt in: nothing may be written, hence no write expectation
    let mut balances = get_mock_balances(vec![
        opted_in_record(sender, app_idx, schema),
        opted_in_record(second, app_idx, schema),
        AccountRecord::new(third),
    ]);
    assert_matches!(
        apply_on_mock(&call, &eval_delta, &params, sender, &mut balances, app_idx),
        Err(ExecutionError::ApplyError(ApplyError::NotOptedIn { addr, app }))
            if addr == third && app == app_idx
    );

    // the second account would exceed its schema
    let mut over = eval_delta.clone();
    over.local_deltas.insert(
        1,
        state_delta(&[
            ("k", ValueDelta::SetUint(1)),
            ("l", ValueDelta::SetUint(2)),
        ]),
    );
    let mut balances = get_mock_balances(vec![
        opted_in_record(sender, app_idx, schema),
        opted_in_record(second, app_idx, schema),
        opted_in_record(third, app_idx, schema),
    ]);
    assert_matches!(
        apply_on_mock(&call, &over, &params, sender, &mut balances, app_idx),
        Err(ExecutionError::ApplyError(ApplyError::LocalSchemaViolation { addr, .. }))
            if addr == second
    );
}

#[test]
fn test_atomicity_on_speculative_ledger() {
    let (mut ledger, sample) = get_speculative_ledger(ConsensusParams::default());
    let (params, creator) = get_app_params(&ledger, sample.app_idx).unwrap().unwrap();
    apply_opt_in(&mut ledger, sample.user, sample.app_idx, &params).unwrap();
    let before = ledger.get_snapshot();

    let call = ApplicationCallFields {
        application_id: sample.app_idx,
        accounts: vec![sample.creator],
        ..Default::default()
    };
    // valid global and sender deltas, but the creator never opted in
    let eval_delta = EvalDelta {
        global_delta: state_delta(&[("count", ValueDelta::SetUint(9))]),
        local_deltas: BTreeMap::from([
            (0, state_delta(&[("score", ValueDelta::SetUint(3))])),
            (1, state_delta(&[("score", ValueDelta::SetUint(4))])),
        ]),
    };
    let err = apply_eval_delta(
        &call,
        &eval_delta,
        &params,
        creator,
        sample.user,
        &mut ledger,
        sample.app_idx,
    )
    .unwrap_err();
    assert!(err.is_apply_error());
    assert_eq!(ledger.get_snapshot(), before);
}

#[test]
fn test_malformed_local_deltas() {
    let app_idx = AppIndex(3);
    let sender = Address::compute_from(b"sender");
    let params = params(StateSchema::new(2, 2), StateSchema::default());
    let one = state_delta(&[("k", ValueDelta::SetUint(1))]);

    // index 1 designates the sender again
    let call = ApplicationCallFields {
        accounts: vec![sender],
        ..Default::default()
    };
    let duplicate = EvalDelta {
        local_deltas: BTreeMap::from([(0, one.clone()), (1, one.clone())]),
        ..Default::default()
    };
    let record = opted_in_record(sender, app_idx, StateSchema::new(2, 2));
    let mut balances = get_mock_balances(vec![record]);
    assert_matches!(
        apply_on_mock(&call, &duplicate, &params, sender, &mut balances, app_idx),
        Err(ExecutionError::ApplyError(ApplyError::DuplicateLocalDelta(addr))) if addr == sender
    );

    let empty = EvalDelta {
        local_deltas: BTreeMap::from([(0, Default::default())]),
        ..Default::default()
    };
    assert_matches!(
        apply_on_mock(&call, &empty, &params, sender, &mut balances, app_idx),
        Err(ExecutionError::ApplyError(ApplyError::ZeroLengthLocalDelta(_)))
    );

    let key = "k".repeat(65);
    let long_key = EvalDelta {
        local_deltas: BTreeMap::from([(0, state_delta(&[(key.as_str(), ValueDelta::Delete)]))]),
        ..Default::default()
    };
    assert_matches!(
        apply_on_mock(&call, &long_key, &params, sender, &mut balances, app_idx),
        Err(ExecutionError::ApplyError(ApplyError::InvalidLocalDelta { .. }))
    );

    // unresolvable account index is a fault of the call, not a policy failure
    let unknown = EvalDelta {
        local_deltas: BTreeMap::from([(5, one)]),
        ..Default::default()
    };
    let res = apply_on_mock(&call, &unknown, &params, sender, &mut balances, app_idx);
    let err = res.unwrap_err();
    assert!(!err.is_apply_error());
    assert_matches!(
        err,
        ExecutionError::ModelsError(ModelsError::InvalidAccountIndex { index: 5, count: 1 })
    );
}

#[test]
fn test_global_delta_policy() {
    let app_idx = AppIndex(3);
    let sender = Address::compute_from(b"sender");
    let call = ApplicationCallFields::default();
    let mut params = params(StateSchema::default(), StateSchema::new(1, 0));
    params
        .global_state
        .insert(b"count".to_vec(), StateValue::Uint(1));
    let mut balances = get_mock_balances(Vec::new());

    let over = EvalDelta {
        global_delta: state_delta(&[("other", ValueDelta::SetUint(1))]),
        ..Default::default()
    };
    assert_matches!(
        apply_on_mock(&call, &over, &params, sender, &mut balances, app_idx),
        Err(ExecutionError::ApplyError(ApplyError::GlobalSchemaViolation { app, .. }))
            if app == app_idx
    );

    let too_long = EvalDelta {
        global_delta: state_delta(&[("count", ValueDelta::SetBytes(vec![0; 65]))]),
        ..Default::default()
    };
    assert_matches!(
        apply_on_mock(&call, &too_long, &params, sender, &mut balances, app_idx),
        Err(ExecutionError::ApplyError(ApplyError::InvalidGlobalDelta(_)))
    );

    // the params handed in are never modified
    assert_eq!(params.global_state.len(), 1);
}

#[test]
fn test_global_delta_replaces_key_in_place() {
    let app_idx = AppIndex(3);
    let sender = Address::compute_from(b"sender");
    let creator = Address::compute_from(b"creator");
    let mut params = params(StateSchema::default(), StateSchema::new(1, 0));
    params
        .global_state
        .insert(b"count".to_vec(), StateValue::Uint(1));
    let mut creator_record = AccountRecord::new(creator);
    creator_record.app_params.insert(app_idx, params.clone());

    let mut balances = get_mock_balances(vec![creator_record]);
    balances
        .expect_put()
        .withf(move |record| {
            record.address == creator
                && record.app_params[&app_idx].global_state.get(b"count")
                    == Some(&StateValue::Uint(2))
        })
        .times(1)
        .returning(|_| Ok(()));

    // deleting an absent key and overwriting a present one keep the store within its schema
    let eval_delta = EvalDelta {
        global_delta: state_delta(&[
            ("count", ValueDelta::SetUint(2)),
            ("absent", ValueDelta::Delete),
        ]),
        ..Default::default()
    };
    apply_eval_delta(
        &ApplicationCallFields::default(),
        &eval_delta,
        &params,
        creator,
        sender,
        &mut balances,
        app_idx,
    )
    .unwrap();
}

#[test]
fn test_storage_failure_is_fatal() {
    let app_idx = AppIndex(3);
    let sender = Address::compute_from(b"sender");
    let mut balances = MockBalances::new();
    balances
        .expect_consensus_params()
        .returning(ConsensusParams::default);
    balances
        .expect_get()
        .returning(|_| Err(LedgerError::ReadError("disk unavailable".into())));

    let eval_delta = EvalDelta {
        local_deltas: BTreeMap::from([(0, state_delta(&[("k", ValueDelta::SetUint(1))]))]),
        ..Default::default()
    };
    let err = apply_eval_delta(
        &ApplicationCallFields::default(),
        &eval_delta,
        &params(StateSchema::new(1, 0), StateSchema::default()),
        Address::compute_from(b"creator"),
        sender,
        &mut balances,
        app_idx,
    )
    .unwrap_err();
    assert!(!err.is_apply_error());
    assert_matches!(err, ExecutionError::LedgerError(LedgerError::ReadError(_)));
}
