// Copyright (c) 2022 MASSA LABS <info@massa.net>

use super::mock::{get_speculative_ledger, run_call, Sample, APPROVAL};
use crate::SpeculativeLedger;
use appcall_execution_exports::test_exports::TestStateEvaluator;
use appcall_execution_exports::{ApplyError, ExecutionError, ProgramKind};
use appcall_ledger_exports::Balances;
use appcall_models::{
    AppIndex, ApplicationCallFields, ConsensusParams, CreatableType, OnCompletion, StateSchema,
};
use assert_matches::assert_matches;

fn call(app_idx: AppIndex, on_completion: OnCompletion) -> ApplicationCallFields {
    ApplicationCallFields {
        application_id: app_idx,
        on_completion,
        ..Default::default()
    }
}

fn create_call(local: StateSchema, global: StateSchema) -> ApplicationCallFields {
    ApplicationCallFields {
        application_id: AppIndex::CREATION_SENTINEL,
        local_state_schema: local,
        global_state_schema: global,
        approval_program: vec![2, 0x40],
        clear_state_program: vec![2, 0x41],
        ..Default::default()
    }
}

fn assert_schemas_conserved(ledger: &SpeculativeLedger, sample: &Sample) {
    for addr in [sample.creator, sample.user] {
        let record = ledger.get(&addr).unwrap();
        assert_eq!(
            record.computed_app_schema(),
            record.total_app_schema,
            "schema total of {} out of sync",
            addr
        );
    }
}

#[test]
fn test_creation_limit() {
    let (mut ledger, sample) = get_speculative_ledger(ConsensusParams {
        max_apps_created: 1,
        ..Default::default()
    });
    let mut evaluator = TestStateEvaluator::new();
    let before = ledger.get_snapshot();

    // the creator already holds one application
    let (res, _) = run_call(
        &mut ledger,
        &create_call(StateSchema::default(), StateSchema::new(1, 0)),
        sample.creator,
        10,
        &mut evaluator,
    );
    assert_matches!(
        res,
        Err(ExecutionError::ApplyError(ApplyError::MaxAppsCreated { creator, max: 1 }))
            if creator == sample.creator
    );
    assert_eq!(ledger.get_snapshot(), before);
    let creator = ledger.get_creator(AppIndex(11).into(), CreatableType::App);
    assert_eq!(creator.unwrap(), None);

    let (res, _) = run_call(
        &mut ledger,
        &create_call(StateSchema::default(), StateSchema::new(1, 0)),
        sample.user,
        11,
        &mut evaluator,
    );
    res.unwrap();
    let creator = ledger.get_creator(AppIndex(12).into(), CreatableType::App);
    assert_eq!(creator.unwrap(), Some(sample.user));
}

#[test]
fn test_opt_in_exclusivity() {
    let (mut ledger, sample) = get_speculative_ledger(ConsensusParams::default());
    let mut evaluator = TestStateEvaluator::new();

    let (res, _) = run_call(
        &mut ledger,
        &call(sample.app_idx, OnCompletion::OptIn),
        sample.user,
        10,
        &mut evaluator,
    );
    res.unwrap();
    let record = ledger.get(&sample.user).unwrap();
    assert_eq!(record.app_local_states.len(), 1);
    assert_eq!(record.total_app_schema, StateSchema::new(1, 0));

    let (res, _) = run_call(
        &mut ledger,
        &call(sample.app_idx, OnCompletion::OptIn),
        sample.user,
        11,
        &mut evaluator,
    );
    assert_matches!(
        res,
        Err(ExecutionError::ApplyError(ApplyError::AlreadyOptedIn { addr, .. }))
            if addr == sample.user
    );

    // opting in again is possible once closed out
    let (res, _) = run_call(
        &mut ledger,
        &call(sample.app_idx, OnCompletion::CloseOut),
        sample.user,
        12,
        &mut evaluator,
    );
    res.unwrap();
    let record = ledger.get(&sample.user).unwrap();
    assert!(record.app_local_states.is_empty());
    let (res, _) = run_call(
        &mut ledger,
        &call(sample.app_idx, OnCompletion::OptIn),
        sample.user,
        13,
        &mut evaluator,
    );
    res.unwrap();
}

#[test]
fn test_opt_in_limit() {
    let (mut ledger, sample) = get_speculative_ledger(ConsensusParams {
        max_apps_opted_in: 0,
        ..Default::default()
    });
    let (res, _) = run_call(
        &mut ledger,
        &call(sample.app_idx, OnCompletion::OptIn),
        sample.user,
        10,
        &mut TestStateEvaluator::new(),
    );
    assert_matches!(
        res,
        Err(ExecutionError::ApplyError(ApplyError::MaxAppsOptedIn { max: 0, .. }))
    );
}

#[test]
fn test_close_out_requires_opt_in() {
    let (mut ledger, sample) = get_speculative_ledger(ConsensusParams::default());
    let mut evaluator = TestStateEvaluator::new();
    let (res, _) = run_call(
        &mut ledger,
        &call(sample.app_idx, OnCompletion::CloseOut),
        sample.user,
        10,
        &mut evaluator,
    );
    assert_matches!(
        res,
        Err(ExecutionError::ApplyError(ApplyError::NotOptedIn { addr, app }))
            if addr == sample.user && app == sample.app_idx
    );
    // the approval program ran before the close-out was attempted
    assert_eq!(evaluator.evaluated, vec![APPROVAL.to_vec()]);
}

#[test]
fn test_update_application() {
    let (mut ledger, sample) = get_speculative_ledger(ConsensusParams::default());
    let update = ApplicationCallFields {
        application_id: sample.app_idx,
        on_completion: OnCompletion::UpdateApplication,
        approval_program: vec![3, 0x30],
        clear_state_program: vec![2, 0x31],
        ..Default::default()
    };

    let mut evaluator = TestStateEvaluator::new().with_cost(&[3, 0x30], 701);
    let (res, _) = run_call(&mut ledger, &update, sample.creator, 10, &mut evaluator);
    assert_matches!(
        res,
        Err(ExecutionError::ApplyError(ApplyError::ProgramTooCostly {
            kind: ProgramKind::Approval,
            ..
        }))
    );
    // the cost gate runs before any program
    assert!(evaluator.evaluated.is_empty());

    let mut evaluator = TestStateEvaluator::new();
    let (res, _) = run_call(&mut ledger, &update, sample.creator, 11, &mut evaluator);
    res.unwrap();
    let record = ledger.get(&sample.creator).unwrap();
    let params = &record.app_params[&sample.app_idx];
    assert_eq!(params.approval_program, vec![2, 0x30]);
    assert_eq!(params.clear_state_program, vec![2, 0x31]);
    assert_eq!(
        params.state_schemas.global_state_schema,
        StateSchema::new(1, 1)
    );
    assert_eq!(record.total_app_schema, StateSchema::new(1, 1));
}

#[test]
fn test_schema_conservation() {
    let (mut ledger, sample) = get_speculative_ledger(ConsensusParams::default());
    let mut evaluator = TestStateEvaluator::new();
    let own_app = AppIndex(42);

    let steps = [
        (
            sample.user,
            create_call(StateSchema::new(1, 1), StateSchema::new(2, 1)),
        ),
        (sample.user, call(own_app, OnCompletion::OptIn)),
        (sample.user, call(sample.app_idx, OnCompletion::OptIn)),
        (sample.creator, call(own_app, OnCompletion::OptIn)),
        (sample.creator, call(own_app, OnCompletion::CloseOut)),
        (sample.user, call(sample.app_idx, OnCompletion::ClearState)),
        (
            sample.creator,
            call(sample.app_idx, OnCompletion::DeleteApplication),
        ),
        (sample.user, call(own_app, OnCompletion::DeleteApplication)),
        (sample.user, call(own_app, OnCompletion::ClearState)),
    ];
    for (txn_counter, (sender, step)) in (41..).zip(steps.iter()) {
        let (res, _) = run_call(&mut ledger, step, *sender, txn_counter, &mut evaluator);
        res.unwrap();
        assert_schemas_conserved(&ledger, &sample);
    }

    for addr in [sample.creator, sample.user] {
        let record = ledger.get(&addr).unwrap();
        assert!(record.app_params.is_empty());
        assert!(record.app_local_states.is_empty());
        assert_eq!(record.total_app_schema, StateSchema::default());
    }
}
