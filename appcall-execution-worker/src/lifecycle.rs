// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Lifecycle of applications and of local states.
//!
//! Every operation keeps the `total_app_schema` of the records it touches in sync:
//! creators are charged the global schema of their applications,
//! opted-in accounts the local schema.

use crate::eval_delta::apply_eval_delta;
use crate::program::ProgramPreparer;
use appcall_execution_exports::{ApplyError, ExecutionError, StateEvaluator};
use appcall_ledger_exports::{Balances, LedgerError};
use appcall_models::{
    Address, AppIndex, AppLocalState, AppParams, ApplicationCallFields, ApplyData,
    CreatableLocator, CreatableType, StateSchemas,
};
use tracing::{debug, warn};

/// Fetches the parameters of an application together with its creator
///
/// # Returns
/// `None` if the application does not exist.
/// A `LedgerError::ContainerInconsistency` if the creator record does not hold the application.
pub fn get_app_params(
    balances: &dyn Balances,
    app_idx: AppIndex,
) -> Result<Option<(AppParams, Address)>, ExecutionError> {
    let creator = match balances.get_creator(app_idx.into(), CreatableType::App)? {
        Some(creator) => creator,
        None => return Ok(None),
    };
    let record = balances.get(&creator)?;
    let params = record.app_params.get(&app_idx).cloned().ok_or_else(|| {
        LedgerError::ContainerInconsistency(format!(
            "app {} not found in account {}",
            app_idx, creator
        ))
    })?;
    Ok(Some((params, creator)))
}

/// Creates an application owned by `creator` from the fields of the call.
///
/// # Returns
/// The index of the new application: `txn_counter + 1`, shared with the other creatables.
pub(crate) fn create_application(
    call: &ApplicationCallFields,
    balances: &mut dyn Balances,
    creator: Address,
    txn_counter: u64,
    preparer: &ProgramPreparer,
) -> Result<AppIndex, ExecutionError> {
    let mut record = balances.get(&creator)?;

    let max_apps_created = balances.consensus_params().max_apps_created;
    if record.app_params.len() >= max_apps_created {
        return Err(ApplyError::MaxAppsCreated {
            creator,
            max: max_apps_created,
        }
        .into());
    }

    let approval_program = preparer.prepare_program(&call.approval_program)?;
    let clear_state_program = preparer.prepare_program(&call.clear_state_program)?;

    let app_idx = AppIndex(txn_counter.saturating_add(1));
    record.app_params.insert(
        app_idx,
        AppParams {
            approval_program,
            clear_state_program,
            state_schemas: StateSchemas {
                local_state_schema: call.local_state_schema,
                global_state_schema: call.global_state_schema,
            },
            global_state: Default::default(),
        },
    );
    record.total_app_schema = record.total_app_schema.add_schema(call.global_state_schema);

    balances.put_with_creatable(record, Some(CreatableLocator::app(creator, app_idx)), None)?;
    debug!("app {} created by {}", app_idx, creator);
    Ok(app_idx)
}

/// Allocates an empty local state of the application for `sender`
pub(crate) fn apply_opt_in(
    balances: &mut dyn Balances,
    sender: Address,
    app_idx: AppIndex,
    params: &AppParams,
) -> Result<(), ExecutionError> {
    let mut record = balances.get(&sender)?;

    if record.app_local_states.contains_key(&app_idx) {
        return Err(ApplyError::AlreadyOptedIn {
            addr: sender,
            app: app_idx,
        }
        .into());
    }

    let max_apps_opted_in = balances.consensus_params().max_apps_opted_in;
    if record.app_local_states.len() >= max_apps_opted_in {
        return Err(ApplyError::MaxAppsOptedIn {
            addr: sender,
            app: app_idx,
            max: max_apps_opted_in,
        }
        .into());
    }

    let local_state_schema = params.state_schemas.local_state_schema;
    record.app_local_states.insert(
        app_idx,
        AppLocalState {
            schema: local_state_schema,
            key_value: Default::default(),
        },
    );
    record.total_app_schema = record.total_app_schema.add_schema(local_state_schema);

    balances.put(record)?;
    debug!("{} opted in to app {}", sender, app_idx);
    Ok(())
}

/// Removes the local state of `sender`, which is always allowed for an opted-in account.
///
/// If the application still exists, its clear-state program runs first.
/// When it approves, the changes it declared are committed unless they break a ledger rule,
/// in which case they are dropped and the local state is removed anyway.
/// Failures and rejections of the program are ignored.
/// `apply_data` only records changes that were committed.
pub(crate) fn apply_clear_state(
    call: &ApplicationCallFields,
    balances: &mut dyn Balances,
    sender: Address,
    app_idx: AppIndex,
    app: Option<(&AppParams, Address)>,
    apply_data: &mut ApplyData,
    evaluator: &mut dyn StateEvaluator,
) -> Result<(), ExecutionError> {
    let mut record = balances.get(&sender)?;
    if !record.app_local_states.contains_key(&app_idx) {
        return Err(ApplyError::NotOptedIn {
            addr: sender,
            app: app_idx,
        }
        .into());
    }

    if let Some((params, creator)) = app {
        match evaluator.eval(&params.clear_state_program, &*balances) {
            Ok((true, eval_delta)) => {
                match apply_eval_delta(
                    call,
                    &eval_delta,
                    params,
                    creator,
                    sender,
                    balances,
                    app_idx,
                ) {
                    Ok(()) => apply_data.eval_delta = eval_delta,
                    Err(err) if err.is_apply_error() => {
                        warn!(
                            "discarding clear-state delta of app {} for {}: {}",
                            app_idx, sender, err
                        );
                    }
                    Err(err) => return Err(err),
                }
            }
            Ok((false, _)) => {
                debug!("clear-state program of app {} rejected {}", app_idx, sender);
            }
            Err(err) => {
                debug!("clear-state program of app {} failed: {}", app_idx, err);
            }
        }

        // the program may have changed the sender record
        record = balances.get(&sender)?;
    }

    let local_state_schema = record
        .app_local_states
        .remove(&app_idx)
        .map(|local_state| local_state.schema)
        .unwrap_or_default();
    record.total_app_schema = record.total_app_schema.sub_schema(local_state_schema);

    balances.put(record)?;
    debug!("{} cleared its state of app {}", sender, app_idx);
    Ok(())
}

/// Removes the local state of `sender` after its approval program accepted it
pub(crate) fn close_out(
    balances: &mut dyn Balances,
    sender: Address,
    app_idx: AppIndex,
) -> Result<(), ExecutionError> {
    let mut record = balances.get(&sender)?;

    let local_state = record
        .app_local_states
        .remove(&app_idx)
        .ok_or(ApplyError::NotOptedIn {
            addr: sender,
            app: app_idx,
        })?;
    record.total_app_schema = record.total_app_schema.sub_schema(local_state.schema);

    balances.put(record)?;
    debug!("{} closed out of app {}", sender, app_idx);
    Ok(())
}

/// Deletes the parameters of an application.
/// Local states of opted-in accounts are left alone: they can still be cleared.
pub(crate) fn delete_application(
    balances: &mut dyn Balances,
    creator: Address,
    app_idx: AppIndex,
) -> Result<(), ExecutionError> {
    let mut record = balances.get(&creator)?;

    let global_state_schema = record
        .app_params
        .remove(&app_idx)
        .map(|params| params.state_schemas.global_state_schema)
        .unwrap_or_default();
    record.total_app_schema = record.total_app_schema.sub_schema(global_state_schema);

    balances.put_with_creatable(record, None, Some(CreatableLocator::app(creator, app_idx)))?;
    debug!("app {} of {} deleted", app_idx, creator);
    Ok(())
}

/// Replaces both programs of an application. Schemas cannot change.
pub(crate) fn update_application(
    call: &ApplicationCallFields,
    balances: &mut dyn Balances,
    creator: Address,
    app_idx: AppIndex,
    preparer: &ProgramPreparer,
) -> Result<(), ExecutionError> {
    let approval_program = preparer.prepare_program(&call.approval_program)?;
    let clear_state_program = preparer.prepare_program(&call.clear_state_program)?;

    let mut record = balances.get(&creator)?;
    let params = record.app_params.get_mut(&app_idx).ok_or_else(|| {
        LedgerError::ContainerInconsistency(format!(
            "app {} not found in account {}",
            app_idx, creator
        ))
    })?;
    params.approval_program = approval_program;
    params.clear_state_program = clear_state_program;

    balances.put(record)?;
    debug!("app {} of {} updated", app_idx, creator);
    Ok(())
}
