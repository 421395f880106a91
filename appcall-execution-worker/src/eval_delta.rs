// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Commits the key/value changes declared by a program.
//!
//! The commit happens in two phases. The first one validates every change against clones of the
//! stores and stages the results without writing anything. The second one writes the staged stores.
//! A failure during the first phase therefore leaves the ledger view untouched.

use crate::state_delta::apply_state_delta;
use appcall_execution_exports::{ApplyError, ExecutionError};
use appcall_ledger_exports::Balances;
use appcall_models::{
    Address, AppIndex, AppLocalState, AppParams, ApplicationCallFields, EvalDelta,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Applies an `EvalDelta` to the global store of the application and to the local stores of
/// the accounts it references.
///
/// # Arguments
/// * `call`: the call, used to resolve the account indices of local deltas
/// * `eval_delta`: changes declared by the program
/// * `params`: current parameters of the application (never modified, a clone is)
/// * `creator`: holder of the global store
/// * `sender`: account at index 0
/// * `balances`: ledger view
/// * `app_idx`: application whose stores are changed
///
/// # Returns
/// `ExecutionError::ApplyError` if the changes break a ledger rule (nothing is written in that case),
/// any other error if the ledger view or the call itself is faulty.
pub fn apply_eval_delta(
    call: &ApplicationCallFields,
    eval_delta: &EvalDelta,
    params: &AppParams,
    creator: Address,
    sender: Address,
    balances: &mut dyn Balances,
    app_idx: AppIndex,
) -> Result<(), ExecutionError> {
    let consensus_params = balances.consensus_params();

    // global changes, on a clone of the params
    let new_params = if eval_delta.global_delta.is_empty() {
        None
    } else {
        let mut params = params.clone();
        eval_delta
            .global_delta
            .valid(&consensus_params)
            .map_err(|err| ApplyError::InvalidGlobalDelta(err.to_string()))?;
        apply_state_delta(&mut params.global_state, &eval_delta.global_delta);
        params
            .global_state
            .satisfies_schema(&params.state_schemas.global_state_schema)
            .map_err(|err| ApplyError::GlobalSchemaViolation {
                app: app_idx,
                reason: err.to_string(),
            })?;
        Some(params)
    };

    // local changes, staged by address
    let mut staged: BTreeMap<Address, AppLocalState> = BTreeMap::new();
    for (account_idx, delta) in eval_delta.local_deltas.iter() {
        let addr = call.address_by_index(*account_idx, sender)?;

        if staged.contains_key(&addr) {
            return Err(ApplyError::DuplicateLocalDelta(addr).into());
        }
        if delta.is_empty() {
            return Err(ApplyError::ZeroLengthLocalDelta(addr).into());
        }
        delta
            .valid(&consensus_params)
            .map_err(|err| ApplyError::InvalidLocalDelta {
                addr,
                reason: err.to_string(),
            })?;

        let record = balances.get(&addr)?;
        let mut local_state = record
            .app_local_states
            .get(&app_idx)
            .cloned()
            .ok_or(ApplyError::NotOptedIn { addr, app: app_idx })?;
        apply_state_delta(&mut local_state.key_value, delta);
        local_state
            .key_value
            .satisfies_schema(&local_state.schema)
            .map_err(|err| ApplyError::LocalSchemaViolation {
                addr,
                app: app_idx,
                reason: err.to_string(),
            })?;

        staged.insert(addr, local_state);
    }

    // everything is valid: write back.
    // The creator may also have a local delta: the two writes touch different fields.
    if let Some(new_params) = new_params {
        let mut record = balances.get(&creator)?;
        record.app_params.insert(app_idx, new_params);
        balances.put(record)?;
    }
    for (addr, local_state) in staged {
        let mut record = balances.get(&addr)?;
        record.app_local_states.insert(app_idx, local_state);
        balances.put(record)?;
    }

    debug!(
        "committed delta of app {}: {} global keys, {} local stores",
        app_idx,
        eval_delta.global_delta.len(),
        eval_delta.local_deltas.len()
    );
    Ok(())
}
