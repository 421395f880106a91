// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::eval_delta::apply_eval_delta;
use crate::lifecycle::{
    apply_clear_state, apply_opt_in, close_out, create_application, delete_application,
    get_app_params, update_application,
};
use crate::program::{check_programs, ProgramPreparer};
use appcall_execution_exports::{ApplyError, ExecutionError, StateEvaluator};
use appcall_ledger_exports::Balances;
use appcall_models::{
    ApplicationCallFields, ApplyData, EvalDelta, OnCompletion, TransactionHeader,
};

/// Applies an application call transaction to a ledger view.
///
/// On success, `apply_data.eval_delta` holds the key/value changes that were committed,
/// so that consumers don't have to run the programs again to learn them.
/// On failure it is left empty. Changes already written to `balances` by a failed call must be
/// discarded by the caller.
///
/// # Arguments
/// * `call`: fields of the call
/// * `header`: header of the transaction carrying the call
/// * `balances`: ledger view
/// * `apply_data`: effects record
/// * `txn_counter`: number of transactions applied before this one, used to index a new application
/// * `evaluator`: program interpreter
/// * `preparer`: converts programs set by the call
pub fn application_call(
    call: &ApplicationCallFields,
    header: &TransactionHeader,
    balances: &mut dyn Balances,
    apply_data: &mut ApplyData,
    txn_counter: u64,
    evaluator: &mut dyn StateEvaluator,
    preparer: &ProgramPreparer,
) -> Result<(), ExecutionError> {
    let res = apply_call(
        call,
        header,
        balances,
        apply_data,
        txn_counter,
        evaluator,
        preparer,
    );
    if res.is_err() {
        apply_data.eval_delta = EvalDelta::default();
    }
    res
}

fn apply_call(
    call: &ApplicationCallFields,
    header: &TransactionHeader,
    balances: &mut dyn Balances,
    apply_data: &mut ApplyData,
    txn_counter: u64,
    evaluator: &mut dyn StateEvaluator,
    preparer: &ProgramPreparer,
) -> Result<(), ExecutionError> {
    let sender = header.sender;
    let creating = call.application_id.is_creation();

    let app_idx = if creating {
        create_application(call, balances, sender, txn_counter, preparer)?
    } else {
        call.application_id
    };

    // a deleted application can only be cleared out of
    let app = get_app_params(&*balances, app_idx)?;
    if app.is_none() && call.on_completion != OnCompletion::ClearState {
        return Err(ApplyError::AppDoesNotExist(app_idx).into());
    }

    // schemas are empty if the application does not exist: its programs never run in that case
    let schemas = app
        .as_ref()
        .map(|(params, _)| params.state_schemas)
        .unwrap_or_default();
    evaluator.init_ledger(&*balances, app_idx, schemas)?;

    // programs being installed must be valid and cheap enough
    if creating || call.on_completion == OnCompletion::UpdateApplication {
        let max_cost = balances.consensus_params().max_app_program_cost;
        check_programs(call, evaluator, max_cost)?;
    }

    // clearing out does not run the approval program
    if call.on_completion == OnCompletion::ClearState {
        return apply_clear_state(
            call,
            balances,
            sender,
            app_idx,
            app.as_ref().map(|(params, creator)| (params, *creator)),
            apply_data,
            evaluator,
        );
    }

    let (params, creator) = app.ok_or(ApplyError::AppDoesNotExist(app_idx))?;

    // the local state must exist before the approval program runs so that it can initialize it
    if call.on_completion == OnCompletion::OptIn {
        apply_opt_in(balances, sender, app_idx, &params)?;
    }

    let (approved, eval_delta) = evaluator.eval(&params.approval_program, &*balances)?;
    if !approved {
        return Err(ExecutionError::Rejected);
    }

    apply_eval_delta(
        call,
        &eval_delta,
        &params,
        creator,
        sender,
        balances,
        app_idx,
    )?;

    match call.on_completion {
        OnCompletion::NoOp | OnCompletion::OptIn | OnCompletion::ClearState => {}
        OnCompletion::CloseOut => close_out(balances, sender, app_idx)?,
        OnCompletion::DeleteApplication => delete_application(balances, creator, app_idx)?,
        OnCompletion::UpdateApplication => {
            update_application(call, balances, creator, app_idx, preparer)?
        }
    }

    apply_data.eval_delta = eval_delta;
    Ok(())
}
