// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines testing tools related to the initial ledger

use appcall_models::{
    AccountRecord, Address, AppIndex, AppParams, KeyValue, StateSchema, StateSchemas, StateValue,
};
use std::collections::BTreeMap;
use std::io::Seek;
use tempfile::NamedTempFile;

/// Sample initial ledger: one creator holding one application, and one funded account.
///
/// # Returns
/// The records, the creator address and the application index
pub fn get_initials() -> (BTreeMap<Address, AccountRecord>, Address, AppIndex) {
    let creator = Address::compute_from(b"creator");
    let user = Address::compute_from(b"user");
    let app_idx = AppIndex(1);

    let global_state_schema = StateSchema::new(1, 1);
    let mut creator_record = AccountRecord::new(creator);
    creator_record.balance = 1_000_000;
    creator_record.app_params.insert(
        app_idx,
        AppParams {
            approval_program: vec![2, 0x20],
            clear_state_program: vec![2, 0x21],
            state_schemas: StateSchemas {
                local_state_schema: StateSchema::new(1, 0),
                global_state_schema,
            },
            global_state: [(b"count".to_vec(), StateValue::Uint(1))]
                .into_iter()
                .collect::<KeyValue>(),
        },
    );
    creator_record.total_app_schema = global_state_schema;

    let mut user_record = AccountRecord::new(user);
    user_record.balance = 500_000;

    let initials = BTreeMap::from([(creator, creator_record), (user, user_record)]);
    (initials, creator, app_idx)
}

/// Writes records to a temporary initial ledger file
pub fn write_initial_ledger(records: &BTreeMap<Address, AccountRecord>) -> NamedTempFile {
    let file = NamedTempFile::new().expect("could not create temporary ledger file");
    serde_json::to_writer_pretty(file.as_file(), records).expect("unable to write ledger file");
    file.as_file()
        .rewind()
        .expect("could not seek file");
    file
}
