// Copyright (c) 2022 MASSA LABS <info@massa.net>

use super::constants::*;
use serde::{Deserialize, Serialize};

/// Consensus parameters relevant to application calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusParams {
    /// maximum number of applications created per account
    pub max_apps_created: usize,
    /// maximum number of applications opted into per account
    pub max_apps_opted_in: usize,
    /// maximum static cost of a program
    pub max_app_program_cost: u64,
    /// maximum key length in a key/value store
    pub max_app_key_len: usize,
    /// maximum bytes value length in a key/value store
    pub max_app_bytes_value_len: usize,
    /// base minimum balance
    pub min_balance: u64,
    /// minimum balance per created application
    pub app_flat_params_min_balance: u64,
    /// minimum balance per opted-in application
    pub app_flat_opt_in_min_balance: u64,
    /// minimum balance per schema entry
    pub schema_min_balance_per_entry: u64,
    /// extra minimum balance per uint schema entry
    pub schema_uint_min_balance: u64,
    /// extra minimum balance per bytes schema entry
    pub schema_bytes_min_balance: u64,
}

impl Default for ConsensusParams {
    fn default() -> Self {
        ConsensusParams {
            max_apps_created: MAX_APPS_CREATED,
            max_apps_opted_in: MAX_APPS_OPTED_IN,
            max_app_program_cost: MAX_APP_PROGRAM_COST,
            max_app_key_len: MAX_APP_KEY_LEN,
            max_app_bytes_value_len: MAX_APP_BYTES_VALUE_LEN,
            min_balance: MIN_BALANCE,
            app_flat_params_min_balance: APP_FLAT_PARAMS_MIN_BALANCE,
            app_flat_opt_in_min_balance: APP_FLAT_OPT_IN_MIN_BALANCE,
            schema_min_balance_per_entry: SCHEMA_MIN_BALANCE_PER_ENTRY,
            schema_uint_min_balance: SCHEMA_UINT_MIN_BALANCE,
            schema_bytes_min_balance: SCHEMA_BYTES_MIN_BALANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_params_fall_back_to_constants() {
        let params: ConsensusParams =
            serde_json::from_str(r#"{"max_apps_created": 2, "max_app_program_cost": 50}"#)
                .unwrap();
        assert_eq!(params.max_apps_created, 2);
        assert_eq!(params.max_app_program_cost, 50);
        assert_eq!(params.max_apps_opted_in, MAX_APPS_OPTED_IN);
        assert_eq!(params.min_balance, MIN_BALANCE);
    }
}
