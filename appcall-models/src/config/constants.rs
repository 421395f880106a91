// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! DEFAULT VALUES USED TO INITIALIZE DIVERS CONFIGURATIONS STRUCTURES
//!
//! These values are the hard-coded values that make sense to never be modified
//! by a user. They are passed with dependency injection in a config parameter
//! to each component, which keeps unit tests free to override them.

/// Maximum number of applications a single account can create
pub const MAX_APPS_CREATED: usize = 10;
/// Maximum number of applications a single account can opt into
pub const MAX_APPS_OPTED_IN: usize = 10;
/// Maximum statically computed cost of an approval or clear-state program
pub const MAX_APP_PROGRAM_COST: u64 = 700;
/// Maximum length of a key in an application key/value store
pub const MAX_APP_KEY_LEN: usize = 64;
/// Maximum length of a byte string value in an application key/value store
pub const MAX_APP_BYTES_VALUE_LEN: usize = 64;

/// Base minimum balance of any account, in micro-units
pub const MIN_BALANCE: u64 = 100_000;
/// Minimum balance added for each created application
pub const APP_FLAT_PARAMS_MIN_BALANCE: u64 = 100_000;
/// Minimum balance added for each opted-in application
pub const APP_FLAT_OPT_IN_MIN_BALANCE: u64 = 100_000;
/// Minimum balance added for each schema entry, whatever its type
pub const SCHEMA_MIN_BALANCE_PER_ENTRY: u64 = 25_000;
/// Extra minimum balance added for each uint schema entry
pub const SCHEMA_UINT_MIN_BALANCE: u64 = 3_500;
/// Extra minimum balance added for each bytes schema entry
pub const SCHEMA_BYTES_MIN_BALANCE: u64 = 25_000;

/// Program version that is converted before being stored
pub const LEGACY_PROGRAM_VERSION: u8 = 3;
/// Version legacy programs are converted to
pub const CONVERTED_PROGRAM_VERSION: u8 = 2;
/// Programs with a version lower or equal to this one are obsolete
pub const OBSOLETE_PROGRAM_VERSION: u8 = 2;
/// Whether installing obsolete programs is rejected
pub const DISALLOW_OBSOLETE_PROGRAMS: bool = false;
