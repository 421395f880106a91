// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This module provides the structures used to provide configuration parameters to the Execution system

use appcall_models::ConsensusParams;

/// Execution module configuration
#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    /// consensus parameters handed to the ledger view
    pub consensus_params: ConsensusParams,
    /// programs of this version are converted before being stored
    pub legacy_program_version: u8,
    /// version legacy programs are converted to
    pub converted_program_version: u8,
    /// programs with a version lower or equal to this one are obsolete
    pub obsolete_program_version: u8,
    /// whether installing obsolete programs is rejected
    pub disallow_obsolete_programs: bool,
}
