// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines testing tools related to the configuration

use crate::ExecutionConfig;
use appcall_models::config::*;
use appcall_models::ConsensusParams;

impl Default for ExecutionConfig {
    /// default config used for testing
    fn default() -> Self {
        Self {
            consensus_params: ConsensusParams::default(),
            legacy_program_version: LEGACY_PROGRAM_VERSION,
            converted_program_version: CONVERTED_PROGRAM_VERSION,
            obsolete_program_version: OBSOLETE_PROGRAM_VERSION,
            disallow_obsolete_programs: DISALLOW_OBSOLETE_PROGRAMS,
        }
    }
}
