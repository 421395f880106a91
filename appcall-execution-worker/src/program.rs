// Copyright (c) 2022 MASSA LABS <info@massa.net>

use appcall_execution_exports::{
    ApplyError, ExecutionConfig, ExecutionError, ProgramConverter, ProgramKind, StateEvaluator,
};
use appcall_models::ApplicationCallFields;

/// Prepares programs before they are stored in application parameters.
/// The first byte of a program is its version.
pub struct ProgramPreparer {
    /// programs of this version are converted
    legacy_program_version: u8,
    /// version legacy programs are converted to
    converted_program_version: u8,
    /// highest obsolete version
    obsolete_program_version: u8,
    /// whether obsolete programs are rejected
    disallow_obsolete_programs: bool,
    /// bytecode converter
    converter: Box<dyn ProgramConverter>,
}

impl ProgramPreparer {
    /// Creates a preparer from the execution configuration
    pub fn new(config: &ExecutionConfig, converter: Box<dyn ProgramConverter>) -> Self {
        ProgramPreparer {
            legacy_program_version: config.legacy_program_version,
            converted_program_version: config.converted_program_version,
            obsolete_program_version: config.obsolete_program_version,
            disallow_obsolete_programs: config.disallow_obsolete_programs,
            converter,
        }
    }

    /// Converts a legacy program, rejects an obsolete one if configured to,
    /// and passes anything else (including an empty program) through.
    pub fn prepare_program(&self, bytecode: &[u8]) -> Result<Vec<u8>, ExecutionError> {
        let version = match bytecode.first() {
            Some(version) => *version,
            None => return Ok(Vec::new()),
        };
        if version == self.legacy_program_version {
            return self
                .converter
                .convert(bytecode, self.converted_program_version);
        }
        if self.disallow_obsolete_programs && version <= self.obsolete_program_version {
            return Err(ApplyError::ObsoleteProgram(version).into());
        }
        Ok(bytecode.to_vec())
    }
}

/// Statically checks both programs of a call and bounds their cost
pub fn check_programs(
    call: &ApplicationCallFields,
    evaluator: &mut dyn StateEvaluator,
    max_cost: u64,
) -> Result<(), ExecutionError> {
    for (kind, program) in [
        (ProgramKind::Approval, &call.approval_program),
        (ProgramKind::ClearState, &call.clear_state_program),
    ] {
        let cost = evaluator
            .check(program)
            .map_err(|err| ExecutionError::CheckError {
                kind,
                reason: err.to_string(),
            })?;
        if cost > max_cost {
            return Err(ApplyError::ProgramTooCostly {
                kind,
                cost,
                max: max_cost,
            }
            .into());
        }
    }
    Ok(())
}
