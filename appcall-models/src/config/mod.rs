// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Hard-coded constants and the consensus parameters built from them.
//!
//! Each crate defines its own configuration structures; their `Default`
//! implementations (exported for tests) take their values from `constants.rs`.

/// hard-coded default values
pub mod constants;
mod consensus;

pub use consensus::ConsensusParams;
pub use constants::*;
