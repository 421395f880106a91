// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines a configuration structure containing all settings for the ledger system

use std::path::PathBuf;

/// Ledger configuration
#[derive(Debug, Clone, Default)]
pub struct LedgerConfig {
    /// initial ledger file: a JSON map from addresses to account records
    pub initial_ledger_path: PathBuf,
}
