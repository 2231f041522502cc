// Simulation config - harness input describing a ledger and a transfer script

use crate::identity::{Address, Keypair};
use crate::ledger::{serde_decimal, Amount, LedgerConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One scripted transfer between named accounts
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferSpec {
    pub from: String,
    pub to: String,
    #[serde(with = "serde_decimal")]
    pub amount: Amount,
}

/// Everything needed to stand up a ledger and replay transfers against it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(with = "serde_decimal")]
    pub initial_supply: Amount,
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub transfers: Vec<TransferSpec>,
}

fn default_owner() -> String {
    "owner".to_string()
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_supply: Amount::zero(),
            owner: default_owner(),
            ledger: LedgerConfig::default(),
            transfers: Vec::new(),
        }
    }
}

impl SimulationConfig {
    /// Load from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse from a JSON string
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Deterministic keypair for a named harness account
pub fn account_keypair(name: &str) -> Keypair {
    Keypair::from_seed(name.as_bytes())
}

/// Deterministic address for a named harness account
pub fn account_address(name: &str) -> Address {
    account_keypair(name).address()
}
