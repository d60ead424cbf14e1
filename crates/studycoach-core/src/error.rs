//! Core error types for studycoach-core.
//!
//! This module defines the error hierarchy using thiserror. Conditions the
//! design treats as silent no-ops (answer selection outside a live question,
//! averages over an empty day) are not represented here; only failures a
//! caller must react to are.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studycoach-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Progression ledger errors
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Shop catalog errors
    #[error("Shop error: {0}")]
    Shop(#[from] ShopError),

    /// Community (teams/leaderboard) errors
    #[error("Community error: {0}")]
    Community(#[from] CommunityError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Progression ledger errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A spend would overdraw the coin balance. The balance is left
    /// untouched; there are no partial spends.
    #[error("Insufficient funds: cost {cost} exceeds balance {balance}")]
    InsufficientFunds { cost: u64, balance: u64 },
}

/// Shop catalog errors.
#[derive(Error, Debug)]
pub enum ShopError {
    /// No catalog item with this id
    #[error("Unknown shop item: {0}")]
    UnknownItem(String),

    /// Purchase attempted on an item already owned
    #[error("Item already owned: {0}")]
    AlreadyOwned(String),

    /// Equip attempted on an item not yet owned
    #[error("Item not owned: {0}")]
    NotOwned(String),
}

/// Community errors.
#[derive(Error, Debug)]
pub enum CommunityError {
    /// Team creation requires a non-blank name
    #[error("Team name must not be empty")]
    EmptyTeamName,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Rejected configuration value
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    /// Could not resolve the platform configuration directory
    #[error("Could not determine the configuration directory")]
    NoConfigDir,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
