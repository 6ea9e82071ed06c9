//! Banking error types.

use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a [`BankingConfig`](super::BankingConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path:?}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// A transaction type label outside `regular`, `express`, `scheduled`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid transaction type '{input}'")]
pub struct TransactionTypeError {
    pub input: String,
}

/// Reasons a transfer is refused. Several may apply to the same request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransferViolation {
    #[error("Sender {sender} not authenticated.")]
    NotAuthenticated { sender: String },

    #[error("Invalid transaction type '{kind}'.")]
    InvalidTransactionType { kind: String },

    #[error("Transfer amount must be positive, got {amount}.")]
    NonPositiveAmount { amount: Decimal },

    #[error("Transfer amount {amount} is out of range.")]
    AmountOutOfRange { amount: Decimal },

    #[error("Insufficient funds: {required} required, {available} available.")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },
}
