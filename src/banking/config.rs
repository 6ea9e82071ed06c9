//! Banking configuration: credentials, opening balance and fee schedule.
//!
//! Defaults mirror the fixed constants of the exercise: one user
//! `user123`/`pass123`, a nominal balance of 1000, regular 2 %, express
//! flat 49 and scheduled 1 %. A TOML file may override any of them.

use crate::banking::error::ConfigError;
use crate::banking::fees::FeeSchedule;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A user allowed to authenticate, and the account they own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredentials {
    pub username: String,
    pub password: String,
    pub account_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankingConfig {
    pub users: Vec<UserCredentials>,
    /// Nominal balance every account opens with.
    pub opening_balance: Decimal,
    pub fees: FeeSchedule,
}

impl Default for BankingConfig {
    fn default() -> Self {
        Self {
            users: vec![UserCredentials {
                username: "user123".to_string(),
                password: "pass123".to_string(),
                account_number: "ACC-0001".to_string(),
            }],
            opening_balance: Decimal::new(1000, 0),
            fees: FeeSchedule::default(),
        }
    }
}

impl BankingConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.users.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one user must be configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for user in &self.users {
            if user.username.is_empty() {
                return Err(ConfigError::ValidationError(
                    "usernames must not be empty".to_string(),
                ));
            }
            if !seen.insert(user.username.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate username '{}'",
                    user.username
                )));
            }
        }

        if self.opening_balance < Decimal::ZERO {
            return Err(ConfigError::ValidationError(format!(
                "opening balance must not be negative, got {}",
                self.opening_balance
            )));
        }

        let fees = [
            ("regular", self.fees.regular),
            ("express", self.fees.express),
            ("scheduled", self.fees.scheduled),
        ];
        if let Some((kind, _)) = fees.iter().find(|(_, fee)| fee.is_negative()) {
            return Err(ConfigError::ValidationError(format!(
                "{kind} fee must not be negative"
            )));
        }

        Ok(())
    }
}
