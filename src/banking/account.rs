use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An account number and its balance. Read-only once opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    account_number: String,
    balance: Decimal,
}

impl BankAccount {
    pub fn new(account_number: impl Into<String>, balance: Decimal) -> Self {
        Self {
            account_number: account_number.into(),
            balance,
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn view_account(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The account {} has a balance of {}",
            self.account_number, self.balance
        )
    }
}
