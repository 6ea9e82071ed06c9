//! Transaction types and the fee schedule.

use crate::banking::error::TransactionTypeError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Regular,
    Express,
    Scheduled,
}

impl TransactionType {
    pub const ALL: [TransactionType; 3] = [Self::Regular, Self::Express, Self::Scheduled];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Express => "express",
            Self::Scheduled => "scheduled",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = TransactionTypeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == input)
            .ok_or_else(|| TransactionTypeError {
                input: input.to_string(),
            })
    }
}

/// A single fee rule: a flat charge, or a percentage of the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fee {
    Flat(Decimal),
    /// Whole percent, e.g. `1` means 1 %.
    Percent(Decimal),
}

impl Fee {
    /// Fee for `amount`, or `None` when the computation overflows.
    pub fn amount_for(self, amount: Decimal) -> Option<Decimal> {
        match self {
            Self::Flat(fee) => Some(fee),
            Self::Percent(rate) => amount
                .checked_mul(rate)
                .and_then(|scaled| scaled.checked_div(Decimal::ONE_HUNDRED)),
        }
    }

    pub(crate) fn is_negative(self) -> bool {
        match self {
            Self::Flat(value) | Self::Percent(value) => value < Decimal::ZERO,
        }
    }
}

/// Fee rule per transaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    pub regular: Fee,
    pub express: Fee,
    pub scheduled: Fee,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            regular: Fee::Percent(Decimal::TWO),
            express: Fee::Flat(Decimal::new(49, 0)),
            scheduled: Fee::Percent(Decimal::ONE),
        }
    }
}

impl FeeSchedule {
    pub fn fee(&self, kind: TransactionType) -> Fee {
        match kind {
            TransactionType::Regular => self.regular,
            TransactionType::Express => self.express,
            TransactionType::Scheduled => self.scheduled,
        }
    }

    /// Fee charged for transferring `amount` as `kind`, `None` on overflow.
    pub fn fee_for(&self, kind: TransactionType, amount: Decimal) -> Option<Decimal> {
        self.fee(kind).amount_for(amount)
    }
}
