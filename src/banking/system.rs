//! Session set plus balance-guarded transfers.

use crate::banking::account::BankAccount;
use crate::banking::config::BankingConfig;
use crate::banking::error::TransferViolation;
use crate::banking::fees::TransactionType;
use crate::banking::sink::{StatusEvent, StatusSink, TracingSink};
use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Authenticates configured users and checks transfers against each
/// sender's nominal balance.
///
/// Balances are nominal: a transfer is checked against the opening balance
/// and never posted, so every accepted transfer sees the same balance.
///
/// # Example
///
/// ```rust
/// use gatekeep::banking::{BankingSystem, MemorySink, BankingConfig};
/// use rust_decimal::Decimal;
///
/// let mut bank = BankingSystem::with_sink(BankingConfig::default(), MemorySink::new());
///
/// assert!(bank.authenticate("user123", "pass123"));
/// assert!(!bank.authenticate("user123", "pass123"));
/// assert_eq!(
///     bank.sink().last().unwrap().to_string(),
///     "User user123 is already logged in."
/// );
///
/// assert!(bank.transfer_money("user123", "receiver", Decimal::new(900, 0), "express"));
/// assert!(!bank.transfer_money("user123", "receiver", Decimal::new(980, 0), "express"));
/// ```
#[derive(Debug)]
pub struct BankingSystem<K: StatusSink = TracingSink> {
    config: BankingConfig,
    accounts: HashMap<String, BankAccount>,
    logged_in: BTreeSet<String>,
    sink: K,
}

impl BankingSystem<TracingSink> {
    /// System with the default credentials and fee schedule, logging through `tracing`.
    pub fn new() -> Self {
        Self::with_config(BankingConfig::default())
    }

    pub fn with_config(config: BankingConfig) -> Self {
        Self::with_sink(config, TracingSink)
    }
}

impl Default for BankingSystem<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: StatusSink> BankingSystem<K> {
    pub fn with_sink(config: BankingConfig, sink: K) -> Self {
        let accounts = config
            .users
            .iter()
            .map(|user| {
                (
                    user.username.clone(),
                    BankAccount::new(user.account_number.clone(), config.opening_balance),
                )
            })
            .collect();

        Self {
            config,
            accounts,
            logged_in: BTreeSet::new(),
            sink,
        }
    }

    pub fn config(&self) -> &BankingConfig {
        &self.config
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn account(&self, username: &str) -> Option<&BankAccount> {
        self.accounts.get(username)
    }

    pub fn is_logged_in(&self, username: &str) -> bool {
        self.logged_in.contains(username)
    }

    /// Logged-in usernames in lexical order.
    pub fn logged_in_users(&self) -> impl Iterator<Item = &str> {
        self.logged_in.iter().map(String::as_str)
    }

    /// Open a session for `username`.
    ///
    /// Returns `false` for unknown credentials or when the user already has
    /// a session; the session set never holds a username twice.
    pub fn authenticate(&mut self, username: &str, password: &str) -> bool {
        let valid = self
            .config
            .users
            .iter()
            .any(|user| user.username == username && user.password == password);

        let event = if !valid {
            StatusEvent::AuthenticationFailed {
                username: username.to_string(),
            }
        } else if !self.logged_in.insert(username.to_string()) {
            StatusEvent::AlreadyLoggedIn {
                username: username.to_string(),
            }
        } else {
            StatusEvent::Authenticated {
                username: username.to_string(),
            }
        };

        let accepted = matches!(event, StatusEvent::Authenticated { .. });
        self.sink.emit(&event);
        accepted
    }

    /// Close the session for `username`. Returns `false` if none was open.
    pub fn logout(&mut self, username: &str) -> bool {
        let removed = self.logged_in.remove(username);
        let event = if removed {
            StatusEvent::LoggedOut {
                username: username.to_string(),
            }
        } else {
            StatusEvent::NotLoggedIn {
                username: username.to_string(),
            }
        };
        self.sink.emit(&event);
        removed
    }

    /// Check a transfer without recording it, accumulating every violation.
    ///
    /// On success the value is the parsed transaction type and the fee the
    /// transfer would be charged.
    pub fn validate_transfer(
        &self,
        sender: &str,
        amount: Decimal,
        kind: &str,
    ) -> Validation<(TransactionType, Decimal), NonEmptyVec<TransferViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<TransferViolation>>> = Vec::new();

        checks.push(if self.is_logged_in(sender) {
            Validation::success(())
        } else {
            Validation::fail(TransferViolation::NotAuthenticated {
                sender: sender.to_string(),
            })
        });

        checks.push(if amount > Decimal::ZERO {
            Validation::success(())
        } else {
            Validation::fail(TransferViolation::NonPositiveAmount { amount })
        });

        let priced = self.price(sender, amount, kind);
        checks.push(match &priced {
            Ok(_) => Validation::success(()),
            Err(violation) => Validation::fail(violation.clone()),
        });

        match (Validation::all_vec(checks), priced) {
            (Validation::Success(_), Ok(priced)) => Validation::success(priced),
            (Validation::Success(_), Err(violation)) => Validation::fail(violation),
            (Validation::Failure(violations), _) => Validation::Failure(violations),
        }
    }

    /// Parse `kind`, compute the fee and compare `amount + fee` with the
    /// sender's balance. Arithmetic overflow is reported as out of range.
    fn price(
        &self,
        sender: &str,
        amount: Decimal,
        kind: &str,
    ) -> Result<(TransactionType, Decimal), TransferViolation> {
        let kind = kind
            .parse::<TransactionType>()
            .map_err(|err| TransferViolation::InvalidTransactionType { kind: err.input })?;

        let (fee, required) = self
            .config
            .fees
            .fee_for(kind, amount)
            .and_then(|fee| amount.checked_add(fee).map(|required| (fee, required)))
            .ok_or(TransferViolation::AmountOutOfRange { amount })?;

        let available = self
            .account(sender)
            .map_or(Decimal::ZERO, BankAccount::balance);
        if required > available {
            return Err(TransferViolation::InsufficientFunds {
                required,
                available,
            });
        }

        Ok((kind, fee))
    }

    /// Check and record a transfer of `amount` from `sender` to `receiver`.
    ///
    /// Nothing is posted to either account. Returns `true` only when
    /// [`validate_transfer`](Self::validate_transfer) finds no violation.
    /// Every violation is reported to the sink.
    pub fn transfer_money(
        &mut self,
        sender: &str,
        receiver: &str,
        amount: Decimal,
        kind: &str,
    ) -> bool {
        match self.validate_transfer(sender, amount, kind) {
            Validation::Success((kind, fee)) => {
                self.sink.emit(&StatusEvent::TransferCompleted {
                    sender: sender.to_string(),
                    receiver: receiver.to_string(),
                    amount,
                    kind,
                    fee,
                });
                true
            }
            Validation::Failure(violations) => {
                for violation in violations.iter() {
                    self.sink
                        .emit(&StatusEvent::TransferRejected(violation.clone()));
                }
                false
            }
        }
    }
}
