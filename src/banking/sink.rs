//! Status events emitted by the banking system and the sinks receiving them.
//!
//! The sink is the external collaborator of [`BankingSystem`](super::BankingSystem):
//! production code logs through `tracing`, tests substitute a [`MemorySink`].

use crate::banking::error::TransferViolation;
use crate::banking::fees::TransactionType;
use rust_decimal::Decimal;
use std::fmt;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    Authenticated { username: String },
    AuthenticationFailed { username: String },
    AlreadyLoggedIn { username: String },
    LoggedOut { username: String },
    NotLoggedIn { username: String },
    TransferRejected(TransferViolation),
    TransferCompleted {
        sender: String,
        receiver: String,
        amount: Decimal,
        kind: TransactionType,
        fee: Decimal,
    },
}

impl StatusEvent {
    /// Whether the event reports a refused request.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed { .. }
                | Self::AlreadyLoggedIn { .. }
                | Self::NotLoggedIn { .. }
                | Self::TransferRejected(_)
        )
    }
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticated { username } => {
                write!(f, "User {username} authenticated successfully.")
            }
            Self::AuthenticationFailed { .. } => f.write_str("Authentication failed."),
            Self::AlreadyLoggedIn { username } => write!(f, "User {username} is already logged in."),
            Self::LoggedOut { username } => write!(f, "User {username} logged out."),
            Self::NotLoggedIn { username } => write!(f, "User {username} is not logged in."),
            Self::TransferRejected(violation) => write!(f, "{violation}"),
            Self::TransferCompleted {
                sender,
                receiver,
                amount,
                kind,
                fee,
            } => write!(
                f,
                "Transfer of {amount} ({kind}) from {sender} to {receiver} processed successfully. Fee: {fee}."
            ),
        }
    }
}

/// Receives every status event the banking system emits.
pub trait StatusSink {
    fn emit(&mut self, event: &StatusEvent);
}

/// Logs events with `tracing`: successes at `info`, refusals at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl StatusSink for TracingSink {
    fn emit(&mut self, event: &StatusEvent) {
        if event.is_failure() {
            warn!(event = ?event, "{event}");
        } else {
            info!(event = ?event, "{event}");
        }
    }
}

/// Keeps events in memory, for inspection in tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Vec<StatusEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[StatusEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&StatusEvent> {
        self.events.last()
    }

    /// Rendered messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl StatusSink for MemorySink {
    fn emit(&mut self, event: &StatusEvent) {
        self.events.push(event.clone());
    }
}
