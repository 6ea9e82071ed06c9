//! Session authentication and balance-guarded transfers.
//!
//! [`BankingSystem`] owns the set of logged-in usernames and one nominal
//! [`BankAccount`] per configured user. Refusals are values (`false`) with a
//! status event sent to the system's [`StatusSink`]; nothing here panics or
//! returns an error for an expected guard failure.
//!
//! Transfer checks use `Validation` so that a refused transfer reports every
//! violation at once rather than only the first.

mod account;
mod config;
mod error;
mod fees;
mod sink;
mod system;

pub use account::BankAccount;
pub use config::{BankingConfig, UserCredentials};
pub use error::{ConfigError, TransactionTypeError, TransferViolation};
pub use fees::{Fee, FeeSchedule, TransactionType};
pub use sink::{MemorySink, StatusEvent, StatusSink, TracingSink};
pub use system::BankingSystem;
