//! Banking Session
//!
//! Authenticates a user, attempts transfers of each type, and logs every
//! status event through `tracing`.
//!
//! Run with: RUST_LOG=info cargo run --example banking_session
//! Pass a TOML file path as the first argument to override the defaults.

use gatekeep::banking::{BankingConfig, BankingSystem};
use rust_decimal::Decimal;
use stillwater::Validation;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => BankingConfig::from_path(path)?,
        None => BankingConfig::default(),
    };
    let user = config.users[0].clone();
    let mut bank = BankingSystem::with_config(config);

    println!("=== Banking Session ===\n");

    bank.transfer_money(&user.username, "receiver", Decimal::new(100, 0), "regular");
    bank.authenticate(&user.username, "not-the-password");
    bank.authenticate(&user.username, &user.password);
    bank.authenticate(&user.username, &user.password);

    if let Some(account) = bank.account(&user.username) {
        println!("{}", account.view_account());
    }

    for (amount, kind) in [(980, "express"), (900, "express"), (500, "regular"), (10, "overnight")] {
        let amount = Decimal::new(amount, 0);
        match bank.validate_transfer(&user.username, amount, kind) {
            Validation::Success((_, fee)) => println!("{amount} {kind}: allowed, fee {fee}"),
            Validation::Failure(violations) => {
                println!("{amount} {kind}: refused ({} violation(s))", violations.len())
            }
        }
        bank.transfer_money(&user.username, "receiver", amount, kind);
    }

    bank.logout(&user.username);
    println!("\n=== Example Complete ===");
    Ok(())
}
