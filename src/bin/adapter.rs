//! The Adapter pattern: bridging a legacy signature to a new contract.
//!
//! Run with: cargo run --bin adapter

use colored::Colorize;
use pattern_lab::adapter::{
    send_subscription_email, Email, FastEmailProvider, LegacyEmailAdapter, LegacyEmailProvider,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("{}", "=== Adapter: two providers, one contract ===".bold());

    let email = Email {
        from: "sender".into(),
        to: "receiver".into(),
    };

    let delivery = send_subscription_email(&email, &FastEmailProvider)?;
    println!("Fast provider delivered:   {} -> {}", delivery.from, delivery.to);

    let adapter = LegacyEmailAdapter::new(LegacyEmailProvider);
    let delivery = send_subscription_email(&email, &adapter)?;
    println!("Adapted legacy delivered:  {} -> {}", delivery.from, delivery.to);

    Ok(())
}
