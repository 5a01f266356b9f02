//! The Facade pattern: one call in front of a multi-step startup.
//!
//! Run with: cargo run --bin facade

use colored::Colorize;
use pattern_lab::facade::EmailProviderFacade;

fn main() {
    env_logger::init();
    println!("{}", "=== Facade: starting the email provider ===".bold());

    let mut provider = EmailProviderFacade::new();
    for step in provider.start() {
        println!("{step}");
    }

    // A second start reuses the lazily built sub-resources.
    provider.start();
    let (connections, sessions) = provider.resources_built();
    println!("\nSub-resources built after two starts: {connections} connection, {sessions} session");
}
