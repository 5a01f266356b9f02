//! The Singleton pattern: one shared instance, constructed lazily.
//!
//! Run with: cargo run --bin singleton

use colored::Colorize;
use pattern_lab::singleton;

fn main() {
    env_logger::init();
    println!("{}", "=== Singleton: shared cache client ===".bold());

    let registry = singleton::shared();

    let client = registry.get_or_init("192.168.1.1", 5000);
    println!("Cache client settings: {client:?}");

    // Different arguments, same instance: later calls are ignored.
    let client = registry.get_or_init("192.168.2.2", 6000);
    println!("Cache client settings: {client:?}");
}
