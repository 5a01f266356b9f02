//! The Proxy pattern: a caching client in front of a product API.
//!
//! Run with: cargo run --bin proxy
//! (set RUST_LOG=debug to see the cache-hit telemetry)

use colored::Colorize;
use pattern_lab::proxy::{CachingProductClient, ProductApi};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("{}", "=== Proxy: read-through product cache ===".bold());

    let client = CachingProductClient::new(ProductApi);

    let product = client.get(1)?;
    println!("First lookup:  {product:?}");

    // Same id again: served from the cache, no second API call.
    let product = client.get(1)?;
    println!("Second lookup: {product:?}");

    println!("Products cached: {}", client.len());

    Ok(())
}
