//! The Factory pattern: interchangeable cache stores behind one contract.
//!
//! Run with: cargo run --bin factory

use colored::Colorize;
use pattern_lab::factory::CacheFactory;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("{}", "=== Factory: cache stores by type tag ===".bold());

    let factory = CacheFactory;

    let mut memory = factory.create_from_tag("memory")?;
    memory.set("m", "1");
    println!("Memory cache value: {:?}", memory.get("m"));

    let mut distributed = factory.create_from_tag("distributed")?;
    distributed.set("d", "2");
    println!("Distributed cache value: {:?}", distributed.get("d"));

    println!("\n{}", "=== Unknown tags are rejected ===".bold());
    match factory.create_from_tag("unknown") {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("factory refused: {err}"),
    }

    Ok(())
}
