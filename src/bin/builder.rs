//! The Builder pattern: assemble an HTTP request step by step.
//!
//! Run with: cargo run --bin builder

use colored::Colorize;
use pattern_lab::builder::HttpRequestBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("{}", "=== Builder: fluent HTTP request ===".bold());

    let request = HttpRequestBuilder::new()
        .method("post")
        .url("http://test.com")
        .header("Content-Type", "application/json")
        .body(r#"{"test": "value"}"#)
        .build()?;

    println!("{} {}", request.method(), request.uri());
    for (name, value) in request.headers() {
        println!("{name}: {}", value.to_str()?);
    }
    println!("\n{}", request.body());

    println!("\n{}", "=== First validation error wins ===".bold());
    let failed = HttpRequestBuilder::new()
        .method("  ")
        .url("http://test.com")
        .build();
    match failed {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("build failed as expected: {err}"),
    }

    Ok(())
}
