//! The Prototype pattern: new objects by cloning a template.
//!
//! Run with: cargo run --bin prototype

use std::path::PathBuf;

use colored::Colorize;
use pattern_lab::prototype::{Certificate, Page, PaymentPage};

fn main() {
    env_logger::init();
    println!("{}", "=== Prototype: cloning a payment page ===".bold());

    let prototype = PaymentPage {
        provider: "MasterCard".into(),
        token: "eyJhbGciOiJIUzI1NiJ...".into(),
        certificate: Certificate {
            path: PathBuf::from("/etc/ssl/payments.pem"),
            fingerprint: "ab:cd:ef".into(),
        },
    };

    let mut clone = prototype.clone();
    println!("Prototype: {}", prototype.describe());
    println!("Clone:     {}", clone.describe());

    // The clone is independent: changing it leaves the prototype intact.
    clone.provider = "Visa".into();
    println!("\nAfter switching the clone to another provider:");
    println!("Prototype: {}", prototype.describe());
    println!("Clone:     {}", clone.describe());

    // Cloning also works behind the trait, concrete type unknown.
    let boxed: Box<dyn Page> = Box::new(prototype);
    let boxed_clone = boxed.clone_page();
    println!("\nTrait-object clone: {}", boxed_clone.describe());
}
