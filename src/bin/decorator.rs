//! The Decorator pattern: layering transformations onto a sender.
//!
//! Run with: cargo run --bin decorator

use colored::Colorize;
use pattern_lab::decorator::{CompressedSender, EmailSender, EncryptedSender, Sender};

fn main() {
    env_logger::init();
    println!("{}", "=== Decorator: wrapping an email sender ===".bold());

    let msg = "MESSAGE";

    println!("Plain:                  {}", EmailSender.send(msg));
    println!(
        "Compressed:             {}",
        CompressedSender::new(EmailSender).send(msg)
    );
    println!(
        "Encrypted:              {}",
        EncryptedSender::new(EmailSender).send(msg)
    );
    println!(
        "Encrypted + compressed: {}",
        EncryptedSender::new(CompressedSender::new(EmailSender)).send(msg)
    );
}
