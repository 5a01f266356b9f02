//! The Adapter pattern: make two incompatible interfaces work together.
//!
//! Client code sends email through the [`EmailProvider`] contract, which
//! takes a single [`Email`] record. The legacy provider predates that
//! contract and exposes a two-argument `send_email(from, to)` instead.
//! [`LegacyEmailAdapter`] bridges the gap by pure translation: it unpacks
//! the record and delegates, nothing more.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("email rejected by provider: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub from: String,
    pub to: String,
}

/// What a provider actually delivered, returned so callers (and tests) can
/// observe the send without capturing stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub from: String,
    pub to: String,
}

/// The contract client code is written against.
pub trait EmailProvider {
    fn send(&self, email: &Email) -> Result<Delivery, SendError>;
}

/// A provider that speaks the contract natively.
pub struct FastEmailProvider;

impl EmailProvider for FastEmailProvider {
    fn send(&self, email: &Email) -> Result<Delivery, SendError> {
        log::info!("fast provider sending {} -> {}", email.from, email.to);
        Ok(Delivery {
            from: email.from.clone(),
            to: email.to.clone(),
        })
    }
}

/// The incompatible collaborator: a two-argument signature and no notion of
/// the [`Email`] record.
pub struct LegacyEmailProvider;

impl LegacyEmailProvider {
    pub fn send_email(&self, from: &str, to: &str) -> Delivery {
        log::info!("legacy provider sending {from} -> {to}");
        Delivery {
            from: from.to_owned(),
            to: to.to_owned(),
        }
    }
}

/// Adapts [`LegacyEmailProvider`] to the [`EmailProvider`] contract.
pub struct LegacyEmailAdapter {
    inner: LegacyEmailProvider,
}

impl LegacyEmailAdapter {
    pub fn new(inner: LegacyEmailProvider) -> Self {
        LegacyEmailAdapter { inner }
    }
}

impl EmailProvider for LegacyEmailAdapter {
    fn send(&self, email: &Email) -> Result<Delivery, SendError> {
        Ok(self.inner.send_email(&email.from, &email.to))
    }
}

/// Client function that only knows the contract, not the concrete provider.
pub fn send_subscription_email(
    email: &Email,
    provider: &dyn EmailProvider,
) -> Result<Delivery, SendError> {
    provider.send(email)
}
