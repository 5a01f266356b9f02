//! The Decorator pattern: add behaviour to an object by wrapping it.
//!
//! Each decorator implements the same [`Sender`] contract as the object it
//! wraps, transforms the message, then delegates inward. Decorators nest,
//! and the order matters: the outermost layer's transformation is applied
//! first, so `EncryptedSender(CompressedSender(EmailSender))` delivers
//! `"Encrypted Compressed <msg>"`.
//!
//! `send` returns the payload as delivered, which makes the composition
//! order observable to callers and tests.

/// The capability every layer of the chain satisfies.
pub trait Sender {
    /// Delivers `msg` and returns the payload exactly as delivered.
    fn send(&self, msg: &str) -> String;
}

/// The base capability: delivers the message unchanged.
pub struct EmailSender;

impl Sender for EmailSender {
    fn send(&self, msg: &str) -> String {
        log::info!("sent email: {msg}");
        msg.to_owned()
    }
}

/// Prefixes the message with a compression tag, then delegates.
pub struct CompressedSender<S> {
    inner: S,
}

impl<S: Sender> CompressedSender<S> {
    pub fn new(inner: S) -> Self {
        CompressedSender { inner }
    }
}

impl<S: Sender> Sender for CompressedSender<S> {
    fn send(&self, msg: &str) -> String {
        self.inner.send(&format!("Compressed {msg}"))
    }
}

/// Prefixes the message with an encryption tag, then delegates.
pub struct EncryptedSender<S> {
    inner: S,
}

impl<S: Sender> EncryptedSender<S> {
    pub fn new(inner: S) -> Self {
        EncryptedSender { inner }
    }
}

impl<S: Sender> Sender for EncryptedSender<S> {
    fn send(&self, msg: &str) -> String {
        self.inner.send(&format!("Encrypted {msg}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_base_sender_delivers_unchanged() {
        assert_eq!(EmailSender.send("MESSAGE"), "MESSAGE");
    }

    #[test]
    fn a_single_layer_prefixes_once() {
        let sender = CompressedSender::new(EmailSender);
        assert_eq!(sender.send("MESSAGE"), "Compressed MESSAGE");
    }

    #[test]
    fn nested_layers_apply_outermost_first() {
        let sender = EncryptedSender::new(CompressedSender::new(EmailSender));
        assert_eq!(sender.send("MESSAGE"), "Encrypted Compressed MESSAGE");
    }

    #[test]
    fn composition_order_is_significant() {
        let enc_then_comp = CompressedSender::new(EncryptedSender::new(EmailSender));
        let comp_then_enc = EncryptedSender::new(CompressedSender::new(EmailSender));

        assert_eq!(enc_then_comp.send("x"), "Compressed Encrypted x");
        assert_eq!(comp_then_enc.send("x"), "Encrypted Compressed x");
    }
}
