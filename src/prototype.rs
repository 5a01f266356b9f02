//! The Prototype pattern: create new objects by cloning an existing one.
//!
//! Useful when constructing a fresh instance is expensive (the
//! [`PaymentPage`] here stands for something assembled from a slow database
//! lookup). The clone copies every field and shares no mutable backing
//! state with the original, so either can change afterwards without
//! affecting the other.

use std::path::PathBuf;

/// A certificate on disk, identified by its fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub path: PathBuf,
    pub fingerprint: String,
}

/// The contract cloneable pages satisfy. Object-safe, so heterogeneous
/// collections of pages can be duplicated without knowing concrete types.
pub trait Page {
    fn clone_page(&self) -> Box<dyn Page>;
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentPage {
    pub provider: String,
    pub token: String,
    pub certificate: Certificate,
}

impl Page for PaymentPage {
    fn clone_page(&self) -> Box<dyn Page> {
        // Field-by-field copy; the derived Clone does exactly that.
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!(
            "PaymentPage via {} (token {}, certificate {})",
            self.provider,
            self.token,
            self.certificate.path.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prototype() -> PaymentPage {
        PaymentPage {
            provider: "MasterCard".into(),
            token: "eyJhbGciOiJIUzI1NiJ...".into(),
            certificate: Certificate {
                path: PathBuf::from("/etc/ssl/payments.pem"),
                fingerprint: "ab:cd:ef".into(),
            },
        }
    }

    #[test]
    fn clone_equals_the_original() {
        let original = prototype();
        let clone = original.clone();
        assert_eq!(clone, original);
    }

    #[test]
    fn mutating_the_clone_leaves_the_original_untouched() {
        let original = prototype();
        let mut clone = original.clone();

        clone.provider = "Visa".into();
        clone.certificate.fingerprint = "00:00:00".into();

        assert_eq!(original.provider, "MasterCard");
        assert_eq!(original.certificate.fingerprint, "ab:cd:ef");
        assert_ne!(clone, original);
    }

    #[test]
    fn pages_clone_behind_the_trait() {
        let original: Box<dyn Page> = Box::new(prototype());
        let clone = original.clone_page();
        assert_eq!(clone.describe(), original.describe());
    }
}
