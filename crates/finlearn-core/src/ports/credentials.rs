//! Credential verification port.

use thiserror::Error;

/// Capability interface isolating how passwords are stored and checked, so
/// the scheme can be swapped without touching the user service.
pub trait CredentialVerifier: Send + Sync {
    /// Produce the representation written to the store at registration.
    fn protect(&self, password: &str) -> Result<String, CredentialError>;

    /// Check a supplied password against the stored representation.
    fn verify(&self, password: &str, stored: &str) -> Result<bool, CredentialError>;
}

/// Credential processing errors.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Hashing error: {0}")]
    Hashing(String),
}

/// Default verifier: stores passwords verbatim and compares with plain
/// equality. This is the platform's pre-existing behavior, kept as-is; a
/// hashing implementation lives in finlearn-infra.
pub struct PlainTextVerifier;

impl CredentialVerifier for PlainTextVerifier {
    fn protect(&self, password: &str) -> Result<String, CredentialError> {
        Ok(password.to_string())
    }

    fn verify(&self, password: &str, stored: &str) -> Result<bool, CredentialError> {
        Ok(password == stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_identity_and_equality() {
        let verifier = PlainTextVerifier;
        let stored = verifier.protect("pass123").unwrap();
        assert_eq!(stored, "pass123");
        assert!(verifier.verify("pass123", &stored).unwrap());
        assert!(!verifier.verify("pass124", &stored).unwrap());
    }
}
