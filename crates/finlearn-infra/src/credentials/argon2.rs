//! Argon2 credential verifier.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use finlearn_core::ports::{CredentialError, CredentialVerifier};

/// Argon2-backed verifier. Stores a PHC hash string instead of the raw
/// password; existing plaintext records will simply fail verification.
pub struct Argon2CredentialVerifier {
    argon2: Argon2<'static>,
}

impl Argon2CredentialVerifier {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2CredentialVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialVerifier for Argon2CredentialVerifier {
    fn protect(&self, password: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| CredentialError::Hashing(e.to_string()))
    }

    fn verify(&self, password: &str, stored: &str) -> Result<bool, CredentialError> {
        let parsed_hash =
            PasswordHash::new(stored).map_err(|e| CredentialError::Hashing(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protect_and_verify() {
        let verifier = Argon2CredentialVerifier::new();
        let password = "secure_password_123";

        let stored = verifier.protect(password).unwrap();
        assert_ne!(stored, password);
        assert!(verifier.verify(password, &stored).unwrap());
        assert!(!verifier.verify("wrong_password", &stored).unwrap());
    }

    #[test]
    fn test_plaintext_record_fails_verification() {
        let verifier = Argon2CredentialVerifier::new();
        assert!(verifier.verify("hunter2", "hunter2").is_err());
    }
}
