//! Credential verifier implementations.

mod argon2;

pub use self::argon2::Argon2CredentialVerifier;
