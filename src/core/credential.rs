//! Password verification capability.
//!
//! The directory never compares passwords itself: it asks a verifier, so the
//! storage scheme can change without touching callers.

use sha2::{Digest, Sha256};

pub trait CredentialVerifier {
    /// Value to persist for a freshly supplied password.
    fn prepare(&self, plain: &str) -> String;

    /// Whether `supplied` matches the persisted `stored` value.
    fn verify(&self, stored: &str, supplied: &str) -> bool;
}

/// Plain text storage, compatible with records created by the browser build.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    fn prepare(&self, plain: &str) -> String {
        plain.to_string()
    }

    fn verify(&self, stored: &str, supplied: &str) -> bool {
        stored == supplied
    }
}

/// Stores the hex SHA-256 of the password.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Verifier;

impl CredentialVerifier for Sha256Verifier {
    fn prepare(&self, plain: &str) -> String {
        hex::encode(Sha256::digest(plain.as_bytes()))
    }

    fn verify(&self, stored: &str, supplied: &str) -> bool {
        stored.eq_ignore_ascii_case(&self.prepare(supplied))
    }
}
