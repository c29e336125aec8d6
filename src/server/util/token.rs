//! API and password-reset tokens.
//!
//! Tokens are 32 random bytes, hex encoded, handed to the client once. Only their
//! SHA-256 digest is stored, so a leaked database does not leak usable tokens.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Generates a new random token.
pub fn generate_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();
    hex::encode(bytes)
}

/// Hashes a token for storage and lookup.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
