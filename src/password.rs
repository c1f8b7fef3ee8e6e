//! Password hashing for seeded accounts.
//!
//! Hashes are bcrypt in modular crypt format (`$2b$10$...`), salted per call,
//! so hashing the same password twice never yields the same string.

use crate::errors::SeedError;

/// Hash a plaintext password at the given bcrypt cost.
pub fn hash_password(password: &str, cost: u32) -> Result<String, SeedError> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Check a plaintext password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, SeedError> {
    Ok(bcrypt::verify(password, hash)?)
}
