//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The vault re-derives its key on every write from a freshly generated
//! salt, so the iteration count is a fixed constant rather than something
//! stored alongside the ciphertext.

use hmac::Hmac;
use rand::RngCore;
use sha2::Sha256;

use crate::errors::{Result, VaultError};

/// Length of the salt in bytes (256 bits).
pub const SALT_LEN: usize = 32;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count used for every vault file.
pub const PBKDF2_ITERATIONS: u32 = 4096;

/// Derive a 32-byte key from a passphrase and salt.
///
/// The same passphrase + salt will always produce the same key.
pub fn derive_key(passphrase: &[u8], salt: &[u8]) -> Result<[u8; KEY_LEN]> {
    derive_key_with_iterations(passphrase, salt, PBKDF2_ITERATIONS)
}

/// Derive a 32-byte key with an explicit PBKDF2 iteration count.
pub fn derive_key_with_iterations(
    passphrase: &[u8],
    salt: &[u8],
    iterations: u32,
) -> Result<[u8; KEY_LEN]> {
    if iterations < 1 {
        return Err(VaultError::KeyDerivationFailed(
            "PBKDF2 iterations must be at least 1".into(),
        ));
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2::pbkdf2::<Hmac<Sha256>>(passphrase, salt, iterations, &mut key)
        .map_err(|e| VaultError::KeyDerivationFailed(format!("PBKDF2 failed: {e}")))?;

    Ok(key)
}

/// Generate a cryptographically random 32-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}
