//! Cryptographic primitives for pwvault.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption (`encryption`)
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)

pub mod encryption;
pub mod kdf;

pub use encryption::{decrypt, encrypt, generate_nonce, NONCE_LEN, TAG_LEN};
pub use kdf::{
    derive_key, derive_key_with_iterations, generate_salt, KEY_LEN, PBKDF2_ITERATIONS, SALT_LEN,
};
