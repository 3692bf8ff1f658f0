use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a malformed command line.
pub const EXIT_USAGE: i32 = 1;

/// Exit code for every other unrecoverable failure.
pub const EXIT_FAILURE: i32 = 2;

/// All errors that can occur in pwvault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Usage errors ---
    #[error("{0}")]
    Usage(String),

    // --- Terminal errors ---
    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    // --- Storage errors ---
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Could not resolve the home directory, use --db <PATH>")]
    HomeDirNotFound,

    #[error("Vault path {0} has no file name")]
    InvalidPath(PathBuf),

    // --- Crypto errors ---
    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Wrong passphrase, tampered file and truncated file all map here so
    /// the message does not reveal which one happened.
    #[error("Decryption failed: wrong passphrase or corrupted vault")]
    DecryptionFailed,

    // --- Serialization errors ---
    #[error("Malformed vault contents: {0}")]
    MalformedVault(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl VaultError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            VaultError::Usage(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}

/// Convenience type alias for pwvault results.
pub type Result<T> = std::result::Result<T, VaultError>;
