//! Binary vault file format.
//!
//! A vault file has this layout:
//!
//! ```text
//! [salt: 32 bytes][nonce: 12 bytes][ciphertext + 16-byte GCM tag]
//! ```
//!
//! - **Salt**: fresh random bytes on every write, fed to PBKDF2.
//! - **Nonce**: fresh random AES-GCM nonce on every write.
//! - **Ciphertext**: the entry list serialized as JSON and sealed with
//!   AES-256-GCM under the PBKDF2-derived key, no associated data.
//!
//! A missing file is a valid, empty vault.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use zeroize::Zeroizing;

use super::entry::Entry;
use crate::crypto::{decrypt, derive_key_with_iterations, encrypt, generate_nonce, generate_salt};
use crate::crypto::{NONCE_LEN, PBKDF2_ITERATIONS, SALT_LEN};
use crate::errors::{Result, VaultError};

/// Smallest byte count that can hold a salt and a nonce.
const MIN_FILE_LEN: usize = SALT_LEN + NONCE_LEN;

// ---------------------------------------------------------------------------
// In-memory codec
// ---------------------------------------------------------------------------

/// Encrypt `entries` into a complete vault file image.
///
/// Every call uses a new salt and nonce, so two calls with identical
/// input produce different bytes.
pub fn encode(passphrase: &[u8], entries: &[Entry]) -> Result<Vec<u8>> {
    encode_with_iterations(passphrase, entries, PBKDF2_ITERATIONS)
}

/// Decrypt a vault file image back into its entry list.
pub fn decode(passphrase: &[u8], data: &[u8]) -> Result<Vec<Entry>> {
    decode_with_iterations(passphrase, data, PBKDF2_ITERATIONS)
}

pub(crate) fn encode_with_iterations(
    passphrase: &[u8],
    entries: &[Entry],
    iterations: u32,
) -> Result<Vec<u8>> {
    let salt = generate_salt();
    let nonce = generate_nonce();
    let key = Zeroizing::new(derive_key_with_iterations(passphrase, &salt, iterations)?);

    let plaintext = Zeroizing::new(
        serde_json::to_vec(entries)
            .map_err(|e| VaultError::SerializationError(format!("entries: {e}")))?,
    );

    let ciphertext = encrypt(&key, &nonce, &plaintext)?;

    let mut buf = Vec::with_capacity(MIN_FILE_LEN + ciphertext.len());
    buf.extend_from_slice(&salt); // 32 bytes
    buf.extend_from_slice(&nonce); // 12 bytes
    buf.extend_from_slice(&ciphertext); // ciphertext || tag
    Ok(buf)
}

pub(crate) fn decode_with_iterations(
    passphrase: &[u8],
    data: &[u8],
    iterations: u32,
) -> Result<Vec<Entry>> {
    // Too short to hold salt + nonce: same answer as a bad tag.
    if data.len() < MIN_FILE_LEN {
        return Err(VaultError::DecryptionFailed);
    }

    let (salt, rest) = data.split_at(SALT_LEN);
    let (nonce, ciphertext) = rest.split_at(NONCE_LEN);
    let nonce: &[u8; NONCE_LEN] = nonce
        .try_into()
        .map_err(|_| VaultError::DecryptionFailed)?;

    let key = Zeroizing::new(derive_key_with_iterations(passphrase, salt, iterations)?);
    let plaintext = Zeroizing::new(decrypt(&key, nonce, ciphertext)?);

    serde_json::from_slice(&plaintext).map_err(|e| VaultError::MalformedVault(e.to_string()))
}

// ---------------------------------------------------------------------------
// On-disk persistence
// ---------------------------------------------------------------------------

/// Read and decrypt the vault at `path`.
///
/// Returns an empty list when no file exists yet.
pub fn read_entries(path: &Path, passphrase: &[u8]) -> Result<Vec<Entry>> {
    read_entries_with_iterations(path, passphrase, PBKDF2_ITERATIONS)
}

pub(crate) fn read_entries_with_iterations(
    path: &Path,
    passphrase: &[u8],
    iterations: u32,
) -> Result<Vec<Entry>> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(VaultError::Storage(e)),
    };

    decode_with_iterations(passphrase, &data, iterations)
}

/// Encrypt `entries` and write them to `path` **atomically**.
///
/// 1. Encode into a fresh salt/nonce/ciphertext blob.
/// 2. Write it to a new temp file in the same directory.  `tempfile`
///    creates it exclusively and owner-only (0600 on Unix).
/// 3. Persist (rename) the temp file over the target path.
///
/// Readers never see a half-written file, and a failed write removes the
/// temp file when it is dropped.
pub fn write_entries(path: &Path, passphrase: &[u8], entries: &[Entry]) -> Result<()> {
    write_entries_with_iterations(path, passphrase, entries, PBKDF2_ITERATIONS)
}

pub(crate) fn write_entries_with_iterations(
    path: &Path,
    passphrase: &[u8],
    entries: &[Entry],
    iterations: u32,
) -> Result<()> {
    let buf = encode_with_iterations(passphrase, entries, iterations)?;

    if path.file_name().is_none() {
        return Err(VaultError::InvalidPath(path.to_path_buf()));
    }
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(&buf)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| VaultError::Storage(e.error))?;

    Ok(())
}
