//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` wraps the file format layer so the commands can work
//! with simple calls like `store.put("alice", "hunter2")` followed by
//! `store.save()`.

use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::crypto::PBKDF2_ITERATIONS;
use crate::errors::Result;

use super::entry::{self, Entry, Upsert};
use super::format;

/// The main vault handle.  Open one with `VaultStore::open`, then use
/// its methods to read or change entries.
pub struct VaultStore {
    /// Path to the vault file on disk (may not exist yet).
    path: PathBuf,

    /// The master passphrase, kept to re-derive a key on `save`.
    passphrase: Zeroizing<Vec<u8>>,

    /// PBKDF2 iteration count used for reading and writing.
    iterations: u32,

    /// Entries in insertion order.
    entries: Vec<Entry>,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Open the vault at `path`, decrypting it with `passphrase`.
    ///
    /// A missing file opens as an empty vault; nothing is written until
    /// `save` is called.
    pub fn open(path: &Path, passphrase: &[u8]) -> Result<Self> {
        Self::open_with_iterations(path, passphrase, PBKDF2_ITERATIONS)
    }

    /// Like `open`, with an explicit PBKDF2 iteration count.
    pub fn open_with_iterations(path: &Path, passphrase: &[u8], iterations: u32) -> Result<Self> {
        let entries = format::read_entries_with_iterations(path, passphrase, iterations)?;

        Ok(Self {
            path: path.to_path_buf(),
            passphrase: Zeroizing::new(passphrase.to_vec()),
            iterations,
            entries,
        })
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Return the password stored for `login`.
    pub fn get(&self, login: &str) -> Option<&str> {
        entry::lookup(&self.entries, login)
    }

    /// Add or update the password for `login` in memory.
    pub fn put(&mut self, login: &str, password: &str) -> Upsert {
        entry::upsert(&mut self.entries, login, password)
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Re-encrypt all entries under a fresh salt and write them to disk
    /// atomically.
    pub fn save(&self) -> Result<()> {
        format::write_entries_with_iterations(
            &self.path,
            &self.passphrase,
            &self.entries,
            self.iterations,
        )
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns all entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the number of entries in the vault.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the vault holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
