//! Vault module: the encrypted login/password store.
//!
//! This module provides:
//! - The `Entry` record with `lookup` and `upsert` (`entry`)
//! - The salt/nonce/ciphertext file codec (`format`)
//! - High-level `VaultStore` for opening, changing and saving a vault (`store`)

pub mod entry;
pub mod format;
pub mod store;

pub use entry::{lookup, upsert, Entry, Upsert};
pub use format::{decode, encode, read_entries, write_entries};
pub use store::VaultStore;
