//! Login/password records and the two operations the vault performs on
//! them: lookup by login and upsert.
//!
//! The entry list keeps insertion order.  `upsert` never appends a second
//! entry for a login that is already present, so a list built only through
//! it holds at most one entry per login.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// One stored credential.
///
/// Serialized as `{"Login": ..., "Password": ...}` inside the encrypted
/// payload.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Entry {
    #[serde(rename = "Login")]
    pub login: String,

    #[serde(rename = "Password")]
    pub password: String,
}

impl Entry {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

// Never print the password.
impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Outcome of an `upsert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new entry was appended at the end.
    Inserted,
    /// An existing entry had its password replaced in place.
    Updated,
}

/// Return the password stored for `login`, if any.
///
/// Matching is exact and case-sensitive; the first match wins.
pub fn lookup<'a>(entries: &'a [Entry], login: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|entry| entry.login == login)
        .map(|entry| entry.password.as_str())
}

/// Replace the password of the entry for `login`, or append a new entry.
pub fn upsert(entries: &mut Vec<Entry>, login: &str, password: &str) -> Upsert {
    match entries.iter_mut().find(|entry| entry.login == login) {
        Some(existing) => {
            existing.password.zeroize();
            existing.password = password.to_string();
            Upsert::Updated
        }
        None => {
            entries.push(Entry::new(login, password));
            Upsert::Inserted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logins(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.login.as_str()).collect()
    }

    #[test]
    fn lookup_miss_returns_none() {
        let entries = vec![Entry::new("alice", "pw1")];
        assert_eq!(lookup(&entries, "bob"), None);
        assert_eq!(lookup(&[], "alice"), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let entries = vec![Entry::new("alice", "pw1")];
        assert_eq!(lookup(&entries, "Alice"), None);
        assert_eq!(lookup(&entries, "alice"), Some("pw1"));
    }

    #[test]
    fn lookup_returns_first_of_duplicates() {
        let entries = vec![Entry::new("alice", "first"), Entry::new("alice", "second")];
        assert_eq!(lookup(&entries, "alice"), Some("first"));
    }

    #[test]
    fn upsert_appends_new_logins() {
        let mut entries = Vec::new();
        assert_eq!(upsert(&mut entries, "a", "1"), Upsert::Inserted);
        assert_eq!(upsert(&mut entries, "b", "2"), Upsert::Inserted);
        assert_eq!(logins(&entries), vec!["a", "b"]);
    }

    #[test]
    fn upsert_updates_in_place() {
        let mut entries = Vec::new();
        upsert(&mut entries, "a", "1");
        upsert(&mut entries, "b", "2");
        assert_eq!(upsert(&mut entries, "a", "3"), Upsert::Updated);

        assert_eq!(logins(&entries), vec!["a", "b"]);
        assert_eq!(lookup(&entries, "a"), Some("3"));
        assert_eq!(lookup(&entries, "b"), Some("2"));
    }

    #[test]
    fn upsert_same_value_twice_is_idempotent() {
        let mut once = vec![Entry::new("x", "0")];
        upsert(&mut once, "a", "pw");

        let mut twice = once.clone();
        upsert(&mut twice, "a", "pw");

        assert_eq!(once, twice);
    }

    #[test]
    fn debug_output_hides_password() {
        let rendered = format!("{:?}", Entry::new("alice", "hunter2"));
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn serializes_with_capitalized_keys() {
        let json = serde_json::to_string(&vec![Entry::new("a", "b")]).unwrap();
        assert_eq!(json, r#"[{"Login":"a","Password":"b"}]"#);
    }
}
