use std::path::{Path, PathBuf};

use crate::crypto::PBKDF2_ITERATIONS;
use crate::errors::{Result, VaultError};

/// Runtime configuration, resolved once from the command line.
///
/// There is no config file: the only inputs are an optional `--db`
/// override and the invoking user's home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Location of the encrypted vault file.
    pub db_path: PathBuf,

    /// PBKDF2 iteration count (default: 4096).
    pub kdf_iterations: u32,
}

impl Settings {
    /// Name of the vault file inside the home directory.
    pub const FILE_NAME: &'static str = "encrypted.db";

    /// Resolve settings, preferring `db_override` over `$HOME/encrypted.db`.
    pub fn resolve(db_override: Option<&Path>) -> Result<Self> {
        Self::resolve_from(db_override, dirs::home_dir())
    }

    /// Same as `resolve`, with the home directory supplied by the caller.
    pub fn resolve_from(db_override: Option<&Path>, home: Option<PathBuf>) -> Result<Self> {
        let db_path = match db_override {
            Some(path) => path.to_path_buf(),
            None => home
                .ok_or(VaultError::HomeDirNotFound)?
                .join(Self::FILE_NAME),
        };

        Ok(Self::with_db_path(db_path))
    }

    /// Settings pointing at an explicit vault file.
    pub fn with_db_path(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            kdf_iterations: PBKDF2_ITERATIONS,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_encrypted_db_in_home() {
        let settings = Settings::resolve_from(None, Some(PathBuf::from("/home/user"))).unwrap();
        assert_eq!(settings.db_path, PathBuf::from("/home/user/encrypted.db"));
        assert_eq!(settings.kdf_iterations, 4096);
    }

    #[test]
    fn override_wins_over_home() {
        let settings = Settings::resolve_from(
            Some(Path::new("/tmp/other.db")),
            Some(PathBuf::from("/home/user")),
        )
        .unwrap();
        assert_eq!(settings.db_path, PathBuf::from("/tmp/other.db"));
    }

    #[test]
    fn override_works_without_home() {
        let settings = Settings::resolve_from(Some(Path::new("v.db")), None).unwrap();
        assert_eq!(settings.db_path, PathBuf::from("v.db"));
    }

    #[test]
    fn missing_home_without_override_errors() {
        let result = Settings::resolve_from(None, None);
        assert!(matches!(result, Err(VaultError::HomeDirNotFound)));
    }
}
