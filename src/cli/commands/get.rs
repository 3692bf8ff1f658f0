//! `pwvault get`: print the password stored for a login.

use crate::cli::terminal::SecretPrompt;
use crate::cli::{open_vault, output};
use crate::config::Settings;
use crate::errors::Result;

/// Execute the `get` command.
///
/// Prints nothing when the login is absent.  Never writes the vault.
pub fn execute(settings: &Settings, login: &str) -> Result<()> {
    let mut prompt = SecretPrompt::acquire()?;
    let store = open_vault(settings, &mut prompt)?;
    prompt.release();

    if let Some(password) = store.get(login) {
        output::secret(password);
    }

    Ok(())
}
