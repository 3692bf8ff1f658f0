//! `pwvault put`: add or update the password for a login.

use crate::cli::terminal::SecretPrompt;
use crate::cli::{open_vault, output};
use crate::config::Settings;
use crate::errors::Result;
use crate::vault::Upsert;

/// Execute the `put` command.
///
/// The vault is rewritten on every call, even when the password did
/// not change.
pub fn execute(settings: &Settings, login: &str) -> Result<()> {
    let mut prompt = SecretPrompt::acquire()?;

    // Open first so a wrong passphrase fails before asking for the password.
    let mut store = open_vault(settings, &mut prompt)?;
    let password = prompt.read_secret(&format!("Enter password for {login}"))?;
    prompt.release();

    if password.is_empty() {
        output::warning(&format!("Storing an empty password for '{login}'"));
    }

    let outcome = store.put(login, &password);
    store.save()?;

    match outcome {
        Upsert::Inserted => output::success(&format!(
            "Stored password for '{}' ({} total)",
            login,
            store.len()
        )),
        Upsert::Updated => output::success(&format!(
            "Updated password for '{}' ({} total)",
            login,
            store.len()
        )),
    }

    Ok(())
}
