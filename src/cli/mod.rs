//! CLI module: Clap argument parser, secret prompts, output helpers, and
//! command implementations.

pub mod commands;
pub mod output;
pub mod terminal;

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::errors::Result;
use crate::vault::VaultStore;

use terminal::SecretPrompt;

/// pwvault CLI: a local password vault in a single encrypted file.
#[derive(Parser)]
#[command(
    name = "pwvault",
    about = "Local password vault stored in a single encrypted file",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault file (default: $HOME/encrypted.db)
    #[arg(long, value_name = "PATH", global = true)]
    pub db: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Store or update the password for a login
    Put {
        /// Login name (e.g. alice@example.com)
        login: String,
    },

    /// Print the password stored for a login
    Get {
        /// Login name
        login: String,
    },
}

/// Run the parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::resolve(cli.db.as_deref())?;

    match cli.command {
        Commands::Put { ref login } => commands::put::execute(&settings, login),
        Commands::Get { ref login } => commands::get::execute(&settings, login),
    }
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Ask for the master passphrase and open the vault with it.
pub fn open_vault(settings: &Settings, prompt: &mut SecretPrompt) -> Result<VaultStore> {
    let passphrase = prompt.read_secret("Enter master passphrase")?;
    VaultStore::open_with_iterations(
        &settings.db_path,
        passphrase.as_bytes(),
        settings.kdf_iterations,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_put_and_get() {
        let cli = Cli::try_parse_from(["pwvault", "put", "alice"]).unwrap();
        assert!(matches!(cli.command, Commands::Put { ref login } if login == "alice"));
        assert!(cli.db.is_none());

        let cli = Cli::try_parse_from(["pwvault", "get", "bob", "--db", "/tmp/x.db"]).unwrap();
        assert!(matches!(cli.command, Commands::Get { ref login } if login == "bob"));
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        let err = Cli::try_parse_from(["pwvault", "list"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn rejects_missing_subcommand() {
        assert!(Cli::try_parse_from(["pwvault"]).is_err());
    }

    #[test]
    fn rejects_missing_login() {
        let err = Cli::try_parse_from(["pwvault", "get"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
