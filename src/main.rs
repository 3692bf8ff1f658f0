use clap::Parser;
use pwvault::cli::Cli;
use pwvault::errors::VaultError;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return;
        }
        Err(e) => {
            // Clap's rendered message already has its "error:" prefix and usage block.
            let err = VaultError::Usage(e.render().to_string());
            eprint!("{err}");
            std::process::exit(err.exit_code());
        }
    };

    if let Err(e) = pwvault::cli::run(&cli) {
        pwvault::cli::output::error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
