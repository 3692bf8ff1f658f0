//! One module per subcommand.

pub mod get;
pub mod put;
