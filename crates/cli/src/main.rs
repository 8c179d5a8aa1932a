//! RealTrust CLI - Database migrations.
//!
//! # Usage
//!
//! ```bash
//! # Apply pending migrations
//! rt-cli migrate
//!
//! # List embedded migrations without connecting
//! rt-cli migrate --list
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rt-cli")]
#[command(author, version, about = "RealTrust CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate {
        /// Print the embedded migrations instead of applying them
        #[arg(long)]
        list: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::migrate::MigrationError> {
    match cli.command {
        Commands::Migrate { list: true } => commands::migrate::list(),
        Commands::Migrate { list: false } => commands::migrate::run().await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_migrate_list() {
        let cli = Cli::try_parse_from(["rt-cli", "migrate", "--list"])
            .unwrap_or_else(|e| panic!("parse failed: {e}"));
        assert!(matches!(cli.command, Commands::Migrate { list: true }));
    }
}
