//! Car Expo CLI - Database migrations and catalog tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the catalog tables
//! car-expo migrate
//!
//! # Load the built-in catalog (safe to repeat)
//! car-expo seed
//!
//! # Wipe the catalog tables, then load the built-in catalog
//! car-expo seed --reset
//!
//! # Print what the API would serve
//! car-expo show
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Insert or update the built-in catalog
//! - `show` - Summarize the catalog through the catalog service

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "car-expo")]
#[command(author, version, about = "Car Expo CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Insert or update the built-in catalog
    Seed {
        /// Delete every type, subtype and car before seeding
        #[arg(long)]
        reset: bool,
    },
    /// Print catalog counts as served by the API
    Show,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await,
        Commands::Seed { reset } => commands::seed::run(reset).await,
        Commands::Show => commands::show::run().await,
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_seed_reset_flag() {
        let cli = Cli::try_parse_from(["car-expo", "seed", "--reset"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Seed { reset: true })
        ));

        let cli = Cli::try_parse_from(["car-expo", "seed"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Seed { reset: false })
        ));
    }
}
