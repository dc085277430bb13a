use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use rpx::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for rpx::AppCommand {
    fn from(cmd: Commands) -> rpx::AppCommand {
        match cmd {
            Commands::Price {
                country,
                notional,
                years,
            } => rpx::AppCommand::Price {
                country,
                notional,
                years,
            },
            Commands::Compare {
                countries,
                notional,
                years,
            } => rpx::AppCommand::Compare {
                countries,
                notional,
                years,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Price a single country
    Price {
        /// Country whose central-bank rate to price against
        country: String,

        /// Notional amount (defaults to the configured value)
        #[arg(short, long)]
        notional: Option<f64>,

        /// Duration in years (defaults to the configured value)
        #[arg(short, long)]
        years: Option<u32>,
    },
    /// Compare pricing across countries
    Compare {
        /// Countries to compare (defaults to the configured list)
        countries: Vec<String>,

        /// Notional amount (defaults to the configured value)
        #[arg(short, long)]
        notional: Option<f64>,

        /// Duration in years (defaults to the configured value)
        #[arg(short, long)]
        years: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => rpx::cli::setup::setup(),
        Some(cmd) => rpx::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
