pub mod cli;
pub mod core;
pub mod providers;

use anyhow::Result;
use tracing::info;

pub enum AppCommand {
    Price {
        country: String,
        notional: Option<f64>,
        years: Option<u32>,
    },
    Compare {
        countries: Vec<String>,
        notional: Option<f64>,
        years: Option<u32>,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Rate Pricer starting...");

    match command {
        AppCommand::Price {
            country,
            notional,
            years,
        } => cli::price::run(config_path, &country, notional, years).await,
        AppCommand::Compare {
            countries,
            notional,
            years,
        } => cli::compare::run(config_path, &countries, notional, years).await,
    }
}
