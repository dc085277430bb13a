use super::ui;
use crate::core::config::AppConfig;
use crate::core::pricing::PricingParameters;
use crate::core::{PricingOutcome, currency_for, price_one};
use crate::providers::RatePricerProvider;
use anyhow::Result;
use tracing::debug;

/// Prices a single country and prints the quote.
pub async fn run(
    config_path: Option<&str>,
    country: &str,
    notional: Option<f64>,
    years: Option<u32>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };

    let params = PricingParameters {
        notional: notional.unwrap_or(config.notional),
        years: years.unwrap_or(config.years),
    };
    debug!(country, ?params, "Pricing single country");

    let provider = RatePricerProvider::new(config.pricing_base_url());
    let currency = currency_for(country);

    let pb = ui::new_spinner(&format!("Pricing {country}..."));
    let outcome = price_one(&provider, country, currency, &params).await;
    pb.finish_and_clear();

    println!("{}", display_outcome(&outcome, &params));
    Ok(())
}

fn display_outcome(outcome: &PricingOutcome, params: &PricingParameters) -> String {
    let mut output = format!(
        "{}\n",
        ui::style_text(outcome.country(), ui::StyleType::Title)
    );
    output.push_str(&format!(
        "{} {:.2} over {} years\n",
        ui::style_text("Notional:", ui::StyleType::Label),
        params.notional,
        params.years
    ));

    match outcome {
        PricingOutcome::Success {
            currency,
            rate,
            present_value,
            ..
        } => {
            output.push_str(&format!(
                "{} {rate:.2}%\n",
                ui::style_text("Rate:", ui::StyleType::Label)
            ));
            output.push_str(&format!(
                "{} {}",
                ui::style_text("Present Value:", ui::StyleType::Label),
                ui::style_text(&format!("{present_value:.2} {currency}"), ui::StyleType::Value)
            ));
        }
        PricingOutcome::Failure { error, .. } => {
            output.push_str(&ui::style_text(
                &format!("Error: {error}"),
                ui::StyleType::Error,
            ));
        }
    }

    output
}
