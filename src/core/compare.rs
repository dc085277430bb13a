//! Fan-out/fan-in pricing across countries

use futures::future::join_all;
use tracing::debug;

use crate::core::currency::currency_for;
use crate::core::outcome::PricingOutcome;
use crate::core::pricing::{PricingParameters, PricingProvider};

/// Prices a single country, folding every failure into the outcome. The
/// caller always gets a row back; transport and service errors never escape
/// as faults.
pub async fn price_one(
    provider: &dyn PricingProvider,
    country: &str,
    currency: &str,
    params: &PricingParameters,
) -> PricingOutcome {
    match provider.fetch_quote(country, params).await {
        Ok(quote) => PricingOutcome::Success {
            country: country.to_string(),
            currency: currency.to_string(),
            rate: quote.rate,
            present_value: quote.present_value,
        },
        Err(e) => {
            debug!(country, error = %e, "Pricing lookup failed");
            PricingOutcome::Failure {
                country: country.to_string(),
                currency: currency.to_string(),
                error: e.to_string(),
            }
        }
    }
}

/// Prices every country concurrently and collects one outcome per country.
///
/// All lookups are launched before any outcome is awaited, and the returned
/// list preserves the input order regardless of completion order: index i of
/// the output corresponds to countries[i]. A failing country produces a
/// `Failure` entry without affecting its siblings; the run always completes
/// with exactly one outcome per input country, duplicates included.
pub async fn compare_all(
    provider: &dyn PricingProvider,
    countries: &[String],
    params: &PricingParameters,
) -> Vec<PricingOutcome> {
    let lookups = countries.iter().map(|country| {
        let currency = currency_for(country);
        price_one(provider, country, currency, params)
    });

    join_all(lookups).await
}
