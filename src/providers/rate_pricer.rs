use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::core::pricing::{PricingParameters, PricingProvider, RateQuote};

/// Message used when the service reports a failure without a `detail` field.
const GENERIC_API_ERROR: &str = "API request failed";

// RatePricerProvider implementation for PricingProvider
pub struct RatePricerProvider {
    base_url: String,
}

impl RatePricerProvider {
    pub fn new(base_url: &str) -> Self {
        RatePricerProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct PricingResponse {
    rate: f64,
    present_value: f64,
}

#[derive(Deserialize, Debug)]
struct PricingErrorResponse {
    detail: Option<String>,
}

#[async_trait]
impl PricingProvider for RatePricerProvider {
    #[instrument(
        name = "RatePricerFetch",
        skip(self, params),
        fields(country = %country)
    )]
    async fn fetch_quote(&self, country: &str, params: &PricingParameters) -> Result<RateQuote> {
        let url = format!("{}/pricing/external", self.base_url);
        debug!("Requesting quote from {}", url);

        let client = reqwest::Client::builder().user_agent("rpx/1.0").build()?;
        let response = client
            .get(&url)
            .query(&[
                ("notional", params.notional.to_string()),
                ("years", params.years.to_string()),
                ("country", country.to_string()),
            ])
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for country: {} URL: {}", e, country, url))?;

        let status = response.status();
        debug!(status = %status, "Received pricing response");

        if !status.is_success() {
            // Failure body carries an optional `detail` message
            let detail = response
                .json::<PricingErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.detail);
            return Err(anyhow!(detail.unwrap_or_else(|| GENERIC_API_ERROR.to_string())));
        }

        let text = response.text().await?;
        let data: PricingResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse pricing response for {}: {}", country, e))?;

        Ok(RateQuote {
            rate: data.rate,
            present_value: data.present_value,
        })
    }
}
