//! Pricing abstractions and core types

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Shared inputs for one pricing run. The same parameters are applied to
/// every country priced within a single invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingParameters {
    pub notional: f64,
    pub years: u32,
}

/// A successful quote from the pricing service. The rate is a percentage
/// value (4.25 means 4.25%); the present value is in the country's currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateQuote {
    pub rate: f64,
    pub present_value: f64,
}

#[async_trait]
pub trait PricingProvider: Send + Sync {
    /// Fetches one rate quote for a country. Exactly one network call per
    /// invocation; no retries. Service-reported failures surface as errors
    /// carrying the service's `detail` message.
    async fn fetch_quote(&self, country: &str, params: &PricingParameters) -> Result<RateQuote>;
}
