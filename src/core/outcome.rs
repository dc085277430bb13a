//! Per-country pricing outcomes

/// The result of pricing one country. Both variants carry the country and
/// its currency so a row can be rendered even when the lookup failed.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingOutcome {
    Success {
        country: String,
        currency: String,
        rate: f64,
        present_value: f64,
    },
    Failure {
        country: String,
        currency: String,
        error: String,
    },
}

impl PricingOutcome {
    pub fn country(&self) -> &str {
        match self {
            PricingOutcome::Success { country, .. } => country,
            PricingOutcome::Failure { country, .. } => country,
        }
    }

    pub fn currency(&self) -> &str {
        match self {
            PricingOutcome::Success { currency, .. } => currency,
            PricingOutcome::Failure { currency, .. } => currency,
        }
    }

    pub fn rate(&self) -> Option<f64> {
        match self {
            PricingOutcome::Success { rate, .. } => Some(*rate),
            PricingOutcome::Failure { .. } => None,
        }
    }

    pub fn present_value(&self) -> Option<f64> {
        match self {
            PricingOutcome::Success { present_value, .. } => Some(*present_value),
            PricingOutcome::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PricingOutcome::Success { .. } => None,
            PricingOutcome::Failure { error, .. } => Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PricingOutcome::Success { .. })
    }
}
