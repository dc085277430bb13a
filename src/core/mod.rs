//! Core business logic abstractions

pub mod compare;
pub mod config;
pub mod currency;
pub mod log;
pub mod outcome;
pub mod pricing;

// Re-export main types for cleaner imports
pub use compare::{compare_all, price_one};
pub use currency::{DEFAULT_COUNTRIES, currency_for};
pub use outcome::PricingOutcome;
pub use pricing::{PricingParameters, PricingProvider, RateQuote};
