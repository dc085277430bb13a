pub mod rate_pricer;

pub use rate_pricer::RatePricerProvider;
