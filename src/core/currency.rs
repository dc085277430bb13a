//! Country to currency mapping

/// Countries with a known central-bank rate, in display order.
pub const DEFAULT_COUNTRIES: &[&str] = &[
    "Australia",
    "China",
    "Czech Republic",
    "Denmark",
    "Mexico",
    "New Zealand",
    "Norway",
    "Poland",
    "Russia",
    "Sweden",
    "Switzerland",
    "Türkiye",
    "United Kingdom",
    "Japan",
];

/// Returns the display currency for a country. Unknown countries fall back
/// to USD.
pub fn currency_for(country: &str) -> &'static str {
    match country {
        "Australia" => "AUD",
        "China" => "CNY",
        "Czech Republic" => "CZK",
        "Denmark" => "DKK",
        "Japan" => "JPY",
        "Mexico" => "MXN",
        "New Zealand" => "NZD",
        "Norway" => "NOK",
        "Poland" => "PLN",
        "Russia" => "RUB",
        "Sweden" => "SEK",
        "Switzerland" => "CHF",
        "Türkiye" => "TRY",
        "United Kingdom" => "GBP",
        _ => "USD",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_countries() {
        assert_eq!(currency_for("Japan"), "JPY");
        assert_eq!(currency_for("United Kingdom"), "GBP");
        assert_eq!(currency_for("Türkiye"), "TRY");
    }

    #[test]
    fn test_unknown_country_falls_back_to_usd() {
        assert_eq!(currency_for("Atlantis"), "USD");
        assert_eq!(currency_for(""), "USD");
    }

    #[test]
    fn test_every_default_country_has_a_currency() {
        for country in DEFAULT_COUNTRIES {
            assert_ne!(currency_for(country), "USD", "missing mapping: {country}");
        }
    }
}
