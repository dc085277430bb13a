use std::time::Duration;
use tracing::info;

use rpx::core::pricing::PricingParameters;
use rpx::core::{DEFAULT_COUNTRIES, PricingOutcome, compare_all, price_one};
use rpx::providers::RatePricerProvider;

// Adds automatic logging to test
mod test_utils {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Mounts a pricing response for one country on an existing mock server.
    pub async fn mount_country(
        server: &MockServer,
        country: &str,
        response: ResponseTemplate,
    ) {
        Mock::given(method("GET"))
            .and(path("/pricing/external"))
            .and(query_param("country", country))
            .respond_with(response)
            .mount(server)
            .await;
    }

    pub fn quote_body(rate: f64, present_value: f64) -> String {
        format!(
            r#"{{"notional": 1000.0, "years": 5, "rate": {rate}, "present_value": {present_value}}}"#
        )
    }
}

fn params() -> PricingParameters {
    PricingParameters {
        notional: 1000.0,
        years: 5,
    }
}

#[test_log::test(tokio::test)]
async fn test_compare_mixed_success_and_failure() {
    use wiremock::{MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    test_utils::mount_country(
        &mock_server,
        "Japan",
        ResponseTemplate::new(200).set_body_string(test_utils::quote_body(1.2, 942.3)),
    )
    .await;
    test_utils::mount_country(
        &mock_server,
        "Mexico",
        ResponseTemplate::new(500).set_body_string(r#"{"detail": "rate unavailable"}"#),
    )
    .await;

    let provider = RatePricerProvider::new(&mock_server.uri());
    let countries = vec!["Japan".to_string(), "Mexico".to_string()];

    let results = compare_all(&provider, &countries, &params()).await;
    info!(?results, "Comparison complete");

    assert_eq!(
        results,
        vec![
            PricingOutcome::Success {
                country: "Japan".to_string(),
                currency: "JPY".to_string(),
                rate: 1.2,
                present_value: 942.3,
            },
            PricingOutcome::Failure {
                country: "Mexico".to_string(),
                currency: "MXN".to_string(),
                error: "rate unavailable".to_string(),
            },
        ]
    );
}

#[test_log::test(tokio::test)]
async fn test_compare_preserves_order_when_first_country_is_slowest() {
    use wiremock::{MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    test_utils::mount_country(
        &mock_server,
        "United Kingdom",
        ResponseTemplate::new(200)
            .set_body_string(test_utils::quote_body(4.25, 812.28))
            .set_delay(Duration::from_millis(200)),
    )
    .await;
    test_utils::mount_country(
        &mock_server,
        "Japan",
        ResponseTemplate::new(200).set_body_string(test_utils::quote_body(0.5, 975.31)),
    )
    .await;

    let provider = RatePricerProvider::new(&mock_server.uri());
    let countries = vec!["United Kingdom".to_string(), "Japan".to_string()];

    let results = compare_all(&provider, &countries, &params()).await;

    let order: Vec<&str> = results.iter().map(|r| r.country()).collect();
    assert_eq!(order, vec!["United Kingdom", "Japan"]);
    assert_eq!(results[0].rate(), Some(4.25));
    assert_eq!(results[1].rate(), Some(0.5));
}

#[test_log::test(tokio::test)]
async fn test_compare_full_default_country_list() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pricing/external"))
        .respond_with(ResponseTemplate::new(200).set_body_string(test_utils::quote_body(3.0, 862.6)))
        .mount(&mock_server)
        .await;

    let provider = RatePricerProvider::new(&mock_server.uri());
    let countries: Vec<String> = DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect();

    let results = compare_all(&provider, &countries, &params()).await;

    assert_eq!(results.len(), DEFAULT_COUNTRIES.len());
    for (country, result) in DEFAULT_COUNTRIES.iter().zip(&results) {
        assert_eq!(result.country(), *country);
        assert!(result.is_success(), "{country} should have priced");
        assert_ne!(result.currency(), "USD", "{country} has a known currency");
    }
}

#[test_log::test(tokio::test)]
async fn test_price_one_recovers_transport_failure() {
    // Nothing is listening on this port
    let provider = RatePricerProvider::new("http://127.0.0.1:9");

    let outcome = price_one(&provider, "Japan", "JPY", &params()).await;

    match outcome {
        PricingOutcome::Failure {
            country,
            currency,
            error,
        } => {
            assert_eq!(country, "Japan");
            assert_eq!(currency, "JPY");
            assert!(error.contains("Request error"), "unexpected error: {error}");
        }
        PricingOutcome::Success { .. } => panic!("expected a failure outcome"),
    }
}

#[test_log::test(tokio::test)]
async fn test_compare_via_config_file() {
    use wiremock::{MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    test_utils::mount_country(
        &mock_server,
        "Norway",
        ResponseTemplate::new(200).set_body_string(test_utils::quote_body(4.5, 802.45)),
    )
    .await;

    let config_yaml = format!(
        r#"
countries:
  - "Norway"
notional: 1000
years: 5
providers:
  pricing:
    base_url: "{}"
"#,
        mock_server.uri()
    );
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    std::fs::write(&config_path, config_yaml).unwrap();

    let config = rpx::core::config::AppConfig::load_from_path(&config_path).unwrap();
    let provider = RatePricerProvider::new(config.pricing_base_url());
    let parameters = PricingParameters {
        notional: config.notional,
        years: config.years,
    };

    let results = compare_all(&provider, &config.countries, &parameters).await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].country(), "Norway");
    assert_eq!(results[0].present_value(), Some(802.45));
}
