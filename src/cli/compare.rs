use super::ui;
use crate::core::config::AppConfig;
use crate::core::pricing::PricingParameters;
use crate::core::{PricingOutcome, compare_all};
use crate::providers::RatePricerProvider;
use anyhow::Result;
use comfy_table::Cell;
use tracing::debug;

/// Prices all selected countries concurrently and renders one row per
/// country, failed lookups included.
pub async fn run(
    config_path: Option<&str>,
    countries: &[String],
    notional: Option<f64>,
    years: Option<u32>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };

    let selection: Vec<String> = if countries.is_empty() {
        config.countries.clone()
    } else {
        countries.to_vec()
    };

    if selection.is_empty() {
        println!("No countries selected to compare.");
        return Ok(());
    }

    let params = PricingParameters {
        notional: notional.unwrap_or(config.notional),
        years: years.unwrap_or(config.years),
    };
    debug!(?params, count = selection.len(), "Comparing countries");

    let provider = RatePricerProvider::new(config.pricing_base_url());

    let pb = ui::new_spinner(&format!("Pricing {} countries...", selection.len()));
    let outcomes = compare_all(&provider, &selection, &params).await;
    pb.finish_and_clear();

    println!("{}", display_as_table(&outcomes, &params));
    Ok(())
}

fn display_as_table(outcomes: &[PricingOutcome], params: &PricingParameters) -> String {
    let mut table = ui::new_styled_table();

    table.set_header(vec![
        ui::header_cell("Country"),
        ui::header_cell("Currency"),
        ui::header_cell("Rate (%)"),
        ui::header_cell("Present Value"),
        ui::header_cell("Status"),
    ]);

    for outcome in outcomes {
        let currency = outcome.currency().to_string();
        let rate = ui::format_optional_cell(outcome.rate(), |r| format!("{r:.2}"));
        let present_value =
            ui::format_optional_cell(outcome.present_value(), |v| format!("{v:.2} {currency}"));

        table.add_row(vec![
            Cell::new(outcome.country()),
            Cell::new(outcome.currency()),
            rate,
            present_value,
            ui::status_cell(outcome.error()),
        ]);
    }

    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    let mut output = format!(
        "{}\n\n",
        ui::style_text(
            &format!(
                "Comparison: notional {:.2} over {} years",
                params.notional, params.years
            ),
            ui::StyleType::Title
        )
    );
    output.push_str(&table.to_string());
    if failed > 0 {
        output.push_str(&format!(
            "\n\n{}",
            ui::style_text(
                &format!("{failed} of {} lookups failed", outcomes.len()),
                ui::StyleType::Error
            )
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_renders_success_and_failure_rows() {
        let outcomes = vec![
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
        ];
        let params = PricingParameters {
            notional: 1000.0,
            years: 5,
        };

        let rendered = display_as_table(&outcomes, &params);
        assert!(rendered.contains("Japan"));
        assert!(rendered.contains("942.30 JPY"));
        assert!(rendered.contains("OK"));
        assert!(rendered.contains("Mexico"));
        assert!(rendered.contains("rate unavailable"));
        assert!(rendered.contains("1 of 2 lookups failed"));
    }
}
