use super::ui;
use crate::core::{ExchangeRates, SharedExchange};
use anyhow::{Context, Result};
use comfy_table::Cell;

impl ExchangeRates {
    pub fn display_as_table(&self) -> String {
        if self.is_empty() {
            return ui::style_text("No exchange rates specified", ui::StyleType::Subtle);
        }

        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Cross"),
            ui::header_cell("Rate"),
            ui::header_cell("Inverse"),
        ]);
        for (cross, rate) in self.iter() {
            table.add_row(vec![
                Cell::new(cross),
                ui::rate_cell(Some(rate)),
                ui::rate_cell(Some(1.0 / rate)),
            ]);
        }

        format!(
            "{}\n\n{table}",
            ui::style_text("Exchange Rates", ui::StyleType::Title)
        )
    }

    pub fn display_as_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize exchange rates")
    }
}

pub async fn run(exchange: &SharedExchange, json: bool) -> Result<()> {
    let rates = exchange.exchange_rates().await;
    let output = if json {
        rates.display_as_json()?
    } else {
        rates.display_as_table()
    };
    println!("{output}");
    Ok(())
}
