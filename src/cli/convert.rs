use super::ui;
use crate::core::{CurrencyExchange, SharedExchange};
use anyhow::{Context, Result};
use tracing::info;

/// The outcome of converting an amount across one cross.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub from: String,
    pub converted: f64,
    pub to: String,
}

impl Conversion {
    pub fn display(&self) -> String {
        format!(
            "{} {} = {} {}",
            format_amount(self.amount),
            ui::style_text(&self.from, ui::StyleType::Label),
            ui::style_text(&format_amount(self.converted), ui::StyleType::Value),
            ui::style_text(&self.to, ui::StyleType::Label),
        )
    }
}

fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Converts `amount` of `currency` to the other currency of `cross`.
pub fn convert(exchange: &CurrencyExchange, cross: &str, currency: &str, amount: f64) -> Result<Conversion> {
    let converted = exchange
        .calculate_exchanged_rate(cross, currency, amount)
        .with_context(|| format!("Cannot convert {amount} {currency} using {cross}"))?;

    // The cross is known to be valid here
    let to = exchange
        .currency_crosses()
        .iter()
        .find(|c| c.matches_key(cross))
        .map(|c| if c.base() == currency { c.quote() } else { c.base() })
        .context("Cross disappeared during conversion")?;

    Ok(Conversion {
        amount,
        from: currency.to_string(),
        converted,
        to: to.to_string(),
    })
}

pub async fn run(exchange: &SharedExchange, cross: &str, currency: &str, amount: f64) -> Result<()> {
    let conversion = convert(&exchange.snapshot().await, cross, currency, amount)?;
    info!(
        cross,
        from = %conversion.from,
        to = %conversion.to,
        converted = conversion.converted,
        "Converted amount"
    );
    println!("{}", conversion.display());
    Ok(())
}
