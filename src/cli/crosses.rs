use super::ui;
use crate::core::{CurrencyExchange, SharedExchange};
use comfy_table::Cell;

/// Renders the configured currencies, one per line, in cross order.
pub fn display_currencies(exchange: &CurrencyExchange) -> String {
    let mut output = format!("{}\n\n", ui::style_text("Currencies", ui::StyleType::Title));
    for (index, currency) in exchange.currencies().iter().enumerate() {
        output.push_str(&format!("{:>3}. {currency}\n", index + 1));
    }
    output
}

/// Renders every cross with its base, quote and current rate.
pub fn display_crosses(exchange: &CurrencyExchange) -> String {
    let rates = exchange.exchange_rates();
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Cross"),
        ui::header_cell("Base"),
        ui::header_cell("Quote"),
        ui::header_cell("Rate"),
    ]);

    for cross in exchange.currency_crosses() {
        table.add_row(vec![
            Cell::new(cross.key()),
            Cell::new(cross.base()),
            Cell::new(cross.quote()),
            ui::rate_cell(rates.get(&cross.key())),
        ]);
    }

    let specified = format!("{}/{}", rates.len(), exchange.currency_crosses().len());
    format!(
        "{}\n\n{table}\n\n{} {}",
        ui::style_text("Currency Crosses", ui::StyleType::Title),
        ui::style_text("Rates specified:", ui::StyleType::Label),
        ui::style_text(&specified, ui::StyleType::Subtle),
    )
}

pub async fn run_currencies(exchange: &SharedExchange) {
    println!("{}", display_currencies(&exchange.snapshot().await));
}

pub async fn run_crosses(exchange: &SharedExchange) {
    println!("{}", display_crosses(&exchange.snapshot().await));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exchange() -> CurrencyExchange {
        let mut exchange = CurrencyExchange::new(["AAA", "BBB", "CCC"]).unwrap();
        exchange.specify_exchange_rate("AAACCC", 0.5).unwrap();
        exchange
    }

    #[test]
    fn test_display_currencies() {
        let output = console::strip_ansi_codes(&display_currencies(&exchange())).to_string();
        let aaa = output.find("1. AAA").unwrap();
        let bbb = output.find("2. BBB").unwrap();
        let ccc = output.find("3. CCC").unwrap();
        assert!(aaa < bbb && bbb < ccc);
    }

    #[test]
    fn test_display_crosses() {
        let output = console::strip_ansi_codes(&display_crosses(&exchange())).to_string();
        let first = output.find("AAABBB").unwrap();
        let second = output.find("AAACCC").unwrap();
        let third = output.find("BBBCCC").unwrap();
        assert!(first < second && second < third);
        assert!(output.contains("0.5"));
        assert!(output.contains("N/A"));
        assert!(output.contains("1/3"));
    }
}
