//! A currency cross rate table.
//!
//! [`CurrencyExchange`] derives every cross between an ordered set of
//! currencies, stores a rate per cross and converts amounts with it.
//!
//! ```
//! use crossrate::CurrencyExchange;
//!
//! let mut exchange = CurrencyExchange::new(["AAA", "BBB", "CCC"]).unwrap();
//! exchange.specify_exchange_rate("AAABBB", 6.50).unwrap();
//!
//! let converted = exchange.calculate_exchanged_rate("AAABBB", "AAA", 200.0).unwrap();
//! assert!((converted - 1300.0).abs() < 1e-9);
//! ```

pub mod cli;
pub mod core;

pub use crate::core::{
    CurrencyCode, CurrencyCross, CurrencyExchange, ErrorKind, ExchangeError, ExchangeRates,
    SharedExchange,
};

use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Currencies,
    Crosses,
    Rates {
        json: bool,
    },
    Convert {
        cross: String,
        currency: String,
        amount: f64,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("crossrate starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let exchange = SharedExchange::new(config.build_exchange()?);

    match command {
        AppCommand::Currencies => cli::crosses::run_currencies(&exchange).await,
        AppCommand::Crosses => cli::crosses::run_crosses(&exchange).await,
        AppCommand::Rates { json } => cli::rates::run(&exchange, json).await?,
        AppCommand::Convert {
            cross,
            currency,
            amount,
        } => cli::convert::run(&exchange, &cross, &currency, amount).await?,
    }
    Ok(())
}
