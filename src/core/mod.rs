//! Core exchange table types and logic

pub mod config;
pub mod currency;
pub mod error;
pub mod exchange;
pub mod log;
pub mod shared;

// Re-export main types for cleaner imports
pub use currency::{CurrencyCode, CurrencyCross, CurrencyRateProvider};
pub use error::{ErrorKind, ExchangeError};
pub use exchange::{CurrencyExchange, ExchangeRates};
pub use shared::SharedExchange;
