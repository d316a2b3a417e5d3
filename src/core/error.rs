//! Errors raised by the exchange table.

use thiserror::Error;

/// Category of an [`ExchangeError`].
///
/// Every precondition failure in the table is an invalid argument; the
/// variants of [`ExchangeError`] only narrow down which argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExchangeError {
    #[error("no currencies supplied")]
    MissingCurrencies,

    #[error("currency list is empty")]
    EmptyCurrencies,

    #[error("invalid currency code '{0}': expected exactly 3 characters")]
    InvalidCurrencyCode(String),

    #[error("currency '{0}' is listed more than once")]
    DuplicateCurrency(String),

    #[error("currency cross is empty")]
    EmptyCross,

    #[error("unknown currency cross '{0}'")]
    UnknownCross(String),

    #[error("currency '{currency}' is not part of cross '{cross}'")]
    CurrencyNotInCross { cross: String, currency: String },

    #[error("no exchange rate specified for cross '{0}'")]
    RateNotSpecified(String),

    #[error("exchange rate must be a positive number, got {0}")]
    NonPositiveRate(f64),

    #[error("amount must be a positive number, got {0}")]
    NonPositiveAmount(f64),

    #[error("no direct rate from '{from}' to '{to}'")]
    NoDirectRate { from: String, to: String },
}

impl ExchangeError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

pub type Result<T, E = ExchangeError> = std::result::Result<T, E>;
