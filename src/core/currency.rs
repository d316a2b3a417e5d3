//! Currency codes, crosses and the rate provider abstraction

use crate::core::error::{ExchangeError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

/// A three character currency identifier such as `USD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Number of characters in a valid code.
    pub const LEN: usize = 3;

    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        if code.chars().count() != Self::LEN {
            return Err(ExchangeError::InvalidCurrencyCode(code));
        }
        Ok(CurrencyCode(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self> {
        CurrencyCode::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = ExchangeError;

    fn try_from(value: String) -> Result<Self> {
        CurrencyCode::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> String {
        code.0
    }
}

impl PartialEq<str> for CurrencyCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// An ordered pair of currencies. One unit of `base` is worth `rate` units
/// of `quote`.
///
/// The textual key of a cross is the two codes concatenated, base first:
/// `USD` and `EUR` form `USDEUR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCross {
    base: CurrencyCode,
    quote: CurrencyCode,
}

impl CurrencyCross {
    pub fn new(base: CurrencyCode, quote: CurrencyCode) -> Self {
        CurrencyCross { base, quote }
    }

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    pub fn quote(&self) -> &CurrencyCode {
        &self.quote
    }

    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Returns true if `key` is this cross's concatenated key.
    pub fn matches_key(&self, key: &str) -> bool {
        let base = self.base.as_str();
        let quote = self.quote.as_str();
        key.len() == base.len() + quote.len() && key.starts_with(base) && key.ends_with(quote)
    }

    pub fn involves(&self, currency: &str) -> bool {
        self.base == *currency || self.quote == *currency
    }
}

impl Display for CurrencyCross {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.base, self.quote)
    }
}

impl Serialize for CurrencyCross {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Source of the rate for converting one unit of `from` into `to`.
#[async_trait]
pub trait CurrencyRateProvider: Send + Sync {
    async fn get_rate(&self, from: &str, to: &str) -> anyhow::Result<f64>;
}
