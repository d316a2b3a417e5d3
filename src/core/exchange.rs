//! The exchange rate table.
//!
//! A [`CurrencyExchange`] is built from an ordered list of currency codes. It
//! derives every cross between them once, keeps a table of rates for those
//! crosses and converts amounts using a stored rate.

use crate::core::currency::{CurrencyCode, CurrencyCross};
use crate::core::error::{ExchangeError, Result};
use serde::Serialize;
use serde::ser::SerializeMap;
use std::collections::HashMap;
use tracing::debug;

/// Currency set, derived crosses and the rates specified for them.
#[derive(Debug, Clone)]
pub struct CurrencyExchange {
    currencies: Vec<CurrencyCode>,
    crosses: Vec<CurrencyCross>,
    rates: HashMap<CurrencyCross, f64>,
    // First-insertion order of `rates`
    rate_order: Vec<CurrencyCross>,
}

impl CurrencyExchange {
    /// Builds an exchange for `currencies`, in the given order.
    ///
    /// Fails if the list is empty, if any code is not exactly three
    /// characters long, or if a code appears twice.
    pub fn new<I, S>(currencies: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut codes: Vec<CurrencyCode> = Vec::new();
        for currency in currencies {
            let code = CurrencyCode::new(currency)?;
            if codes.contains(&code) {
                return Err(ExchangeError::DuplicateCurrency(code.into()));
            }
            codes.push(code);
        }
        if codes.is_empty() {
            return Err(ExchangeError::EmptyCurrencies);
        }

        let crosses = generate_crosses(&codes);
        debug!(
            currencies = codes.len(),
            crosses = crosses.len(),
            "Created currency exchange"
        );

        Ok(CurrencyExchange {
            currencies: codes,
            crosses,
            rates: HashMap::new(),
            rate_order: Vec::new(),
        })
    }

    /// Like [`CurrencyExchange::new`], treating a missing list as an error.
    pub fn from_optional<I, S>(currencies: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match currencies {
            Some(currencies) => Self::new(currencies),
            None => Err(ExchangeError::MissingCurrencies),
        }
    }

    pub fn currencies(&self) -> &[CurrencyCode] {
        &self.currencies
    }

    /// All crosses, ordered by the position of the base currency and then of
    /// the quote currency.
    pub fn currency_crosses(&self) -> &[CurrencyCross] {
        &self.crosses
    }

    /// Snapshot of the rate table in the order crosses were first given a rate.
    pub fn exchange_rates(&self) -> ExchangeRates {
        ExchangeRates(
            self.rate_order
                .iter()
                .map(|cross| (cross.clone(), self.rates[cross]))
                .collect(),
        )
    }

    /// Sets the rate of `cross`, replacing any earlier rate.
    ///
    /// `rate` is the number of quote currency units one base currency unit
    /// buys, and must be positive and finite.
    pub fn specify_exchange_rate(&mut self, cross: &str, rate: f64) -> Result<()> {
        let cross = self.find_cross(cross)?.clone();
        if !(rate > 0.0 && rate.is_finite()) {
            return Err(ExchangeError::NonPositiveRate(rate));
        }

        debug!(%cross, rate, "Specifying exchange rate");
        if self.rates.insert(cross.clone(), rate).is_none() {
            self.rate_order.push(cross);
        }
        Ok(())
    }

    /// Converts `amount` of `currency` to the other side of `cross`.
    ///
    /// If `currency` is the base of the cross the result is `amount * rate`,
    /// if it is the quote the result is `amount / rate`.
    pub fn calculate_exchanged_rate(&self, cross: &str, currency: &str, amount: f64) -> Result<f64> {
        let cross = self.find_cross(cross)?;
        if !cross.involves(currency) {
            return Err(ExchangeError::CurrencyNotInCross {
                cross: cross.key(),
                currency: currency.to_string(),
            });
        }
        let rate = self.stored_rate(cross)?;
        if !(amount > 0.0 && amount.is_finite()) {
            return Err(ExchangeError::NonPositiveAmount(amount));
        }

        let converted = if cross.base() == currency {
            amount * rate
        } else {
            amount / rate
        };
        debug!(%cross, currency, amount, rate, converted, "Calculated exchanged amount");
        Ok(converted)
    }

    /// The stored rate of `cross`.
    pub fn rate(&self, cross: &str) -> Result<f64> {
        let cross = self.find_cross(cross)?;
        self.stored_rate(cross)
    }

    /// Rate for converting one unit of `from` into `to` using a single stored
    /// cross, inverted when the cross is quoted the other way round.
    pub fn rate_between(&self, from: &str, to: &str) -> Result<f64> {
        if from == to && self.currencies.iter().any(|c| c == from) {
            return Ok(1.0);
        }

        let no_direct_rate = || ExchangeError::NoDirectRate {
            from: from.to_string(),
            to: to.to_string(),
        };
        let cross = self
            .crosses
            .iter()
            .find(|cross| {
                (cross.base() == from && cross.quote() == to)
                    || (cross.base() == to && cross.quote() == from)
            })
            .ok_or_else(no_direct_rate)?;
        let rate = self.rates.get(cross).copied().ok_or_else(no_direct_rate)?;

        if cross.base() == from {
            Ok(rate)
        } else {
            Ok(1.0 / rate)
        }
    }

    fn find_cross(&self, key: &str) -> Result<&CurrencyCross> {
        if key.is_empty() {
            return Err(ExchangeError::EmptyCross);
        }
        self.crosses
            .iter()
            .find(|cross| cross.matches_key(key))
            .ok_or_else(|| ExchangeError::UnknownCross(key.to_string()))
    }

    fn stored_rate(&self, cross: &CurrencyCross) -> Result<f64> {
        self.rates
            .get(cross)
            .copied()
            .ok_or_else(|| ExchangeError::RateNotSpecified(cross.key()))
    }
}

fn generate_crosses(currencies: &[CurrencyCode]) -> Vec<CurrencyCross> {
    let mut crosses = Vec::with_capacity(currencies.len() * currencies.len().saturating_sub(1) / 2);
    for (i, base) in currencies.iter().enumerate() {
        for quote in &currencies[i + 1..] {
            crosses.push(CurrencyCross::new(base.clone(), quote.clone()));
        }
    }
    crosses
}

/// Rates keyed by cross, in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExchangeRates(Vec<(CurrencyCross, f64)>);

impl ExchangeRates {
    pub fn get(&self, cross: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(c, _)| c.matches_key(cross))
            .map(|(_, rate)| *rate)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCross, f64)> {
        self.0.iter().map(|(cross, rate)| (cross, *rate))
    }

    /// `(key, rate)` pairs, handy for comparing against literals.
    pub fn to_pairs(&self) -> Vec<(String, f64)> {
        self.iter().map(|(cross, rate)| (cross.key(), rate)).collect()
    }
}

impl Serialize for ExchangeRates {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (cross, rate) in &self.0 {
            map.serialize_entry(cross, rate)?;
        }
        map.end()
    }
}


#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    /// Distinct upper-case three letter codes, 1 to 12 of them.
    fn distinct_codes() -> impl Strategy<Value = Vec<String>> {
        prop::collection::btree_set("[A-Z]{3}", 1..12)
            .prop_flat_map(|set| Just(set.into_iter().collect::<Vec<_>>()).prop_shuffle())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_cross_count_and_order(codes in distinct_codes()) {
            let exchange = CurrencyExchange::new(codes.clone()).unwrap();
            let n = codes.len();
            let crosses = exchange.currency_crosses();
            prop_assert_eq!(crosses.len(), n * (n - 1) / 2);

            let mut expected = Vec::new();
            for i in 0..n {
                for j in i + 1..n {
                    expected.push(format!("{}{}", codes[i], codes[j]));
                }
            }
            let actual: Vec<String> = crosses.iter().map(CurrencyCross::key).collect();
            prop_assert_eq!(actual, expected);

            for cross in crosses {
                prop_assert_ne!(cross.base(), cross.quote());
            }
        }

        #[test]
        fn prop_conversion_round_trips(rate in 0.0001f64..10_000.0, amount in 0.01f64..1_000_000.0) {
            let mut exchange = CurrencyExchange::new(["AAA", "BBB"]).unwrap();
            exchange.specify_exchange_rate("AAABBB", rate).unwrap();
            let quote = exchange.calculate_exchanged_rate("AAABBB", "AAA", amount).unwrap();
            let back = exchange.calculate_exchanged_rate("AAABBB", "BBB", quote).unwrap();
            prop_assert!((back - amount).abs() <= amount * 1e-9);
        }
    }
}
