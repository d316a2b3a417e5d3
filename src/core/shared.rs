use crate::core::currency::{CurrencyCode, CurrencyCross, CurrencyRateProvider};
use crate::core::error::Result;
use crate::core::exchange::{CurrencyExchange, ExchangeRates};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Cloneable handle to one exchange table shared between tasks.
///
/// Rate updates take the write lock; conversions and reads share the read
/// lock, so every call sees the table either before or after an update.
#[derive(Clone)]
pub struct SharedExchange {
    inner: Arc<RwLock<CurrencyExchange>>,
}

impl SharedExchange {
    pub fn new(exchange: CurrencyExchange) -> Self {
        Self {
            inner: Arc::new(RwLock::new(exchange)),
        }
    }

    pub async fn currencies(&self) -> Vec<CurrencyCode> {
        self.inner.read().await.currencies().to_vec()
    }

    pub async fn currency_crosses(&self) -> Vec<CurrencyCross> {
        self.inner.read().await.currency_crosses().to_vec()
    }

    pub async fn exchange_rates(&self) -> ExchangeRates {
        self.inner.read().await.exchange_rates()
    }

    pub async fn specify_exchange_rate(&self, cross: &str, rate: f64) -> Result<()> {
        let mut exchange = self.inner.write().await;
        exchange.specify_exchange_rate(cross, rate)
    }

    pub async fn calculate_exchanged_rate(&self, cross: &str, currency: &str, amount: f64) -> Result<f64> {
        self.inner
            .read()
            .await
            .calculate_exchanged_rate(cross, currency, amount)
    }

    /// Copy of the current table.
    pub async fn snapshot(&self) -> CurrencyExchange {
        self.inner.read().await.clone()
    }
}

impl From<CurrencyExchange> for SharedExchange {
    fn from(exchange: CurrencyExchange) -> Self {
        Self::new(exchange)
    }
}

#[async_trait]
impl CurrencyRateProvider for SharedExchange {
    async fn get_rate(&self, from: &str, to: &str) -> anyhow::Result<f64> {
        let rate = self.inner.read().await.rate_between(from, to)?;
        debug!(from, to, rate, "Resolved rate from exchange table");
        Ok(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ExchangeError;

    fn shared() -> SharedExchange {
        SharedExchange::new(CurrencyExchange::new(["AAA", "BBB", "CCC"]).unwrap())
    }

    #[tokio::test]
    async fn test_clones_share_the_table() {
        let exchange = shared();
        let other = exchange.clone();

        exchange.specify_exchange_rate("AAABBB", 6.50).await.unwrap();
        assert_eq!(other.exchange_rates().await.get("AAABBB"), Some(6.50));

        let converted = other
            .calculate_exchanged_rate("AAABBB", "AAA", 200.0)
            .await
            .unwrap();
        assert!((converted - 1300.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_errors_pass_through() {
        let exchange = shared();
        assert_eq!(
            exchange.specify_exchange_rate("AAADDD", 1.0).await,
            Err(ExchangeError::UnknownCross("AAADDD".to_string()))
        );
        assert_eq!(
            exchange.calculate_exchanged_rate("AAABBB", "AAA", 1.0).await,
            Err(ExchangeError::RateNotSpecified("AAABBB".to_string()))
        );
    }

    #[tokio::test]
    async fn test_concurrent_updates_and_reads() {
        let exchange = shared();
        let mut handles = Vec::new();
        for i in 1..=20 {
            let writer = exchange.clone();
            handles.push(tokio::spawn(async move {
                writer
                    .specify_exchange_rate("AAABBB", f64::from(i))
                    .await
                    .unwrap();
            }));
            let reader = exchange.clone();
            handles.push(tokio::spawn(async move {
                // Either no rate yet or a whole one
                if let Ok(value) = reader.calculate_exchanged_rate("AAABBB", "AAA", 1.0).await {
                    assert!((1.0..=20.0).contains(&value));
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let rates = exchange.exchange_rates().await;
        assert_eq!(rates.len(), 1);
        assert!(rates.get("AAABBB").is_some());
    }

    #[tokio::test]
    async fn test_rate_provider() {
        let exchange = shared();
        exchange.specify_exchange_rate("AAACCC", 0.5).await.unwrap();

        assert_eq!(exchange.get_rate("AAA", "CCC").await.unwrap(), 0.5);
        assert_eq!(exchange.get_rate("CCC", "AAA").await.unwrap(), 2.0);
        assert_eq!(exchange.get_rate("BBB", "BBB").await.unwrap(), 1.0);

        let err = exchange.get_rate("AAA", "BBB").await.unwrap_err();
        assert!(err.to_string().contains("no direct rate"));
    }

    #[tokio::test]
    async fn test_snapshot_is_detached() {
        let exchange = shared();
        let snapshot = exchange.snapshot().await;
        exchange.specify_exchange_rate("AAABBB", 2.0).await.unwrap();

        assert!(snapshot.exchange_rates().is_empty());
        assert_eq!(exchange.currencies().await.len(), 3);
        assert_eq!(exchange.currency_crosses().await.len(), 3);
    }
}
