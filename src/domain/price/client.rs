//! Prices sub-client — raw observations and latest-price lookup.

use crate::client::SwapClient;
use crate::domain::price::{latest_observation, PriceObservation};
use crate::error::SwapError;
use crate::shared::Symbol;
use rust_decimal::Decimal;

/// Sub-client for price operations.
pub struct Prices<'a> {
    pub(crate) client: &'a SwapClient,
}

impl<'a> Prices<'a> {
    /// Fetch the entire feed.
    pub async fn observations(&self) -> Result<Vec<PriceObservation>, SwapError> {
        self.client.feed.fetch().await
    }

    /// Latest price for `symbol`, or `None` when the symbol is not in the feed
    /// or the feed cannot be fetched. Failures are logged, never returned.
    pub async fn latest(&self, symbol: &Symbol) -> Option<Decimal> {
        match self.observations().await {
            Ok(observations) => latest_observation(&observations, symbol).map(|o| o.price),
            Err(e) => {
                tracing::warn!(%symbol, "Error fetching price: {}", e);
                None
            }
        }
    }
}
