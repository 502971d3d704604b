//! Price feed abstraction.
//!
//! `PriceFeed` is the seam between the price client and the transport. The
//! HTTP implementation lives in `crate::http`; `StaticPriceFeed` serves a fixed
//! set of observations (offline demos, tests, UIs that already hold a feed).

use crate::domain::price::PriceObservation;
use crate::error::SwapError;
use async_trait::async_trait;

/// A source of price observations.
///
/// Every call retrieves the entire feed. Implementations must not cache:
/// the price client relies on each lookup seeing fresh data.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait PriceFeed: Send + Sync {
    async fn fetch(&self) -> Result<Vec<PriceObservation>, SwapError>;
}

/// In-memory feed returning the same observations on every call.
#[derive(Debug, Clone, Default)]
pub struct StaticPriceFeed {
    observations: Vec<PriceObservation>,
}

impl StaticPriceFeed {
    pub fn new(observations: Vec<PriceObservation>) -> Self {
        Self { observations }
    }

    /// Build from a feed body in wire format.
    ///
    /// Entries whose price cannot be represented are dropped.
    pub fn from_json(json: &str) -> Result<Self, SwapError> {
        let wire: crate::domain::price::wire::PricesResponse = serde_json::from_str(json)?;
        Ok(Self::new(
            wire.into_iter()
                .filter_map(|p| PriceObservation::try_from(p).ok())
                .collect(),
        ))
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl PriceFeed for StaticPriceFeed {
    async fn fetch(&self) -> Result<Vec<PriceObservation>, SwapError> {
        Ok(self.observations.clone())
    }
}
