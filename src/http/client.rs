//! Low-level HTTP client — `PriceFeedHttp`.
//!
//! Fetches the price feed and returns wire types. Conversion to domain types
//! happens in the `PriceFeed` impl at the bottom of this file.

use crate::domain::price::wire::PricesResponse;
use crate::domain::price::PriceObservation;
use crate::error::{HttpError, SwapError};
use crate::feed::PriceFeed;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for a JSON price feed endpoint.
pub struct PriceFeedHttp {
    feed_url: String,
    client: Client,
}

impl PriceFeedHttp {
    pub fn new(feed_url: &str) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(std::time::Duration::from_secs(15))
                .pool_max_idle_per_host(2);
        }

        Ok(Self {
            feed_url: feed_url.to_string(),
            client: builder.build()?,
        })
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Fetch the entire feed. No pagination, caching or retries.
    pub async fn get_prices(&self) -> Result<PricesResponse, HttpError> {
        self.do_get(&self.feed_url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn do_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            408 => Err(HttpError::Timeout),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl Clone for PriceFeedHttp {
    fn clone(&self) -> Self {
        Self {
            feed_url: self.feed_url.clone(),
            client: self.client.clone(),
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl PriceFeed for PriceFeedHttp {
    async fn fetch(&self) -> Result<Vec<PriceObservation>, SwapError> {
        let wire = self.get_prices().await?;
        let total = wire.len();
        let observations: Vec<PriceObservation> = wire
            .into_iter()
            .filter_map(|p| match PriceObservation::try_from(p) {
                Ok(o) => Some(o),
                Err(e) => {
                    tracing::warn!("Dropping feed entry: {}", e);
                    None
                }
            })
            .collect();
        tracing::debug!(total, kept = observations.len(), "Fetched price feed");
        Ok(observations)
    }
}
