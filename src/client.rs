//! High-level client — `SwapClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::price::client::Prices;
use crate::domain::token::client::Tokens;
use crate::error::SwapError;
use crate::feed::PriceFeed;
#[cfg(feature = "http")]
use crate::http::PriceFeedHttp;

use std::sync::Arc;

// Re-export sub-client types for convenience.
pub use crate::domain::price::client::Prices as PricesClient;
pub use crate::domain::token::client::Tokens as TokensClient;

/// The primary entry point of the SDK.
///
/// Provides nested sub-client accessors: `client.prices()`, `client.tokens()`.
#[derive(Clone)]
pub struct SwapClient {
    pub(crate) feed: Arc<dyn PriceFeed>,
    pub(crate) icon_base_url: String,
}

impl SwapClient {
    pub fn builder() -> SwapClientBuilder {
        SwapClientBuilder::default()
    }

    /// A client over an already-built feed with the default icon base URL.
    pub fn with_feed(feed: impl PriceFeed + 'static) -> Self {
        Self {
            feed: Arc::new(feed),
            icon_base_url: crate::network::DEFAULT_TOKEN_ICONS_URL.to_string(),
        }
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens { client: self }
    }

    pub fn icon_base_url(&self) -> &str {
        &self.icon_base_url
    }
}

impl std::fmt::Debug for SwapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapClient")
            .field("icon_base_url", &self.icon_base_url)
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct SwapClientBuilder {
    price_feed_url: String,
    icon_base_url: String,
    feed: Option<Arc<dyn PriceFeed>>,
}

impl Default for SwapClientBuilder {
    fn default() -> Self {
        Self {
            price_feed_url: crate::network::DEFAULT_PRICE_FEED_URL.to_string(),
            icon_base_url: crate::network::DEFAULT_TOKEN_ICONS_URL.to_string(),
            feed: None,
        }
    }
}

impl SwapClientBuilder {
    pub fn price_feed_url(mut self, url: &str) -> Self {
        self.price_feed_url = url.to_string();
        self
    }

    pub fn icon_base_url(mut self, url: &str) -> Self {
        self.icon_base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Use a custom feed instead of HTTP. `price_feed_url` is ignored then.
    pub fn feed(mut self, feed: impl PriceFeed + 'static) -> Self {
        self.feed = Some(Arc::new(feed));
        self
    }

    pub fn build(self) -> Result<SwapClient, SwapError> {
        if self.icon_base_url.is_empty() {
            return Err(SwapError::Config("icon base URL is empty".to_string()));
        }
        #[cfg(feature = "http")]
        reqwest::Url::parse(&self.icon_base_url)
            .map_err(|e| SwapError::Config(format!("invalid icon base URL: {}", e)))?;

        let feed = match self.feed {
            Some(feed) => feed,
            None => self.http_feed()?,
        };

        Ok(SwapClient {
            feed,
            icon_base_url: self.icon_base_url,
        })
    }

    #[cfg(feature = "http")]
    fn http_feed(&self) -> Result<Arc<dyn PriceFeed>, SwapError> {
        reqwest::Url::parse(&self.price_feed_url)
            .map_err(|e| SwapError::Config(format!("invalid price feed URL: {}", e)))?;
        let http = PriceFeedHttp::new(&self.price_feed_url)?;
        Ok(Arc::new(http))
    }

    #[cfg(not(feature = "http"))]
    fn http_feed(&self) -> Result<Arc<dyn PriceFeed>, SwapError> {
        Err(SwapError::Config(format!(
            "no price feed configured and the `http` feature is disabled ({})",
            self.price_feed_url
        )))
    }
}
