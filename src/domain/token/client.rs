//! Tokens sub-client — the list of tokens a swap form can offer.

use crate::client::SwapClient;
use crate::domain::price::unique_symbols;
use crate::domain::token::{self, Token};
use crate::shared::Symbol;
use futures_util::future::join_all;

/// Sub-client for token listing.
pub struct Tokens<'a> {
    pub(crate) client: &'a SwapClient,
}

impl<'a> Tokens<'a> {
    /// All tokens with a resolvable price, in first-seen feed order.
    ///
    /// Prices are resolved concurrently, one lookup per symbol; symbols whose
    /// lookup comes back empty are left out. Returns an empty list when the
    /// feed itself cannot be fetched.
    pub async fn available(&self) -> Vec<Token> {
        let observations = match self.client.prices().observations().await {
            Ok(o) => o,
            Err(e) => {
                tracing::warn!("Error fetching tokens: {}", e);
                return Vec::new();
            }
        };

        let candidates: Vec<Token> = unique_symbols(&observations)
            .into_iter()
            .map(|symbol| Token::new(symbol, &self.client.icon_base_url))
            .collect();

        let prices = self.client.prices();
        let resolved = join_all(candidates.into_iter().map(|token| {
            let prices = &prices;
            async move {
                let price = prices.latest(&token.symbol).await;
                (token, price)
            }
        }))
        .await;

        let total = resolved.len();
        let tokens: Vec<Token> = resolved
            .into_iter()
            .filter_map(|(token, price)| price.map(|p| token.with_price(p)))
            .collect();

        if tokens.len() < total {
            tracing::debug!(
                dropped = total - tokens.len(),
                "Excluded tokens without a resolved price"
            );
        }
        tokens
    }

    /// Icon URL for `symbol`. Pure; no request is made.
    pub fn icon_url(&self, symbol: &Symbol) -> String {
        token::icon_url(&self.client.icon_base_url, symbol)
    }
}
