//! Token domain — currencies eligible for selection in the swap form.

pub mod client;

use crate::shared::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A currency resolved from the feed.
///
/// Tokens in a listing always carry a price; `price` is optional so UIs can
/// build placeholder tokens before resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub symbol: Symbol,
    pub name: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

impl Token {
    /// A token with no resolved price. The name defaults to the symbol.
    pub fn new(symbol: Symbol, icon_base_url: &str) -> Self {
        Self {
            name: symbol.to_string(),
            icon: icon_url(icon_base_url, &symbol),
            symbol,
            price: None,
        }
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }
}

/// Icon URL for `symbol`: `{base}/{symbol}.svg`.
///
/// The asset may not exist; the rendering layer shows a placeholder then.
pub fn icon_url(base_url: &str, symbol: &Symbol) -> String {
    format!(
        "{}/{}.svg",
        base_url.trim_end_matches('/'),
        urlencoding::encode(symbol.as_str())
    )
}
