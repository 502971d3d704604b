//! Network URL constants for the swap SDK.

/// Default price feed URL (JSON array of `{currency, date, price}`).
pub const DEFAULT_PRICE_FEED_URL: &str = "https://interview.switcheo.com/prices.json";

/// Default base URL for token icons, resolved as `{base}/{symbol}.svg`.
pub const DEFAULT_TOKEN_ICONS_URL: &str = "https://raw.githubusercontent.com/Switcheo/token-icons/d27f9c059cc52c7864bb70995560d8fd15083d9a/tokens";
