//! # Currency Swap SDK
//!
//! Price feed client and swap form state for native and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, formatting, domain models (always available, WASM-safe)
//! 2. **Feed** — The `PriceFeed` trait; `StaticPriceFeed` for offline use
//! 3. **HTTP** — `PriceFeedHttp`, a `reqwest` feed
//! 4. **High-Level Client** — `SwapClient` with nested sub-clients
//! 5. **Form State** — `SwapForm`, the app-owned swap form controller
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use currency_swap::prelude::*;
//!
//! let client = SwapClient::builder().build()?;
//! let log = NotificationLog::new();
//! let mut form = SwapForm::new(SwapFormConfig::default(), log.clone());
//!
//! form.mount(&client).await;
//! form.select_to("USDC");
//! form.set_amount("1.5");
//! form.swap().await.ok();
//!
//! for note in log.take() {
//!     println!("{}: {}", note.title, note.message);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatting used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Feed ────────────────────────────────────────────────────────────

/// Price feed abstraction.
pub mod feed;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// HTTP price feed.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `SwapClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::Symbol;

    // Domain types — price
    pub use crate::domain::price::{latest_observation, unique_symbols, PriceObservation};

    // Domain types — token
    pub use crate::domain::token::{icon_url, Token};

    // Domain types — swap (layer 5 form state)
    pub use crate::domain::swap::{
        derive_rate, FormPhase, Notification, NotificationKind, NotificationLog,
        NotificationSink, PendingSwap, SwapForm, SwapFormConfig, SwapReceipt, SwapSelection,
    };

    // Errors
    pub use crate::error::{FormError, HttpError, SwapError};

    // Network
    pub use crate::network::{DEFAULT_PRICE_FEED_URL, DEFAULT_TOKEN_ICONS_URL};

    // Feed
    pub use crate::feed::{PriceFeed, StaticPriceFeed};

    // HTTP
    #[cfg(feature = "http")]
    pub use crate::http::PriceFeedHttp;

    // Client + sub-clients
    pub use crate::client::{PricesClient, SwapClient, SwapClientBuilder, TokensClient};
}
