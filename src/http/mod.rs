//! HTTP layer — `PriceFeedHttp`, a single GET per fetch.

pub mod client;

pub use client::PriceFeedHttp;
