//! Price domain — feed observations and latest-price resolution.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::Symbol;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One timestamped price record for a currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub currency: Symbol,
    pub date: DateTime<Utc>,
    pub price: Decimal,
}

/// Rejected feed entry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriceDataError {
    #[error("price for {currency} is not representable: {price}")]
    Unrepresentable { currency: Symbol, price: f64 },
}

/// Select the latest observation for `symbol`.
///
/// Among observations sharing the latest date, the first in slice order wins.
pub fn latest_observation<'a>(
    observations: &'a [PriceObservation],
    symbol: &Symbol,
) -> Option<&'a PriceObservation> {
    observations
        .iter()
        .filter(|o| &o.currency == symbol)
        .fold(None, |best: Option<&PriceObservation>, o| match best {
            Some(b) if b.date >= o.date => Some(b),
            _ => Some(o),
        })
}

/// Unique currency symbols in first-seen order.
pub fn unique_symbols(observations: &[PriceObservation]) -> Vec<Symbol> {
    let mut seen = HashSet::new();
    observations
        .iter()
        .filter(|o| seen.insert(&o.currency))
        .map(|o| o.currency.clone())
        .collect()
}
