//! Conversions from wire types to domain types for prices.

use super::wire::PriceData;
use super::{PriceDataError, PriceObservation};
use rust_decimal::Decimal;
use std::str::FromStr;

impl TryFrom<PriceData> for PriceObservation {
    type Error = PriceDataError;

    fn try_from(p: PriceData) -> Result<Self, Self::Error> {
        // Go through the shortest round-trip string so 0.1 stays 0.1.
        let price = if p.price.is_finite() {
            Decimal::from_str(&p.price.to_string()).ok()
        } else {
            None
        };
        match price {
            Some(price) => Ok(Self {
                currency: p.currency,
                date: p.date,
                price,
            }),
            None => Err(PriceDataError::Unrepresentable {
                currency: p.currency,
                price: p.price,
            }),
        }
    }
}
