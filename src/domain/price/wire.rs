//! Wire types for the price feed.

use crate::shared::serde_util::feed_date;
use crate::shared::Symbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the price feed, as sent.
///
/// The feed body is a bare JSON array of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceData {
    pub currency: Symbol,
    #[serde(with = "feed_date")]
    pub date: DateTime<Utc>,
    pub price: f64,
}

/// Full feed response.
pub type PricesResponse = Vec<PriceData>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_price_data_deserialize() {
        let json = r#"{"currency":"BLUR","date":"2023-08-29T07:10:40.000Z","price":0.20811525423728813}"#;
        let data: PriceData = serde_json::from_str(json).unwrap();
        assert_eq!(data.currency, "BLUR");
        assert_eq!(
            data.date,
            Utc.with_ymd_and_hms(2023, 8, 29, 7, 10, 40).unwrap()
        );
        assert!((data.price - 0.20811525423728813).abs() < f64::EPSILON);
    }

    #[test]
    fn test_prices_response_deserialize() {
        let json = r#"[
            {"currency":"A","date":"2024-01-01","price":2},
            {"currency":"B","date":"2024-01-01","price":4}
        ]"#;
        let resp: PricesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.len(), 2);
        assert_eq!(resp[1].currency, "B");
        assert_eq!(resp[1].price, 4.0);
    }

    #[test]
    fn test_invalid_date_is_malformed() {
        let json = r#"[{"currency":"A","date":"not a date","price":2}]"#;
        assert!(serde_json::from_str::<PricesResponse>(json).is_err());
    }

    #[test]
    fn test_non_numeric_price_is_malformed() {
        let json = r#"[{"currency":"A","date":"2024-01-01","price":"2"}]"#;
        assert!(serde_json::from_str::<PricesResponse>(json).is_err());
    }

    #[test]
    fn test_date_serializes_as_rfc3339() {
        let data = PriceData {
            currency: Symbol::from("A"),
            date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            price: 1.5,
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["date"], "2024-01-01T00:00:00.000Z");
    }
}
