//! Swap domain — pair selection, rate derivation, simulated execution.

pub mod notify;
pub mod state;

use crate::domain::token::Token;
use crate::error::FormError;
use crate::shared::{fmt, Symbol};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::time::Duration;

pub use notify::{Notification, NotificationKind, NotificationLog, NotificationSink};
pub use state::{FormPhase, PendingSwap, SwapForm};

/// Timing and precision knobs for a swap form.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapFormConfig {
    /// Length of the simulated swap.
    pub swap_delay: Duration,
    /// Display duration for error notifications.
    pub error_duration: Duration,
    /// Display duration for success notifications.
    pub success_duration: Duration,
    /// Decimal places for the output amount and the rate label.
    pub output_precision: u32,
}

impl Default for SwapFormConfig {
    fn default() -> Self {
        Self {
            swap_delay: Duration::from_millis(1500),
            error_duration: Duration::from_secs(3),
            success_duration: Duration::from_secs(5),
            output_precision: 6,
        }
    }
}

/// Exchange rate `from.price / to.price`.
///
/// `None` unless both prices are present and positive.
pub fn derive_rate(from: Option<&Token>, to: Option<&Token>) -> Option<Decimal> {
    let from_price = from?.price?;
    let to_price = to?.price?;
    if from_price <= Decimal::ZERO || to_price <= Decimal::ZERO {
        return None;
    }
    from_price.checked_div(to_price)
}

/// Parse a user-entered amount: plain decimal or scientific notation.
pub fn parse_amount(raw: &str) -> Result<Decimal, FormError> {
    let trimmed = raw.trim();
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| FormError::InvalidAmount(raw.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(FormError::InvalidAmount(raw.to_string()));
    }
    Ok(amount)
}

/// Transient selection state of a mounted form.
///
/// `rate` is kept in step with `from_token`/`to_token` by every setter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwapSelection {
    from_token: Option<Token>,
    to_token: Option<Token>,
    pub amount: String,
    rate: Option<Decimal>,
}

impl SwapSelection {
    pub fn from_token(&self) -> Option<&Token> {
        self.from_token.as_ref()
    }

    pub fn to_token(&self) -> Option<&Token> {
        self.to_token.as_ref()
    }

    pub fn rate(&self) -> Option<Decimal> {
        self.rate
    }

    pub fn set_from(&mut self, token: Option<Token>) {
        self.from_token = token;
        self.recompute_rate();
    }

    pub fn set_to(&mut self, token: Option<Token>) {
        self.to_token = token;
        self.recompute_rate();
    }

    pub fn set_pair(&mut self, from: Option<Token>, to: Option<Token>) {
        self.from_token = from;
        self.to_token = to;
        self.recompute_rate();
    }

    /// Exchange from and to in one step.
    pub fn switch(&mut self) {
        std::mem::swap(&mut self.from_token, &mut self.to_token);
        self.recompute_rate();
    }

    /// From, to and a non-blank amount are all present.
    pub fn is_complete(&self) -> bool {
        self.from_token.is_some() && self.to_token.is_some() && !self.amount.trim().is_empty()
    }

    fn recompute_rate(&mut self) {
        self.rate = derive_rate(self.from_token.as_ref(), self.to_token.as_ref());
    }
}

/// Result of a completed simulated swap.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapReceipt {
    /// Amount exactly as the user entered it.
    pub amount_in: String,
    pub from: Symbol,
    pub amount_out: Decimal,
    pub to: Symbol,
    pub precision: u32,
}

impl SwapReceipt {
    /// `"Swapped 10 A to 5.000000 B"`.
    pub fn message(&self) -> String {
        format!(
            "Swapped {} {} to {} {}",
            self.amount_in,
            self.from,
            fmt::to_fixed(&self.amount_out, self.precision),
            self.to
        )
    }
}
