//! Swap form state container — app-owned, SDK-provided update logic.
//!
//! The app owns a `SwapForm`, forwards user events to its methods and renders
//! from its getters. The form never spawns tasks: the async steps (`mount`,
//! `swap`) are awaited by the app, or split into begin/apply pairs for UI
//! loops that must keep rendering while they are pending.

use super::{
    parse_amount, Notification, NotificationSink, SwapFormConfig, SwapReceipt, SwapSelection,
};
use crate::client::SwapClient;
use crate::domain::token::Token;
use crate::error::FormError;
use crate::shared::{fmt, Symbol};
use rust_decimal::Decimal;
use std::time::Duration;

const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";
const SWAP_FAILED_MESSAGE: &str = "Failed to swap tokens";

/// Lifecycle phase of a mounted form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormPhase {
    #[default]
    LoadingTokens,
    Ready,
    Swapping,
}

/// The swap form controller.
pub struct SwapForm<S: NotificationSink> {
    config: SwapFormConfig,
    sink: S,
    phase: FormPhase,
    tokens: Vec<Token>,
    selection: SwapSelection,
}

impl<S: NotificationSink> SwapForm<S> {
    /// A form waiting for its token list.
    pub fn new(config: SwapFormConfig, sink: S) -> Self {
        Self {
            config,
            sink,
            phase: FormPhase::LoadingTokens,
            tokens: Vec::new(),
            selection: SwapSelection::default(),
        }
    }

    // ── Mount ────────────────────────────────────────────────────────────

    /// Load the token list and become `Ready`.
    pub async fn mount(&mut self, client: &SwapClient) {
        self.begin_loading();
        let tokens = client.tokens().available().await;
        self.apply_tokens(tokens);
    }

    /// Enter `LoadingTokens`. A pending swap keeps the form in `Swapping`.
    pub fn begin_loading(&mut self) {
        if self.phase != FormPhase::Swapping {
            self.phase = FormPhase::LoadingTokens;
        }
    }

    /// Install the token list, default-select the first two tokens, become `Ready`.
    ///
    /// With fewer than two tokens the selection is cleared. While a swap is
    /// pending the phase stays `Swapping` until `finish_swap`.
    pub fn apply_tokens(&mut self, tokens: Vec<Token>) {
        match tokens.as_slice() {
            [first, second, ..] => self
                .selection
                .set_pair(Some(first.clone()), Some(second.clone())),
            _ => self.selection.set_pair(None, None),
        }
        tracing::info!(tokens = tokens.len(), "Swap form ready");
        self.tokens = tokens;
        if self.phase != FormPhase::Swapping {
            self.phase = FormPhase::Ready;
        }
    }

    // ── Getters ──────────────────────────────────────────────────────────

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FormPhase::LoadingTokens
    }

    pub fn is_swapping(&self) -> bool {
        self.phase == FormPhase::Swapping
    }

    /// Whether the swap trigger should be enabled.
    pub fn can_swap(&self) -> bool {
        self.phase == FormPhase::Ready
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn selection(&self) -> &SwapSelection {
        &self.selection
    }

    pub fn from_token(&self) -> Option<&Token> {
        self.selection.from_token()
    }

    pub fn to_token(&self) -> Option<&Token> {
        self.selection.to_token()
    }

    pub fn amount(&self) -> &str {
        &self.selection.amount
    }

    pub fn rate(&self) -> Option<Decimal> {
        self.selection.rate()
    }

    /// `"1 A = 0.500000 B"`, or `None` while no rate is available.
    pub fn rate_label(&self) -> Option<String> {
        let rate = self.rate()?;
        let from = self.from_token()?;
        let to = self.to_token()?;
        Some(format!(
            "1 {} = {} {}",
            from.symbol,
            fmt::to_fixed(&rate, self.config.output_precision),
            to.symbol
        ))
    }

    /// Output amount the current inputs would produce.
    pub fn quote(&self) -> Option<Decimal> {
        let amount = parse_amount(&self.selection.amount).ok()?;
        amount.checked_mul(self.rate()?)
    }

    // ── User events ──────────────────────────────────────────────────────

    /// Select the "from" token by symbol. Returns `false` (and changes
    /// nothing) when the symbol is not in the token list.
    pub fn select_from(&mut self, symbol: &str) -> bool {
        match self.find(symbol) {
            Some(token) => {
                self.selection.set_from(Some(token));
                true
            }
            None => false,
        }
    }

    /// Select the "to" token by symbol. Unknown symbols are ignored.
    pub fn select_to(&mut self, symbol: &str) -> bool {
        match self.find(symbol) {
            Some(token) => {
                self.selection.set_to(Some(token));
                true
            }
            None => false,
        }
    }

    pub fn switch_tokens(&mut self) {
        self.selection.switch();
    }

    /// Free-form; validated only when a swap is attempted.
    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.selection.amount = amount.into();
    }

    // ── Swap ─────────────────────────────────────────────────────────────

    /// Validate the inputs and enter `Swapping`.
    ///
    /// Missing inputs emit an error notification and leave the state as is.
    /// A swap already in flight, or a token list still loading, is rejected
    /// silently.
    pub fn begin_swap(&mut self) -> Result<PendingSwap, FormError> {
        match self.phase {
            FormPhase::Ready => {}
            FormPhase::Swapping => {
                tracing::debug!("Swap requested while another is pending");
                return Err(FormError::SwapInProgress);
            }
            FormPhase::LoadingTokens => {
                tracing::debug!("Swap requested while tokens are loading");
                return Err(FormError::TokensLoading);
            }
        }

        let (from, to) = match (self.from_token(), self.to_token()) {
            (Some(from), Some(to)) if self.selection.is_complete() => {
                (from.symbol.clone(), to.symbol.clone())
            }
            _ => {
                self.notify_error(MISSING_FIELDS_MESSAGE);
                return Err(FormError::MissingFields);
            }
        };

        self.phase = FormPhase::Swapping;
        tracing::debug!(%from, %to, amount = %self.selection.amount, "Swap started");

        Ok(PendingSwap {
            amount: self.selection.amount.clone(),
            from,
            to,
            rate: self.rate(),
            delay: self.config.swap_delay,
            precision: self.config.output_precision,
        })
    }

    /// Leave `Swapping` and report the outcome.
    pub fn finish_swap(&mut self, result: &Result<SwapReceipt, FormError>) {
        self.phase = FormPhase::Ready;
        match result {
            Ok(receipt) => {
                let message = receipt.message();
                tracing::debug!("{}", message);
                self.sink
                    .notify(Notification::success(message, self.config.success_duration));
            }
            Err(e) => {
                tracing::warn!("Swap failed: {}", e);
                self.notify_error(SWAP_FAILED_MESSAGE);
            }
        }
    }

    /// Run a whole simulated swap: validate, wait, report.
    ///
    /// The form is back in `Ready` when this returns, whatever the outcome.
    pub async fn swap(&mut self) -> Result<SwapReceipt, FormError> {
        let pending = self.begin_swap()?;
        let result = pending.execute().await;
        self.finish_swap(&result);
        result
    }

    fn find(&self, symbol: &str) -> Option<Token> {
        self.tokens.iter().find(|t| t.symbol == symbol).cloned()
    }

    fn notify_error(&self, message: &str) {
        self.sink
            .notify(Notification::error(message, self.config.error_duration));
    }
}

/// A validated swap waiting for its simulated execution.
///
/// Holds a snapshot of the inputs; later edits to the form do not affect it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSwap {
    pub amount: String,
    pub from: Symbol,
    pub to: Symbol,
    pub rate: Option<Decimal>,
    pub delay: Duration,
    pub precision: u32,
}

impl PendingSwap {
    /// Wait out the simulated delay, then compute the receipt.
    ///
    /// A pair without a rate swaps to zero.
    pub async fn execute(self) -> Result<SwapReceipt, FormError> {
        futures_timer::Delay::new(self.delay).await;

        let amount = parse_amount(&self.amount)?;
        let rate = self.rate.unwrap_or(Decimal::ZERO);
        let amount_out = amount
            .checked_mul(rate)
            .ok_or_else(|| FormError::InvalidAmount(self.amount.clone()))?;

        Ok(SwapReceipt {
            amount_in: self.amount,
            from: self.from,
            amount_out,
            to: self.to,
            precision: self.precision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::swap::{NotificationKind, NotificationLog};
    use std::str::FromStr;

    fn token(symbol: &str, price: &str) -> Token {
        Token::new(Symbol::from(symbol), "https://icons.example")
            .with_price(Decimal::from_str(price).unwrap())
    }

    fn instant_config() -> SwapFormConfig {
        SwapFormConfig {
            swap_delay: Duration::ZERO,
            ..SwapFormConfig::default()
        }
    }

    fn ready_form(tokens: Vec<Token>) -> (SwapForm<NotificationLog>, NotificationLog) {
        let log = NotificationLog::new();
        let mut form = SwapForm::new(instant_config(), log.clone());
        form.apply_tokens(tokens);
        (form, log)
    }

    #[test]
    fn test_new_form_is_loading() {
        let form = SwapForm::new(SwapFormConfig::default(), NotificationLog::new());
        assert_eq!(form.phase(), FormPhase::LoadingTokens);
        assert!(form.is_loading());
        assert!(!form.can_swap());
    }

    #[test]
    fn test_apply_tokens_selects_first_two() {
        let (form, _) = ready_form(vec![token("A", "2"), token("B", "4"), token("C", "8")]);
        assert_eq!(form.phase(), FormPhase::Ready);
        assert_eq!(form.from_token().unwrap().symbol, "A");
        assert_eq!(form.to_token().unwrap().symbol, "B");
        assert_eq!(form.rate(), Some(Decimal::from_str("0.5").unwrap()));
        assert_eq!(form.rate_label().as_deref(), Some("1 A = 0.500000 B"));
    }

    #[test]
    fn test_apply_single_token_selects_nothing() {
        let (form, _) = ready_form(vec![token("A", "2")]);
        assert_eq!(form.phase(), FormPhase::Ready);
        assert!(form.from_token().is_none());
        assert!(form.to_token().is_none());
        assert!(form.rate().is_none());
        assert!(form.rate_label().is_none());
    }

    #[test]
    fn test_select_unknown_symbol_is_noop() {
        let (mut form, _) = ready_form(vec![token("A", "2"), token("B", "4")]);
        let before = form.selection().clone();
        assert!(!form.select_from("ZZZ"));
        assert!(!form.select_to("a"));
        assert_eq!(form.selection(), &before);
    }

    #[test]
    fn test_select_recomputes_rate() {
        let (mut form, _) = ready_form(vec![token("A", "2"), token("B", "4"), token("C", "8")]);
        assert!(form.select_to("C"));
        assert_eq!(form.rate(), Some(Decimal::from_str("0.25").unwrap()));
        assert!(form.select_from("C"));
        assert_eq!(form.rate(), Some(Decimal::ONE));
    }

    #[test]
    fn test_switch_tokens_twice_restores_rate() {
        let (mut form, _) = ready_form(vec![token("A", "3"), token("B", "7")]);
        let original = form.rate();
        form.switch_tokens();
        assert_eq!(form.from_token().unwrap().symbol, "B");
        assert_eq!(form.to_token().unwrap().symbol, "A");
        form.switch_tokens();
        assert_eq!(form.rate(), original);
    }

    #[test]
    fn test_quote() {
        let (mut form, _) = ready_form(vec![token("A", "2"), token("B", "4")]);
        assert!(form.quote().is_none());
        form.set_amount("10");
        assert_eq!(form.quote(), Some(Decimal::from(5)));
        form.set_amount("ten");
        assert!(form.quote().is_none());
    }

    #[test]
    fn test_begin_swap_without_amount_notifies() {
        let (mut form, log) = ready_form(vec![token("A", "2"), token("B", "4")]);
        let err = form.begin_swap().unwrap_err();
        assert_eq!(err, FormError::MissingFields);
        assert_eq!(form.phase(), FormPhase::Ready);

        let notes = log.take();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Error);
        assert_eq!(notes[0].message, "Please fill in all fields");
        assert_eq!(notes[0].duration, Duration::from_secs(3));
    }

    #[test]
    fn test_begin_swap_without_tokens_notifies() {
        let (mut form, log) = ready_form(vec![]);
        form.set_amount("1");
        assert_eq!(form.begin_swap().unwrap_err(), FormError::MissingFields);
        assert_eq!(form.phase(), FormPhase::Ready);
        assert!(log.latest().unwrap().is_error());
    }

    #[test]
    fn test_second_begin_swap_is_rejected() {
        let (mut form, log) = ready_form(vec![token("A", "2"), token("B", "4")]);
        form.set_amount("1");
        let pending = form.begin_swap().unwrap();
        assert_eq!(pending.from, "A");
        assert!(form.is_swapping());
        assert!(!form.can_swap());

        assert_eq!(form.begin_swap().unwrap_err(), FormError::SwapInProgress);
        assert!(form.is_swapping());
        assert!(log.is_empty());
    }

    #[test]
    fn test_pending_swap_is_a_snapshot() {
        let (mut form, _) = ready_form(vec![token("A", "2"), token("B", "4"), token("C", "8")]);
        form.set_amount("10");
        let pending = form.begin_swap().unwrap();
        form.select_to("C");
        form.set_amount("99");
        assert_eq!(pending.to, "B");
        assert_eq!(pending.amount, "10");

        let receipt = tokio_test::block_on(pending.execute()).unwrap();
        assert_eq!(receipt.amount_out, Decimal::from(5));
    }

    #[tokio::test]
    async fn test_swap_success() {
        let (mut form, log) = ready_form(vec![token("A", "2"), token("B", "4")]);
        form.set_amount("10");
        let receipt = form.swap().await.unwrap();
        assert_eq!(receipt.message(), "Swapped 10 A to 5.000000 B");
        assert_eq!(form.phase(), FormPhase::Ready);

        let note = log.latest().unwrap();
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(note.title, "Success");
        assert_eq!(note.message, "Swapped 10 A to 5.000000 B");
        assert_eq!(note.duration, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_swap_with_unparseable_amount_fails_generically() {
        let (mut form, log) = ready_form(vec![token("A", "2"), token("B", "4")]);
        form.set_amount("abc");
        let err = form.swap().await.unwrap_err();
        assert_eq!(err, FormError::InvalidAmount("abc".to_string()));
        assert_eq!(form.phase(), FormPhase::Ready);
        assert_eq!(log.latest().unwrap().message, "Failed to swap tokens");
    }

    #[tokio::test]
    async fn test_swap_without_rate_outputs_zero() {
        let (mut form, log) = ready_form(vec![token("A", "2"), token("Z", "0")]);
        assert!(form.rate().is_none());
        form.set_amount("1");
        let receipt = form.swap().await.unwrap();
        assert_eq!(receipt.amount_out, Decimal::ZERO);
        assert_eq!(form.phase(), FormPhase::Ready);

        let note = log.latest().unwrap();
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(note.message, "Swapped 1 A to 0.000000 Z");
    }

    #[test]
    fn test_begin_swap_while_loading_is_rejected() {
        let (mut form, log) = ready_form(vec![token("A", "2"), token("B", "4")]);
        form.set_amount("1");
        form.begin_loading();
        assert!(!form.can_swap());
        assert_eq!(form.begin_swap().unwrap_err(), FormError::TokensLoading);
        assert_eq!(form.phase(), FormPhase::LoadingTokens);
        assert!(log.is_empty());
    }

    #[test]
    fn test_reload_during_swap_keeps_swapping() {
        let (mut form, _) = ready_form(vec![token("A", "2"), token("B", "4")]);
        form.set_amount("1");
        let pending = form.begin_swap().unwrap();

        form.begin_loading();
        assert_eq!(form.phase(), FormPhase::Swapping);
        form.apply_tokens(vec![token("A", "2"), token("B", "4")]);
        assert_eq!(form.phase(), FormPhase::Swapping);
        assert_eq!(form.begin_swap().unwrap_err(), FormError::SwapInProgress);

        let result = tokio_test::block_on(pending.execute());
        form.finish_swap(&result);
        assert_eq!(form.phase(), FormPhase::Ready);
        assert!(form.begin_swap().is_ok());
    }

    #[test]
    fn test_apply_short_list_clears_selection() {
        let (mut form, log) = ready_form(vec![token("A", "2"), token("B", "4")]);
        form.set_amount("10");
        form.begin_loading();
        form.apply_tokens(vec![]);

        assert_eq!(form.phase(), FormPhase::Ready);
        assert!(form.from_token().is_none());
        assert!(form.to_token().is_none());
        assert!(form.rate().is_none());
        assert_eq!(form.begin_swap().unwrap_err(), FormError::MissingFields);
        assert!(log.latest().unwrap().is_error());
    }

    #[test]
    fn test_finish_swap_always_returns_to_ready() {
        let (mut form, log) = ready_form(vec![token("A", "2"), token("B", "4")]);
        form.set_amount("1");
        form.begin_swap().unwrap();
        form.finish_swap(&Err(FormError::InvalidAmount("1".to_string())));
        assert_eq!(form.phase(), FormPhase::Ready);
        assert!(log.latest().unwrap().is_error());
        assert!(form.begin_swap().is_ok());
    }
}
