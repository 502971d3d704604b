//! Formatting utilities for rates and amounts.

pub mod decimal;

pub use decimal::to_fixed;
