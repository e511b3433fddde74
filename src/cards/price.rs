use std::fmt;

use serde::{Deserialize, Serialize};

use super::currency::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: f64,
    pub currency: Currency,
}

impl Price {
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Scryfall sends prices as decimal strings ("0.19"), null when there is no market data
    pub fn parse(amount: &str, currency: Currency) -> Option<Self> {
        amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .map(|amount| Price::new(amount, currency))
    }
}

/// Formats the amount only; the currency symbol is added where the price is displayed
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.amount)
    }
}
