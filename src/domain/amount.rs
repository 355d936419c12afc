use crate::error::{PromptPayError, Result};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Fractional digits kept in the transaction amount field.
const AMOUNT_SCALE: u32 = 2;

/// A non-negative transfer amount rounded to two decimal places.
///
/// Rounding is half-away-from-zero on the exact decimal value, so `10.255`
/// becomes `10.26`. The rendered form drops trailing fractional zeros and the
/// decimal point of whole numbers: `1000`, `10.5`, `10.25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonetaryAmount(Decimal);

impl MonetaryAmount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(PromptPayError::NegativeAmount);
        }
        let rounded = value
            .round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        Ok(Self(rounded))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The amount as it appears inside the payload.
    pub fn rendered(&self) -> String {
        self.0.to_string()
    }

    /// Length of [`rendered`](Self::rendered), used as the field length.
    pub fn digit_count(&self) -> usize {
        self.rendered().len()
    }
}

impl TryFrom<Decimal> for MonetaryAmount {
    type Error = PromptPayError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<f64> for MonetaryAmount {
    type Error = PromptPayError;

    fn try_from(value: f64) -> Result<Self> {
        if value < 0.0 {
            return Err(PromptPayError::NegativeAmount);
        }
        let decimal = Decimal::from_f64(value)
            .ok_or_else(|| PromptPayError::InvalidAmount(value.to_string()))?;
        Self::new(decimal)
    }
}

impl FromStr for MonetaryAmount {
    type Err = PromptPayError;

    fn from_str(s: &str) -> Result<Self> {
        let decimal = Decimal::from_str(s.trim())
            .map_err(|e| PromptPayError::InvalidAmount(format!("{s}: {e}")))?;
        Self::new(decimal)
    }
}

impl From<MonetaryAmount> for Decimal {
    fn from(amount: MonetaryAmount) -> Self {
        amount.0
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for MonetaryAmount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.rendered())
    }
}
