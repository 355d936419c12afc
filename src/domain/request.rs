use super::amount::MonetaryAmount;
use super::payload::Payload;
use super::target::AccountKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A caller's request as read from a batch file.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    pub target: String,
    pub amount: Decimal,
}

/// A generated payload together with what it was built from.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PayloadRecord {
    pub target: String,
    pub kind: AccountKind,
    pub amount: MonetaryAmount,
    pub payload: Payload,
}
