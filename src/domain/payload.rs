use super::amount::MonetaryAmount;
use super::crc16::{crc16, format_checksum};
use super::target::AccountTarget;
use crate::config::Profile;
use serde::{Serialize, Serializer};
use std::fmt;

const TAG_PAYLOAD_FORMAT: &str = "00";
const TAG_POINT_OF_INITIATION: &str = "01";
const TAG_MERCHANT_ACCOUNT: &str = "29";
const TAG_APPLICATION_ID: &str = "00";
const TAG_CURRENCY: &str = "53";
const TAG_AMOUNT: &str = "54";
const TAG_COUNTRY: &str = "58";
const TAG_CHECKSUM: &str = "63";
const CHECKSUM_LEN: usize = 4;

/// A finished EMV QR payload, checksum included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Payload(String);

impl Payload {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing four hex digits.
    pub fn checksum(&self) -> &str {
        &self.0[self.0.len() - CHECKSUM_LEN..]
    }

    /// Recomputes the checksum over everything before it.
    pub fn verify(&self) -> bool {
        verify_checksum(&self.0)
    }

    /// Top-level `(tag, value)` pairs in order. Nested templates are returned
    /// as a single value.
    pub fn fields(&self) -> Vec<(&str, &str)> {
        split_fields(&self.0)
    }

    /// Value of the first top-level field with `tag`.
    pub fn field(&self, tag: &str) -> Option<&str> {
        self.fields()
            .into_iter()
            .find_map(|(t, value)| (t == tag).then_some(value))
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Payload> for String {
    fn from(payload: Payload) -> Self {
        payload.0
    }
}

impl AsRef<str> for Payload {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Payload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// Builds the payload for an already validated target, amount and profile.
///
/// Fields are written in a fixed order, each as tag, two-digit length and
/// value. The checksum is computed over the whole string up to and including
/// the checksum tag and its length `04`.
pub fn encode(target: &AccountTarget, amount: &MonetaryAmount, profile: &Profile) -> Payload {
    let mut merchant = String::new();
    push_field(&mut merchant, TAG_APPLICATION_ID, &profile.application_id);
    push_field(&mut merchant, target.kind().code(), target.normalized());

    let mut out = String::with_capacity(96);
    push_field(&mut out, TAG_PAYLOAD_FORMAT, &profile.payload_format_indicator);
    push_field(&mut out, TAG_POINT_OF_INITIATION, &profile.point_of_initiation);
    push_field(&mut out, TAG_MERCHANT_ACCOUNT, &merchant);
    push_field(&mut out, TAG_COUNTRY, &profile.country_code);
    push_field(&mut out, TAG_CURRENCY, &profile.currency_code);
    push_field(&mut out, TAG_AMOUNT, &amount.rendered());

    out.push_str(TAG_CHECKSUM);
    out.push_str(&format!("{CHECKSUM_LEN:02}"));
    let checksum = format_checksum(crc16(out.as_bytes()));
    out.push_str(&checksum);

    tracing::debug!(kind = %target.kind(), amount = %amount, %checksum, "encoded payload");
    Payload(out)
}

/// Checks a payload string received from elsewhere: it must end with the
/// checksum field, and the checksum must match the preceding text.
pub fn verify_checksum(payload: &str) -> bool {
    let Some(split) = payload.len().checked_sub(CHECKSUM_LEN) else {
        return false;
    };
    if !payload.is_char_boundary(split) {
        return false;
    }
    let (body, checksum) = payload.split_at(split);
    let trailer = format!("{TAG_CHECKSUM}{CHECKSUM_LEN:02}");
    body.ends_with(&trailer) && format_checksum(crc16(body.as_bytes())) == checksum
}

fn push_field(out: &mut String, tag: &str, value: &str) {
    out.push_str(tag);
    out.push_str(&format!("{:02}", value.len()));
    out.push_str(value);
}

fn split_fields(mut rest: &str) -> Vec<(&str, &str)> {
    let mut fields = Vec::new();
    while rest.len() >= 4 && rest.is_char_boundary(2) && rest.is_char_boundary(4) {
        let (tag, len) = (&rest[..2], &rest[2..4]);
        let Ok(len) = len.parse::<usize>() else {
            break;
        };
        let end = 4 + len;
        if end > rest.len() || !rest.is_char_boundary(end) {
            break;
        }
        fields.push((tag, &rest[4..end]));
        rest = &rest[end..];
    }
    fields
}
