//! Fixed field values for a single country's payment scheme.
//!
//! A [`Profile`] is built once and passed by reference to the encoder, so the
//! encoder itself never reads global state.

use crate::error::{PromptPayError, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Pixel size handed to renderers when the caller does not choose one.
pub const DEFAULT_QR_SIZE: u32 = 500;

/// The literal values written into every payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Value of tag `00`.
    pub payload_format_indicator: String,
    /// Value of tag `01`.
    pub point_of_initiation: String,
    /// Sub-tag `00` of the merchant account information template.
    pub application_id: String,
    /// ISO 3166 alpha-2 code, tag `58`.
    pub country_code: String,
    /// ISO 4217 numeric code, tag `53`.
    pub currency_code: String,
    /// Replaces the trunk digit of a local mobile number.
    pub mobile_prefix: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self::thai_promptpay()
    }
}

impl Profile {
    pub fn thai_promptpay() -> Self {
        Self {
            payload_format_indicator: "01".to_string(),
            point_of_initiation: "12".to_string(),
            application_id: "A000000677010111".to_string(),
            country_code: "TH".to_string(),
            currency_code: "764".to_string(),
            mobile_prefix: "0066".to_string(),
        }
    }

    /// Reads a profile from JSON. Fields absent from the document keep their
    /// Thai PromptPay values.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let profile: Profile = serde_json::from_reader(reader)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Checks that every field fits a two-digit TLV length and has the
    /// character class its tag requires.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("payload_format_indicator", &self.payload_format_indicator),
            ("point_of_initiation", &self.point_of_initiation),
            ("application_id", &self.application_id),
            ("country_code", &self.country_code),
            ("currency_code", &self.currency_code),
            ("mobile_prefix", &self.mobile_prefix),
        ];
        for (name, value) in fields {
            if value.is_empty() || value.len() > 99 || !value.is_ascii() {
                return Err(invalid(format!(
                    "{name} must be 1 to 99 ASCII characters"
                )));
            }
        }

        if self.country_code.len() != 2
            || !self.country_code.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(invalid("country_code must be 2 uppercase letters".into()));
        }
        if self.currency_code.len() != 3 || !is_digits(&self.currency_code) {
            return Err(invalid("currency_code must be 3 digits".into()));
        }
        if !is_digits(&self.mobile_prefix) {
            return Err(invalid("mobile_prefix must contain only digits".into()));
        }
        // The merchant template holds two sub-fields and must itself stay
        // under 100 bytes for the longest account number this profile yields.
        let account_len = (self.mobile_prefix.len() + 9).max(13);
        if 4 + self.application_id.len() + 4 + account_len > 99 {
            return Err(invalid(
                "application_id and mobile_prefix are too long to fit the merchant template"
                    .into(),
            ));
        }
        Ok(())
    }
}

fn invalid(message: String) -> PromptPayError {
    PromptPayError::InvalidProfile(message)
}

fn is_digits(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}
