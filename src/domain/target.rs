use crate::config::Profile;
use crate::error::{PromptPayError, Result};
use serde::Serialize;
use std::fmt;

/// Digit groups of a hyphenated national id: `D-DDDD-DDDDD-DD-D`.
const NATIONAL_ID_GROUPS: [usize; 5] = [1, 4, 5, 2, 1];
const NATIONAL_ID_MAX_LEN: usize = 13 + NATIONAL_ID_GROUPS.len() - 1;
const MOBILE_LEN: usize = 10;

/// The kind of identifier a payment is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Mobile,
    NationalId,
}

impl AccountKind {
    /// Sub-tag carrying the account number inside the merchant template.
    pub fn code(&self) -> &'static str {
        match self {
            AccountKind::Mobile => "01",
            AccountKind::NationalId => "02",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Mobile => f.write_str("mobile"),
            AccountKind::NationalId => f.write_str("national_id"),
        }
    }
}

/// A classified payee identifier, normalized to the digits the payload carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountTarget {
    kind: AccountKind,
    normalized: String,
}

impl AccountTarget {
    /// Classifies a raw identifier.
    ///
    /// National ids are checked first: 13 digits, optionally hyphenated at the
    /// canonical group boundaries. Otherwise the input must be exactly 10
    /// digits, which is treated as a local mobile number whose trunk digit is
    /// replaced by the profile's international prefix.
    pub fn classify(raw: &str, profile: &Profile) -> Result<Self> {
        let target = if let Some(digits) = national_id_digits(raw) {
            Self {
                kind: AccountKind::NationalId,
                normalized: digits,
            }
        } else if is_mobile(raw) {
            Self {
                kind: AccountKind::Mobile,
                normalized: format!("{}{}", profile.mobile_prefix, &raw[1..]),
            }
        } else {
            return Err(PromptPayError::TargetMismatch);
        };

        tracing::debug!(kind = %target.kind, normalized = %target.normalized, "classified target");
        Ok(target)
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// Walks the five digit groups, allowing at most one hyphen between groups.
/// Returns the 13 digits with separators removed.
fn national_id_digits(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    if bytes.len() < 13 || bytes.len() > NATIONAL_ID_MAX_LEN {
        return None;
    }

    let mut digits = String::with_capacity(13);
    let mut pos = 0;
    for (i, &width) in NATIONAL_ID_GROUPS.iter().enumerate() {
        let group = bytes.get(pos..pos + width)?;
        if !group.iter().all(u8::is_ascii_digit) {
            return None;
        }
        digits.extend(group.iter().map(|&b| b as char));
        pos += width;

        let last = i == NATIONAL_ID_GROUPS.len() - 1;
        if !last && bytes.get(pos) == Some(&b'-') {
            pos += 1;
        }
    }

    (pos == bytes.len()).then_some(digits)
}

fn is_mobile(raw: &str) -> bool {
    raw.len() == MOBILE_LEN && raw.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(raw: &str) -> Result<AccountTarget> {
        AccountTarget::classify(raw, &Profile::default())
    }

    #[test]
    fn test_mobile_number() {
        let target = classify("0812095124").unwrap();
        assert_eq!(target.kind(), AccountKind::Mobile);
        assert_eq!(target.normalized(), "0066812095124");
    }

    #[test]
    fn test_plain_national_id() {
        let target = classify("1111111111111").unwrap();
        assert_eq!(target.kind(), AccountKind::NationalId);
        assert_eq!(target.normalized(), "1111111111111");
    }

    #[test]
    fn test_hyphenated_national_id() {
        let target = classify("1-2345-67890-12-3").unwrap();
        assert_eq!(target.kind(), AccountKind::NationalId);
        assert_eq!(target.normalized(), "1234567890123");
    }

    #[test]
    fn test_partially_hyphenated_national_id() {
        let target = classify("1-234567890-123").unwrap();
        assert_eq!(target.normalized(), "1234567890123");

        let target = classify("123456789012-3").unwrap();
        assert_eq!(target.normalized(), "1234567890123");
    }

    #[test]
    fn test_misplaced_hyphens_rejected() {
        for raw in [
            "12-345-67890-12-3",
            "1--2345-67890-12-3",
            "1-2345-67890-12-3-",
            "-1234567890123",
            "1234-567890123",
        ] {
            assert!(
                matches!(classify(raw), Err(PromptPayError::TargetMismatch)),
                "{raw} should not classify"
            );
        }
    }

    #[test]
    fn test_other_shapes_rejected() {
        for raw in [
            "",
            "08120951245",
            "081209512",
            "123456789012",
            "12345678901234",
            "081-209-5124",
            "08120951a4",
            " 0812095124",
            "0812095124 ",
            "๐๘๑๒๐๙๕๑๒๔",
        ] {
            assert!(
                matches!(classify(raw), Err(PromptPayError::TargetMismatch)),
                "{raw:?} should not classify"
            );
        }
    }

    #[test]
    fn test_mobile_prefix_comes_from_profile() {
        let profile = Profile {
            mobile_prefix: "0084".to_string(),
            ..Profile::default()
        };
        let target = AccountTarget::classify("0912345678", &profile).unwrap();
        assert_eq!(target.normalized(), "0084912345678");
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(AccountKind::Mobile.code(), "01");
        assert_eq!(AccountKind::NationalId.code(), "02");
    }
}
