use crate::config::Profile;
use crate::domain::amount::MonetaryAmount;
use crate::domain::payload::{Payload, encode};
use crate::domain::ports::PayloadRendererBox;
use crate::domain::request::PayloadRecord;
use crate::domain::target::AccountTarget;
use crate::error::{PromptPayError, Result};

/// Entry point for turning a payee identifier and amount into a payload.
///
/// `PromptPayGenerator` owns the country profile and the renderer that
/// receives finished payloads. Generation itself is pure; only
/// [`publish`](Self::publish) touches the renderer.
pub struct PromptPayGenerator {
    profile: Profile,
    renderer: PayloadRendererBox,
}

impl PromptPayGenerator {
    /// Creates a new `PromptPayGenerator` instance.
    ///
    /// # Arguments
    ///
    /// * `profile` - Fixed field values written into every payload.
    /// * `renderer` - Consumer of published payloads.
    ///
    /// Fails with `InvalidProfile` when a profile field would not fit a
    /// two-digit TLV length.
    pub fn new(profile: Profile, renderer: PayloadRendererBox) -> Result<Self> {
        profile.validate()?;
        Ok(Self { profile, renderer })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Classifies `target`, validates `amount` and encodes the payload.
    ///
    /// Fails with `TargetMismatch` or `NegativeAmount` before any encoding
    /// takes place.
    pub fn generate<A>(&self, target: &str, amount: A) -> Result<Payload>
    where
        A: TryInto<MonetaryAmount, Error = PromptPayError>,
    {
        self.generate_record(target, amount).map(|record| record.payload)
    }

    /// Like [`generate`](Self::generate), but keeps the raw target, its kind
    /// and the rounded amount next to the payload.
    pub fn generate_record<A>(&self, raw: &str, amount: A) -> Result<PayloadRecord>
    where
        A: TryInto<MonetaryAmount, Error = PromptPayError>,
    {
        let target = AccountTarget::classify(raw, &self.profile)?;
        let amount: MonetaryAmount = amount.try_into()?;
        let payload = encode(&target, &amount, &self.profile);
        Ok(PayloadRecord {
            target: raw.to_string(),
            kind: target.kind(),
            amount,
            payload,
        })
    }

    /// Generates the payload and hands it to the renderer.
    pub async fn publish<A>(&self, target: &str, amount: A, size: Option<u32>) -> Result<Payload>
    where
        A: TryInto<MonetaryAmount, Error = PromptPayError>,
    {
        let payload = self.generate(target, amount)?;
        self.renderer.render(&payload, size).await?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::target::AccountKind;
    use crate::infrastructure::in_memory::InMemoryRenderer;
    use rust_decimal_macros::dec;

    fn generator(renderer: InMemoryRenderer) -> PromptPayGenerator {
        PromptPayGenerator::new(Profile::default(), Box::new(renderer)).unwrap()
    }

    #[test]
    fn test_generate_from_decimal_and_float() {
        let generator = generator(InMemoryRenderer::new());
        let from_decimal = generator.generate("0873211829", dec!(10.25)).unwrap();
        let from_float = generator.generate("0873211829", 10.251231_f64).unwrap();
        assert_eq!(from_decimal, from_float);
        assert_eq!(from_decimal.checksum(), "E547");
    }

    #[test]
    fn test_generate_is_deterministic() {
        let generator = generator(InMemoryRenderer::new());
        let first = generator.generate("1-1111-11111-11-1", dec!(1000)).unwrap();
        let second = generator.generate("1-1111-11111-11-1", dec!(1000)).unwrap();
        assert_eq!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_target_checked_before_amount() {
        let generator = generator(InMemoryRenderer::new());
        assert!(matches!(
            generator.generate("08120951245", dec!(-1)),
            Err(PromptPayError::TargetMismatch)
        ));
        assert!(matches!(
            generator.generate("1809900145209", dec!(-100)),
            Err(PromptPayError::NegativeAmount)
        ));
    }

    #[test]
    fn test_generate_record() {
        let generator = generator(InMemoryRenderer::new());
        let record = generator
            .generate_record("1-1111-11111-11-1", dec!(999.999))
            .unwrap();
        assert_eq!(record.target, "1-1111-11111-11-1");
        assert_eq!(record.kind, AccountKind::NationalId);
        assert_eq!(record.amount.rendered(), "1000");
        assert!(record.payload.as_str().ends_with("6304F6A7"));
    }

    #[test]
    fn test_rejects_unvalidated_profile() {
        let overlong = Profile {
            application_id: "A".repeat(120),
            ..Profile::default()
        };
        assert!(matches!(
            PromptPayGenerator::new(overlong, Box::new(InMemoryRenderer::new())),
            Err(PromptPayError::InvalidProfile(_))
        ));

        let non_ascii = Profile {
            application_id: "A00000067701011é".to_string(),
            ..Profile::default()
        };
        assert!(matches!(
            PromptPayGenerator::new(non_ascii, Box::new(InMemoryRenderer::new())),
            Err(PromptPayError::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_longest_valid_profile_keeps_fields_readable() {
        // 4 + 78 + 4 + 13 = 99 bytes of merchant template for a national id.
        let profile = Profile {
            application_id: "A".repeat(78),
            ..Profile::default()
        };
        let generator =
            PromptPayGenerator::new(profile, Box::new(InMemoryRenderer::new())).unwrap();
        let payload = generator.generate("1111111111111", dec!(1000)).unwrap();
        assert_eq!(payload.field("54"), Some("1000"));
        assert!(payload.verify());
    }

    #[tokio::test]
    async fn test_publish_hands_payload_to_renderer() {
        let renderer = InMemoryRenderer::new();
        let generator = generator(renderer.clone());

        let payload = generator
            .publish("0812095124", dec!(1000), Some(300))
            .await
            .unwrap();

        let rendered = renderer.rendered().await;
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].0, payload);
        assert_eq!(rendered[0].1, 300);
    }

    #[tokio::test]
    async fn test_publish_skips_renderer_on_error() {
        let renderer = InMemoryRenderer::new();
        let generator = generator(renderer.clone());

        let result = generator.publish("0812095124", dec!(-5), None).await;
        assert!(matches!(result, Err(PromptPayError::NegativeAmount)));
        assert!(renderer.rendered().await.is_empty());
    }
}
