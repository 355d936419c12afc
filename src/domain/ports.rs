use super::payload::Payload;
use crate::error::Result;
use async_trait::async_trait;

/// Consumer of finished payloads, such as a QR image renderer.
///
/// `size` is the requested edge length in pixels; implementations fall back
/// to [`DEFAULT_QR_SIZE`](crate::config::DEFAULT_QR_SIZE) when it is `None`.
#[async_trait]
pub trait PayloadRenderer: Send + Sync {
    async fn render(&self, payload: &Payload, size: Option<u32>) -> Result<()>;
}

pub type PayloadRendererBox = Box<dyn PayloadRenderer>;
