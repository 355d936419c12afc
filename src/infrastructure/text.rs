use crate::domain::payload::Payload;
use crate::domain::ports::PayloadRenderer;
use crate::error::Result;
use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

/// Writes each payload as a line of text.
///
/// Stands in for an image renderer where only the payload text is needed,
/// e.g. piping into an external QR tool. The pixel size is ignored.
pub struct TextRenderer<W> {
    writer: Mutex<W>,
}

impl<W: AsyncWrite + Unpin + Send> TextRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> PayloadRenderer for TextRenderer<W> {
    async fn render(&self, payload: &Payload, _size: Option<u32>) -> Result<()> {
        let mut writer = self.writer.lock().await;
        writer.write_all(payload.as_str().as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        Ok(())
    }
}
