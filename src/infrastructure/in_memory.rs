use crate::config::DEFAULT_QR_SIZE;
use crate::domain::payload::Payload;
use crate::domain::ports::PayloadRenderer;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe renderer that keeps every payload it receives.
///
/// Clones share the same record, so a test can hand one clone to the
/// generator and inspect the other.
#[derive(Default, Clone)]
pub struct InMemoryRenderer {
    rendered: Arc<RwLock<Vec<(Payload, u32)>>>,
}

impl InMemoryRenderer {
    /// Creates a new, empty in-memory renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads received so far with the pixel size they were requested at.
    pub async fn rendered(&self) -> Vec<(Payload, u32)> {
        self.rendered.read().await.clone()
    }
}

#[async_trait]
impl PayloadRenderer for InMemoryRenderer {
    async fn render(&self, payload: &Payload, size: Option<u32>) -> Result<()> {
        let mut rendered = self.rendered.write().await;
        rendered.push((payload.clone(), size.unwrap_or(DEFAULT_QR_SIZE)));
        Ok(())
    }
}
