use async_trait::async_trait;
use ds_core::{PinStore, PinnedArticle, Result};
use tokio::sync::RwLock;

/// In-memory pin store. Default backend when no persistence path is
/// configured, and the test double for everything built on [`PinStore`].
#[derive(Default)]
pub struct MemoryStore {
    pins: RwLock<Vec<PinnedArticle>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PinStore for MemoryStore {
    async fn load(&self) -> Result<Vec<PinnedArticle>> {
        Ok(self.pins.read().await.clone())
    }

    async fn save(&self, pins: &[PinnedArticle]) -> Result<()> {
        *self.pins.write().await = pins.to_vec();
        Ok(())
    }
}
