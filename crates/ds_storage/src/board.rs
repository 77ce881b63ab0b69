use std::sync::Arc;

use chrono::Utc;
use ds_core::{PinStore, PinnedArticle, Result};

/// Pin state service over an injected store. Every operation is a
/// load-modify-save round trip; the store is the single source of truth.
#[derive(Clone)]
pub struct PinBoard {
    store: Arc<dyn PinStore>,
}

impl PinBoard {
    pub fn new(store: Arc<dyn PinStore>) -> Self {
        Self { store }
    }

    pub async fn pins(&self) -> Result<Vec<PinnedArticle>> {
        self.store.load().await
    }

    pub async fn is_pinned(&self, link: &str) -> Result<bool> {
        Ok(self.store.load().await?.iter().any(|pin| pin.link == link))
    }

    /// Toggle a pin. Returns `true` when the article is now pinned.
    ///
    /// Toggling is its own inverse, except that re-pinning records a fresh
    /// `pinned_at`.
    pub async fn toggle(&self, link: &str, title: &str) -> Result<bool> {
        let mut pins = self.store.load().await?;

        let pinned = if pins.iter().any(|pin| pin.link == link) {
            pins.retain(|pin| pin.link != link);
            false
        } else {
            pins.push(PinnedArticle {
                link: link.to_string(),
                title: title.to_string(),
                pinned_at: Utc::now().timestamp_millis(),
            });
            true
        };

        self.store.save(&pins).await?;
        Ok(pinned)
    }

    pub async fn clear(&self) -> Result<()> {
        self.store.save(&[]).await
    }
}
